use log::{debug, trace};
use rayon::slice::ParallelSliceMut;
use serde::{Deserialize, Serialize};

/// 后缀数组构建算法。两种算法输出完全一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SaAlgorithm {
    /// SA-IS 诱导排序，O(n)
    #[default]
    #[value(name = "sais")]
    SaIs,
    /// 倍增法，O(n log² n)，大输入时可并行排序
    Doubling,
}

/// 按配置构建后缀数组。
/// text 为稠密编码（0..sigma），且必须以唯一的最小编码 0 结尾。
pub fn build_suffix_array(text: &[u32], sigma: usize, algo: SaAlgorithm, parallel_threshold: usize) -> Vec<u32> {
    debug!("building suffix array: n={}, sigma={}, algo={:?}", text.len(), sigma, algo);
    match algo {
        SaAlgorithm::SaIs => build_sa_is(text, sigma),
        SaAlgorithm::Doubling => build_sa_doubling(text, text.len() >= parallel_threshold),
    }
}

/// 构建后缀数组（基于倍增法，O(n log n) 轮排序）。
/// 允许文本中包含多个 0；越过文本末尾的位置按 -1 处理（比任何编码都小）。
/// `parallel` 为 true 时使用 rayon 并行排序：比较键是全序的，结果与串行一致。
pub fn build_sa_doubling(text: &[u32], parallel: bool) -> Vec<u32> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<i64> = text.iter().map(|&c| i64::from(c)).collect();
    let mut tmp: Vec<i64> = vec![0; n];

    let mut k = 1usize;
    loop {
        let key = |i: usize| (rank[i], if i + k < n { rank[i + k] } else { -1 });
        if parallel {
            sa.par_sort_unstable_by_key(|&i| key(i));
        } else {
            sa.sort_unstable_by_key(|&i| key(i));
        }

        tmp[sa[0]] = 0;
        for i in 1..n {
            let a = sa[i - 1];
            let b = sa[i];
            tmp[b] = tmp[a] + i64::from(key(a) != key(b));
        }

        // 复制回 rank
        rank.copy_from_slice(&tmp);
        trace!("doubling round k={} distinct ranks={}", k, rank[sa[n - 1]] + 1);
        if rank[sa[n - 1]] as usize == n - 1 || k >= n {
            break;
        }
        k <<= 1;
    }

    sa.into_iter().map(|x| x as u32).collect()
}

const EMPTY: usize = usize::MAX;

/// SA-IS（Nong, Zhang & Chan 2009）诱导排序构建后缀数组。
/// text 必须以唯一的最小编码 0 结尾，所有编码 < sigma。
pub fn build_sa_is(text: &[u32], sigma: usize) -> Vec<u32> {
    debug_assert!(text.last().map_or(true, |&c| c == 0), "text must end with sentinel 0");
    sa_is(text, sigma).into_iter().map(|x| x as u32).collect()
}

fn sa_is(s: &[u32], sigma: usize) -> Vec<usize> {
    let n = s.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![0],
        _ => {}
    }

    // 第一步：S/L 类型划分（true 为 S 型），末尾哨兵为 S 型
    let mut stype = vec![false; n];
    stype[n - 1] = true;
    for i in (0..n - 1).rev() {
        stype[i] = s[i] < s[i + 1] || (s[i] == s[i + 1] && stype[i + 1]);
    }
    let is_lms = |i: usize| i > 0 && stype[i] && !stype[i - 1];

    // 桶计数
    let mut counts = vec![0usize; sigma];
    for &c in s {
        counts[c as usize] += 1;
    }

    // 第二步：LMS 后缀放到各桶尾，诱导排序得到 LMS 子串的顺序
    let lms: Vec<usize> = (1..n).filter(|&i| is_lms(i)).collect();
    let mut sa = vec![EMPTY; n];
    let mut tails = bucket_tails(&counts);
    for &p in lms.iter().rev() {
        let c = s[p] as usize;
        tails[c] -= 1;
        sa[tails[c]] = p;
    }
    induce(&mut sa, s, &stype, &counts);

    // 第三步：为 LMS 子串命名
    let mut names = vec![EMPTY; n];
    let mut name = 0usize;
    let mut prev: Option<usize> = None;
    for &p in sa.iter().filter(|&&p| p != EMPTY && is_lms(p)) {
        if let Some(q) = prev {
            if !lms_substring_eq(s, &stype, p, q) {
                name += 1;
            }
        }
        names[p] = name;
        prev = Some(p);
    }
    let reduced: Vec<u32> = lms.iter().map(|&p| names[p] as u32).collect();

    // 第四步：对缩减串递归（名称不唯一时）或直接求逆得到 LMS 后缀顺序
    let reduced_sa = if name + 1 < reduced.len() {
        trace!("sa-is recursion: {} lms, {} names", reduced.len(), name + 1);
        sa_is(&reduced, name + 1)
    } else {
        let mut r = vec![0usize; reduced.len()];
        for (i, &c) in reduced.iter().enumerate() {
            r[c as usize] = i;
        }
        r
    };

    // 第五步：按正确顺序放回 LMS 后缀，再次诱导
    sa.fill(EMPTY);
    let mut tails = bucket_tails(&counts);
    for &r in reduced_sa.iter().rev() {
        let p = lms[r];
        let c = s[p] as usize;
        tails[c] -= 1;
        sa[tails[c]] = p;
    }
    induce(&mut sa, s, &stype, &counts);

    sa
}

fn bucket_heads(counts: &[usize]) -> Vec<usize> {
    let mut heads = Vec::with_capacity(counts.len());
    let mut acc = 0usize;
    for &c in counts {
        heads.push(acc);
        acc += c;
    }
    heads
}

fn bucket_tails(counts: &[usize]) -> Vec<usize> {
    let mut tails = Vec::with_capacity(counts.len());
    let mut acc = 0usize;
    for &c in counts {
        acc += c;
        tails.push(acc);
    }
    tails
}

/// 由已放置的 LMS 后缀诱导 L 型（从左到右）和 S 型（从右到左）后缀
fn induce(sa: &mut [usize], s: &[u32], stype: &[bool], counts: &[usize]) {
    let n = s.len();
    let mut heads = bucket_heads(counts);
    for i in 0..n {
        let j = sa[i];
        if j != EMPTY && j > 0 && !stype[j - 1] {
            let c = s[j - 1] as usize;
            sa[heads[c]] = j - 1;
            heads[c] += 1;
        }
    }
    let mut tails = bucket_tails(counts);
    for i in (0..n).rev() {
        let j = sa[i];
        if j != EMPTY && j > 0 && stype[j - 1] {
            let c = s[j - 1] as usize;
            tails[c] -= 1;
            sa[tails[c]] = j - 1;
        }
    }
}

/// 比较两个 LMS 子串（含结尾的下一个 LMS 位置）是否相同
fn lms_substring_eq(s: &[u32], stype: &[bool], p: usize, q: usize) -> bool {
    let n = s.len();
    let is_lms = |i: usize| i > 0 && stype[i] && !stype[i - 1];
    let mut d = 0usize;
    loop {
        let (a, b) = (p + d, q + d);
        if a >= n || b >= n {
            return false;
        }
        if s[a] != s[b] || stype[a] != stype[b] {
            return false;
        }
        if d > 0 {
            match (is_lms(a), is_lms(b)) {
                (true, true) => return true,
                (false, false) => {}
                _ => return false,
            }
        }
        d += 1;
    }
}
