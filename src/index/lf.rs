/// LF 映射表：由编码后的 BWT（最后一列 L）构建，用于逆变换。
///
/// - `c[a]`：L 中编码小于 a 的符号总数（字母表前缀计数）
/// - `rank[i]`：L[i] 在 L[0..i) 中出现的次数
///
/// 则 `lf(i) = rank[i] + c[L[i]]` 给出 L[i] 在第一列中的位置，
/// 也就是原序列中 L[i] 前一个符号在 L 中的位置。
#[derive(Debug)]
pub struct LfTable {
    pub sigma: usize,
    /// C[a] = L 中字母 < a 的累计数量
    pub c: Vec<u32>,
    /// P[i] = L[i] 在前缀 L[0..i) 中的出现次数
    pub rank: Vec<u32>,
    /// 编码后的 L
    pub bwt: Vec<u32>,
}

impl LfTable {
    /// bwt 为稠密编码（0..sigma）
    pub fn build(bwt: Vec<u32>, sigma: usize) -> Self {
        // 单趟计算 P：每个字母维护一个计数器
        let mut running = vec![0u32; sigma];
        let mut rank = Vec::with_capacity(bwt.len());
        for &a in &bwt {
            let ai = a as usize;
            rank.push(running[ai]);
            running[ai] += 1;
        }

        // 计算 C 表：此时 running 即为各字母的频数
        let mut c = vec![0u32; sigma];
        let mut acc = 0u32;
        for (ci, &freq) in c.iter_mut().zip(&running) {
            *ci = acc;
            acc += freq;
        }

        Self { sigma, c, rank, bwt }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bwt.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bwt.is_empty()
    }

    #[inline]
    pub fn lf(&self, i: usize) -> usize {
        (self.rank[i] + self.c[self.bwt[i] as usize]) as usize
    }

    /// 从 `start`（终止符在 L 中的位置）出发沿前驱链回溯 n 步。
    /// 返回 decoded，使得 L[decoded[0]], ..., L[decoded[n-1]] 为原序列加终止符。
    /// 对合法的 BWT，前驱链是长度为 n 的单环；此处不做运行时校验。
    pub fn walk(&self, start: usize) -> Vec<u32> {
        let n = self.len();
        let mut decoded = vec![0u32; n];
        let mut i = start;
        for j in (0..n).rev() {
            decoded[j] = i as u32;
            i = self.lf(i);
        }
        decoded
    }
}
