use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{BwtError, Result};
use crate::index::alphabet::Alphabet;
use crate::index::bwt::build_bwt;
use crate::index::lf::LfTable;
use crate::index::sa::{build_suffix_array, SaAlgorithm};
use crate::terminator::{Symbol, Terminator};

/// 加上终止符后的最大长度：后缀数组与计数表使用 u32 下标
pub const MAX_TEXT_LEN: usize = u32::MAX as usize;

/// 变换参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BwtOpt {
    pub terminator: Terminator,
    pub sa_algorithm: SaAlgorithm,
    /// 倍增法中，文本长度达到该阈值时使用并行排序
    pub parallel_threshold: usize,
}

impl Default for BwtOpt {
    fn default() -> Self {
        Self {
            terminator: Terminator::default(),
            sa_algorithm: SaAlgorithm::default(),
            parallel_threshold: 100_000,
        }
    }
}

impl BwtOpt {
    pub fn with_terminator(terminator: Terminator) -> Self {
        Self { terminator, ..Self::default() }
    }
}

fn check_len(len: usize) -> Result<()> {
    if len > MAX_TEXT_LEN {
        return Err(BwtError::SequenceTooLong { len, max: MAX_TEXT_LEN });
    }
    Ok(())
}

/// 计算 BWT（默认参数）
pub fn transform<T: Symbol>(seq: &[T], terminator: Terminator) -> Result<Vec<T>> {
    transform_with_opt(seq, &BwtOpt::with_terminator(terminator))
}

/// 计算 BWT：追加终止符 -> 构建后缀数组 -> 取每个后缀的前一个符号。
pub fn transform_with_opt<T: Symbol>(seq: &[T], opt: &BwtOpt) -> Result<Vec<T>> {
    let term = opt.terminator.symbol::<T>();
    if seq.contains(&term) {
        return Err(BwtError::TerminatorAlreadyPresent(opt.terminator.as_char()));
    }
    check_len(seq.len() + 1)?;

    let alphabet = Alphabet::from_seq(seq, opt.terminator);
    let mut text = alphabet.encode_seq(seq);
    text.push(0);
    debug!("transform: n={}, sigma={}", text.len(), alphabet.sigma());

    let sa = build_suffix_array(&text, alphabet.sigma(), opt.sa_algorithm, opt.parallel_threshold);
    let bwt = build_bwt(&text, &sa);
    Ok(alphabet.decode_seq(&bwt))
}

/// BWT 逆变换（默认参数）
pub fn inverse<T: Symbol>(seq: &[T], terminator: Terminator) -> Result<Vec<T>> {
    inverse_with_opt(seq, &BwtOpt::with_terminator(terminator))
}

/// BWT 逆变换：构建 P / C 表，从终止符位置沿 LF 链回溯得到原序列。
pub fn inverse_with_opt<T: Symbol>(seq: &[T], opt: &BwtOpt) -> Result<Vec<T>> {
    let term = opt.terminator.symbol::<T>();
    let mut hits = seq.iter().enumerate().filter(|&(_, &s)| s == term).map(|(i, _)| i);
    let primary = hits
        .next()
        .ok_or(BwtError::TerminatorMissing(opt.terminator.as_char()))?;
    let extra = hits.count();
    if extra > 0 {
        return Err(BwtError::TerminatorDuplicated {
            terminator: opt.terminator.as_char(),
            count: extra + 1,
        });
    }
    check_len(seq.len())?;

    let alphabet = Alphabet::from_seq(seq, opt.terminator);
    let table = LfTable::build(alphabet.encode_seq(seq), alphabet.sigma());
    debug!("inverse: n={}, sigma={}, primary={}", table.len(), table.sigma, primary);

    let decoded = table.walk(primary);
    // 回溯顺序的最后一位总是终止符，丢弃
    Ok(decoded[..seq.len() - 1].iter().map(|&i| seq[i as usize]).collect())
}

/// 文本版正变换。终止符以字符串给出，先校验格式与允许列表。
pub fn transform_str(seq: &str, terminator: &str) -> Result<String> {
    let opt = BwtOpt::with_terminator(Terminator::parse(terminator)?);
    transform_str_with_opt(seq, &opt)
}

pub fn transform_str_with_opt(seq: &str, opt: &BwtOpt) -> Result<String> {
    let chars: Vec<char> = seq.chars().collect();
    Ok(transform_with_opt(&chars, opt)?.into_iter().collect())
}

/// 文本版逆变换
pub fn inverse_str(seq: &str, terminator: &str) -> Result<String> {
    let opt = BwtOpt::with_terminator(Terminator::parse(terminator)?);
    inverse_str_with_opt(seq, &opt)
}

pub fn inverse_str_with_opt(seq: &str, opt: &BwtOpt) -> Result<String> {
    let chars: Vec<char> = seq.chars().collect();
    Ok(inverse_with_opt(&chars, opt)?.into_iter().collect())
}
