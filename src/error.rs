use thiserror::Error;

use crate::terminator::ALLOWED_TERMINATORS;

/// 正变换 / 逆变换的全部错误类型。
///
/// 每种错误都有稳定的数值代码（见 [`BwtError::code`]），CLI 以它作为退出码。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BwtError {
    /// 输入不是符号序列（例如文本输入不是合法 UTF-8）
    #[error("the input is not a sequence of symbols: {0}")]
    InvalidInputType(String),

    /// 终止符不是恰好一个符号
    #[error("the terminator must be exactly one symbol, got {0:?}")]
    InvalidTerminatorFormat(String),

    /// 终止符不在允许列表中
    #[error("terminator {0:?} is not allowed; allowed terminators are: {list} ('$' default)", list = allowed_list())]
    TerminatorNotAllowed(char),

    /// 原始序列中已包含终止符
    #[error("the input cannot contain the terminator character ({0:?})")]
    TerminatorAlreadyPresent(char),

    /// 变换后的序列中缺少终止符
    #[error("the input does not contain the terminator character ({0:?}); not a transformed sequence")]
    TerminatorMissing(char),

    /// 变换后的序列中终止符出现多次
    #[error("the terminator ({terminator:?}) occurs {count} times in the transformed sequence; it must occur exactly once")]
    TerminatorDuplicated { terminator: char, count: usize },

    /// 加上终止符后的长度超出 u32 下标范围
    #[error("sequence of length {len} exceeds the maximum supported length {max}")]
    SequenceTooLong { len: usize, max: usize },
}

impl BwtError {
    /// 稳定的数值错误代码，CLI 退出码与 JSON 输出中的 code 字段。
    pub fn code(&self) -> i32 {
        match self {
            BwtError::TerminatorAlreadyPresent(_) => 1,
            BwtError::TerminatorMissing(_) => 2,
            BwtError::TerminatorDuplicated { .. } => 3,
            BwtError::InvalidInputType(_) => 4,
            BwtError::InvalidTerminatorFormat(_) => 5,
            BwtError::TerminatorNotAllowed(_) => 6,
            BwtError::SequenceTooLong { .. } => 7,
        }
    }

    /// 错误种类名，用于 JSON 输出和日志
    pub fn kind(&self) -> &'static str {
        match self {
            BwtError::InvalidInputType(_) => "InvalidInputType",
            BwtError::InvalidTerminatorFormat(_) => "InvalidTerminatorFormat",
            BwtError::TerminatorNotAllowed(_) => "TerminatorNotAllowed",
            BwtError::TerminatorAlreadyPresent(_) => "TerminatorAlreadyPresent",
            BwtError::TerminatorMissing(_) => "TerminatorMissing",
            BwtError::TerminatorDuplicated { .. } => "TerminatorDuplicated",
            BwtError::SequenceTooLong { .. } => "SequenceTooLong",
        }
    }
}

fn allowed_list() -> String {
    ALLOWED_TERMINATORS.iter().collect()
}

pub type Result<T> = std::result::Result<T, BwtError>;
