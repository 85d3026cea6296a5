use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BwtError, Result};

/// 允许作为终止符的符号（固定集合）
pub const ALLOWED_TERMINATORS: [char; 6] = ['$', '&', '*', '-', '%', '#'];

pub const DEFAULT_TERMINATOR: char = '$';

/// 经过校验的终止符。
///
/// 只能通过 [`Terminator::new`] / [`Terminator::parse`] 构造，因此持有的字符
/// 一定属于 [`ALLOWED_TERMINATORS`]。排序时终止符总是小于其它所有符号。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Terminator(char);

impl Terminator {
    pub fn new(c: char) -> Result<Self> {
        if ALLOWED_TERMINATORS.contains(&c) {
            Ok(Self(c))
        } else {
            Err(BwtError::TerminatorNotAllowed(c))
        }
    }

    /// 从字符串解析终止符：先检查是否恰好一个字符，再检查允许列表。
    pub fn parse(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(BwtError::InvalidTerminatorFormat(s.to_string())),
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        self.0
    }

    /// 以序列的符号类型表示终止符
    #[inline]
    pub fn symbol<T: Symbol>(self) -> T {
        T::from_terminator(self)
    }
}

impl Default for Terminator {
    fn default() -> Self {
        Self(DEFAULT_TERMINATOR)
    }
}

impl fmt::Display for Terminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Terminator {
    type Error = BwtError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Terminator> for String {
    fn from(t: Terminator) -> Self {
        t.0.to_string()
    }
}

/// 可以参与 BWT 的符号类型：全序、可复制，且能表示终止符。
pub trait Symbol: Copy + Ord + fmt::Debug {
    fn from_terminator(t: Terminator) -> Self;
}

impl Symbol for char {
    #[inline]
    fn from_terminator(t: Terminator) -> Self {
        t.0
    }
}

impl Symbol for u8 {
    #[inline]
    fn from_terminator(t: Terminator) -> Self {
        // 允许列表全部是 ASCII
        t.0 as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_allowed_terminator() {
        for &c in &ALLOWED_TERMINATORS {
            let t = Terminator::parse(&c.to_string()).unwrap();
            assert_eq!(t.as_char(), c);
            assert_eq!(t.symbol::<u8>(), c as u8);
        }
    }

    #[test]
    fn parse_rejects_wrong_length() {
        for bad in ["", "%$", "$$", "abc"] {
            assert_eq!(
                Terminator::parse(bad),
                Err(BwtError::InvalidTerminatorFormat(bad.to_string()))
            );
        }
    }

    #[test]
    fn parse_rejects_symbols_outside_allow_list() {
        assert_eq!(Terminator::parse("+"), Err(BwtError::TerminatorNotAllowed('+')));
        assert_eq!(Terminator::new('a'), Err(BwtError::TerminatorNotAllowed('a')));
        // 多字节字符也是“一个符号”，因此报告的是不在允许列表中
        assert_eq!(Terminator::parse("é"), Err(BwtError::TerminatorNotAllowed('é')));
    }

    #[test]
    fn default_is_dollar() {
        assert_eq!(Terminator::default().as_char(), '$');
        assert_eq!(Terminator::default().to_string(), "$");
    }

    #[test]
    fn serde_goes_through_validation() {
        let t: Terminator = serde_json::from_str("\"#\"").unwrap();
        assert_eq!(t.as_char(), '#');
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"#\"");
        assert!(serde_json::from_str::<Terminator>("\"+\"").is_err());
        assert!(serde_json::from_str::<Terminator>("\"$$\"").is_err());
    }
}
