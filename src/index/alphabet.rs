use crate::terminator::{Symbol, Terminator};

/// 有序字母表：把任意全序符号压缩为稠密编码 `0..sigma`。
///
/// - 编码 0 固定留给终止符（$），保证它小于所有其它符号；
/// - 其余不同符号按 `Ord` 升序编码为 `1..sigma`。
///
/// 因为 `sigma <= n + 1`，下游的计数表都可以用稠密数组，与原始字母表大小无关。
#[derive(Debug, Clone)]
pub struct Alphabet<T> {
    terminator: T,
    /// 除终止符外的不同符号，升序
    symbols: Vec<T>,
}

impl<T: Symbol> Alphabet<T> {
    /// 从序列中收集字母表（忽略其中的终止符）
    pub fn from_seq(seq: &[T], terminator: Terminator) -> Self {
        let term = terminator.symbol::<T>();
        let mut symbols: Vec<T> = seq.iter().copied().filter(|&s| s != term).collect();
        symbols.sort_unstable();
        symbols.dedup();
        Self { terminator: term, symbols }
    }

    /// 编码数量（含终止符）
    #[inline]
    pub fn sigma(&self) -> usize {
        self.symbols.len() + 1
    }

    /// 符号 -> 编码。不在字母表中的符号返回 None。
    #[inline]
    pub fn encode(&self, s: T) -> Option<u32> {
        if s == self.terminator {
            return Some(0);
        }
        self.symbols.binary_search(&s).ok().map(|i| i as u32 + 1)
    }

    /// 编码 -> 符号
    #[inline]
    pub fn decode(&self, code: u32) -> T {
        if code == 0 {
            self.terminator
        } else {
            self.symbols[code as usize - 1]
        }
    }

    /// 对整条序列编码。序列中的每个符号都必须来自本字母表。
    pub fn encode_seq(&self, seq: &[T]) -> Vec<u32> {
        seq.iter()
            .map(|&s| self.encode(s).unwrap_or_else(|| unreachable!("symbol {:?} not in alphabet", s)))
            .collect()
    }

    pub fn decode_seq(&self, codes: &[u32]) -> Vec<T> {
        codes.iter().map(|&c| self.decode(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminator_gets_code_zero() {
        let t = Terminator::default();
        let seq: Vec<char> = "ciao$".chars().collect();
        let alpha = Alphabet::from_seq(&seq, t);
        // $ a c i o
        assert_eq!(alpha.sigma(), 5);
        assert_eq!(alpha.encode_seq(&seq), vec![2, 3, 1, 4, 0]);
        assert_eq!(alpha.decode_seq(&[0, 1, 2, 3, 4]), vec!['$', 'a', 'c', 'i', 'o']);
    }

    #[test]
    fn terminator_sorts_below_smaller_code_points() {
        // '!' < '$' 按码点排序，但终止符仍然编码为 0
        let t = Terminator::default();
        let seq: &[u8] = b"a!b";
        let alpha = Alphabet::from_seq(seq, t);
        assert_eq!(alpha.encode(b'$'), Some(0));
        assert_eq!(alpha.encode(b'!'), Some(1));
        assert_eq!(alpha.encode(b'a'), Some(2));
        assert_eq!(alpha.encode(b'z'), None);
    }

    #[test]
    fn empty_sequence_has_only_terminator() {
        let alpha = Alphabet::<u8>::from_seq(&[], Terminator::parse("#").unwrap());
        assert_eq!(alpha.sigma(), 1);
        assert_eq!(alpha.decode(0), b'#');
    }
}
