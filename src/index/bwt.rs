/// 根据后缀数组构建 BWT。
/// text 为已追加终止符的序列，sa 为其后缀数组：B[i] = text[S[i] - 1]，S[i] == 0 时取末尾的终止符。
pub fn build_bwt<T: Copy>(text: &[T], sa: &[u32]) -> Vec<T> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    debug_assert_eq!(sa.len(), n);
    sa.iter()
        .map(|&p| {
            let i = p as usize;
            if i == 0 { text[n - 1] } else { text[i - 1] }
        })
        .collect()
}
