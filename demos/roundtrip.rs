//! 演示如何在 library 模式下使用 bwt-rust 进行正变换与逆变换。
//!
//! 运行方式：
//! ```bash
//! cargo run --example roundtrip
//! ```

use bwt_rust::index::alphabet::Alphabet;
use bwt_rust::index::lf::LfTable;
use bwt_rust::index::sa;
use bwt_rust::{inverse_str, transform_str, BwtError, Terminator};

fn main() -> Result<(), BwtError> {
    // 1. 正变换
    let text = "itopinon";
    let coded = transform_str(text, "$")?;
    println!("原序列: {}", text);
    println!("BWT:    {}", coded);

    // 2. 手动查看后缀数组
    let t = Terminator::default();
    let chars: Vec<char> = text.chars().collect();
    let alpha = Alphabet::from_seq(&chars, t);
    let mut codes = alpha.encode_seq(&chars);
    codes.push(0);
    let sa_arr = sa::build_sa_is(&codes, alpha.sigma());
    println!("\n后缀数组（字母表大小 {}）:", alpha.sigma());
    let augmented: Vec<char> = chars.iter().copied().chain(std::iter::once('$')).collect();
    for (rank, &p) in sa_arr.iter().enumerate() {
        let suffix: String = augmented[p as usize..].iter().collect();
        println!("  {:>2}  S={:>2}  {}", rank, p, suffix);
    }

    // 3. P / C 表
    let coded_chars: Vec<char> = coded.chars().collect();
    let table = LfTable::build(alpha.encode_seq(&coded_chars), alpha.sigma());
    println!("\nP 表: {:?}", table.rank);
    println!("C 表: {:?}", table.c);

    // 4. 逆变换
    let decoded = inverse_str(&coded, "$")?;
    println!("\n逆变换: {}", decoded);
    assert_eq!(decoded, text);

    // 5. 错误示例
    for (seq, term) in [("ciao$", "$"), ("oi%oac", "+"), ("oi%oac", "%$")] {
        match transform_str(seq, term) {
            Ok(out) => println!("transform({:?}, {:?}) = {:?}", seq, term, out),
            Err(e) => println!("transform({:?}, {:?}) 失败 [code {}]: {}", seq, term, e.code(), e),
        }
    }

    println!("\n完成！");
    Ok(())
}
