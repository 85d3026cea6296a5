//! # bwt-rust
//!
//! Burrows-Wheeler 变换（BWT）及其逆变换的 Rust 实现。
//!
//! 本 crate 提供：
//!
//! - **正变换**：追加终止符，构建后缀数组（SA-IS 或倍增法），取后缀数组的前驱符号得到 BWT
//! - **逆变换**：单趟计算秩表 P 与字母表前缀计数表 C，沿 LF 映射回溯还原原序列
//! - **终止符校验**：终止符必须是允许列表 `$ & * - % #` 中的单个符号
//!
//! ## 快速示例
//!
//! ```rust
//! use bwt_rust::{inverse_str, transform_str};
//!
//! let bwt = transform_str("acctg", "$").unwrap();
//! assert_eq!(bwt, "g$actc");
//! assert_eq!(inverse_str(&bwt, "$").unwrap(), "acctg");
//! ```
//!
//! 任意实现了 [`Symbol`] 的符号类型（`char`、`u8`）都可以直接变换：
//!
//! ```rust
//! use bwt_rust::{inverse, transform, Terminator};
//!
//! let t = Terminator::parse("#").unwrap();
//! let bwt = transform(b"banana".as_slice(), t).unwrap();
//! assert_eq!(bwt, b"annb#aa".to_vec());
//! assert_eq!(inverse(bwt.as_slice(), t).unwrap(), b"banana".to_vec());
//! ```
//!
//! ## 模块说明
//!
//! - [`terminator`]：终止符允许列表与校验、[`Symbol`] 符号类型
//! - [`index`]：字母表编码、后缀数组、BWT、LF 映射表
//! - [`transform`]：正变换 / 逆变换入口
//! - [`io`]：逐行文本输入
//! - [`batch`]：批量处理（CLI 使用）
//! - [`error`]：错误类型

pub mod batch;
pub mod error;
pub mod index;
pub mod io;
pub mod terminator;
pub mod transform;

pub use error::{BwtError, Result};
pub use index::sa::SaAlgorithm;
pub use terminator::{Symbol, Terminator, ALLOWED_TERMINATORS, DEFAULT_TERMINATOR};
pub use transform::{
    inverse, inverse_str, inverse_str_with_opt, inverse_with_opt, transform, transform_str,
    transform_str_with_opt, transform_with_opt, BwtOpt,
};
