//! 变换所需的索引结构：字母表编码、后缀数组、BWT 与 LF 映射。

pub mod alphabet;
pub mod bwt;
pub mod lf;
pub mod sa;
