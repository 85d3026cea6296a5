//! 文本输入：每行一条序列。

pub mod lines;
