use std::io::BufRead;

use anyhow::Result;

use crate::error::BwtError;

/// 一行输入对应的一条序列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    /// 1-based 行号
    pub line_no: usize,
    pub seq: String,
}

/// 逐行读取序列，每行一条。行尾的 `\n` / `\r\n` 会被去掉，其余字符原样保留。
pub struct LineReader<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
            done: false,
        }
    }

    /// 已读取的行数
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// 读取下一条记录。非 UTF-8 的行返回 [`BwtError::InvalidInputType`]。
    pub fn next_record(&mut self) -> Result<Option<SeqRecord>> {
        if self.done {
            return Ok(None);
        }

        self.buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            self.done = true;
            return Ok(None);
        }
        self.line_no += 1;

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        let seq = std::str::from_utf8(&self.buf)
            .map_err(|e| BwtError::InvalidInputType(format!("line {}: {}", self.line_no, e)))?
            .to_string();
        Ok(Some(SeqRecord { line_no: self.line_no, seq }))
    }
}
