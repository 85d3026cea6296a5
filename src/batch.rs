use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::BwtError;
use crate::io::lines::LineReader;
use crate::transform::{inverse_str_with_opt, transform_str_with_opt, BwtOpt};

/// 变换方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Transform,
    Inverse,
}

impl Direction {
    pub fn apply(self, seq: &str, opt: &BwtOpt) -> std::result::Result<String, BwtError> {
        match self {
            Direction::Transform => transform_str_with_opt(seq, opt),
            Direction::Inverse => inverse_str_with_opt(seq, opt),
        }
    }
}

/// 批处理参数
#[derive(Debug, Clone, Copy)]
pub struct BatchOpt {
    pub bwt: BwtOpt,
    pub direction: Direction,
    /// 每行输出一个 JSON 对象；单行失败不会中断整批
    pub json: bool,
    pub threads: usize,
    /// 每批并行处理的行数
    pub chunk_size: usize,
}

impl Default for BatchOpt {
    fn default() -> Self {
        Self {
            bwt: BwtOpt::default(),
            direction: Direction::Transform,
            json: false,
            threads: 1,
            chunk_size: 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub records: usize,
    pub failed: usize,
}

/// `--json` 模式下每行一条的输出记录
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Report {
    Success {
        line: usize,
        input: String,
        output: String,
        terminator: String,
    },
    Failure {
        line: usize,
        input: Option<String>,
        error: String,
        kind: String,
        code: i32,
    },
}

impl Report {
    pub fn new(line: usize, input: Option<String>, res: std::result::Result<String, BwtError>, opt: &BwtOpt) -> Self {
        match res {
            Ok(output) => Report::Success {
                line,
                input: input.unwrap_or_default(),
                output,
                terminator: opt.terminator.to_string(),
            },
            Err(e) => Report::Failure {
                line,
                input,
                error: e.to_string(),
                kind: e.kind().to_string(),
                code: e.code(),
            },
        }
    }
}

/// 一行待处理的输入：读取失败（非 UTF-8）的行也保留行号
type Item = (usize, std::result::Result<String, BwtError>);

/// 对每行输入执行正/逆变换，按输入顺序写出结果。
///
/// 非 JSON 模式下遇到第一个错误立即返回（错误链中包含 [`BwtError`]）。
pub fn run_batch<R: BufRead, W: Write>(reader: R, out: &mut W, opt: &BatchOpt) -> Result<BatchStats> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opt.threads.max(1))
        .build()
        .context("cannot build thread pool")?;
    info!(
        "batch {:?}: terminator={}, sa={:?}, threads={}, json={}",
        opt.direction, opt.bwt.terminator, opt.bwt.sa_algorithm, opt.threads, opt.json
    );

    let mut lines = LineReader::new(reader);
    let mut stats = BatchStats::default();
    let chunk_size = opt.chunk_size.max(1);
    let mut chunk: Vec<Item> = Vec::with_capacity(chunk_size);

    loop {
        chunk.clear();
        while chunk.len() < chunk_size {
            match lines.next_record() {
                Ok(Some(rec)) => chunk.push((rec.line_no, Ok(rec.seq))),
                Ok(None) => break,
                Err(e) => match e.downcast::<BwtError>() {
                    Ok(bwt_err) => chunk.push((lines.line_no(), Err(bwt_err))),
                    Err(io_err) => return Err(io_err.context("cannot read input")),
                },
            }
        }
        if chunk.is_empty() {
            break;
        }
        debug!("processing chunk of {} lines", chunk.len());

        let results: Vec<std::result::Result<String, BwtError>> = pool.install(|| {
            chunk
                .par_iter()
                .map(|(_, input)| match input {
                    Ok(seq) => opt.direction.apply(seq, &opt.bwt),
                    Err(e) => Err(e.clone()),
                })
                .collect()
        });

        for ((line, input), res) in chunk.drain(..).zip(results) {
            stats.records += 1;
            if res.is_err() {
                stats.failed += 1;
            }
            if opt.json {
                if let Err(e) = &res {
                    warn!("line {}: {}", line, e);
                }
                let report = Report::new(line, input.ok(), res, &opt.bwt);
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            } else {
                let output = res.with_context(|| format!("line {}", line))?;
                writeln!(out, "{}", output)?;
            }
        }
    }

    out.flush()?;
    info!("processed {} records, {} failed", stats.records, stats.failed);
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &[u8], opt: &BatchOpt) -> (Result<BatchStats>, String) {
        let mut out = Vec::new();
        let res = run_batch(Cursor::new(input), &mut out, opt);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn transforms_each_line_in_order() {
        let opt = BatchOpt { threads: 2, chunk_size: 2, ..BatchOpt::default() };
        let (res, out) = run(b"acctg\nciao\nitopinon\n", &opt);
        assert_eq!(res.unwrap(), BatchStats { records: 3, failed: 0 });
        assert_eq!(out, "g$actc\noi$ca\nnp$ointoi\n");
    }

    #[test]
    fn inverse_direction() {
        let opt = BatchOpt { direction: Direction::Inverse, ..BatchOpt::default() };
        let (res, out) = run(b"g$actc\r\noi$ca\n", &opt);
        assert_eq!(res.unwrap().records, 2);
        assert_eq!(out, "acctg\nciao\n");
    }

    #[test]
    fn plain_mode_stops_at_first_error() {
        let opt = BatchOpt { direction: Direction::Inverse, ..BatchOpt::default() };
        let (res, out) = run(b"g$actc\nciao\noi$ca\n", &opt);
        let err = res.unwrap_err();
        assert_eq!(err.downcast_ref::<BwtError>(), Some(&BwtError::TerminatorMissing('$')));
        assert!(format!("{:#}", err).contains("line 2"));
        assert_eq!(out, "acctg\n");
    }

    #[test]
    fn json_mode_reports_every_line() {
        let opt = BatchOpt { direction: Direction::Inverse, json: true, ..BatchOpt::default() };
        let (res, out) = run(b"g$actc\nci$ao$\n\xff\n", &opt);
        assert_eq!(res.unwrap(), BatchStats { records: 3, failed: 2 });

        let reports: Vec<Report> = out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(
            reports[0],
            Report::Success {
                line: 1,
                input: "g$actc".to_string(),
                output: "acctg".to_string(),
                terminator: "$".to_string(),
            }
        );
        match &reports[1] {
            Report::Failure { line, kind, code, .. } => {
                assert_eq!(*line, 2);
                assert_eq!(kind, "TerminatorDuplicated");
                assert_eq!(*code, 3);
            }
            other => panic!("unexpected report {:?}", other),
        }
        match &reports[2] {
            Report::Failure { line, input, kind, .. } => {
                assert_eq!(*line, 3);
                assert_eq!(*input, None);
                assert_eq!(kind, "InvalidInputType");
            }
            other => panic!("unexpected report {:?}", other),
        }
    }
}
