use std::io::{BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{error, info};

use bwt_rust::batch::{run_batch, BatchOpt, Direction, Report};
use bwt_rust::{BwtError, BwtOpt, SaAlgorithm, Terminator};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "bwt-rust", author, version, about = "Burrows-Wheeler transform and its inverse", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the Burrows-Wheeler transform of each input sequence
    Transform {
        #[command(flatten)]
        io: IoArgs,
        /// Suffix array construction algorithm
        #[arg(long = "sa", value_enum, default_value_t = SaAlgorithm::SaIs)]
        sa: SaAlgorithm,
        /// Input length from which the doubling sort runs in parallel
        #[arg(long = "parallel-threshold", default_value_t = 100_000)]
        parallel_threshold: usize,
    },
    /// Invert the Burrows-Wheeler transform of each input sequence
    Inverse {
        #[command(flatten)]
        io: IoArgs,
    },
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Sequence to process; if omitted, one sequence per line is read from --file or stdin
    input: Option<String>,
    /// Terminator symbol, one of: $ & * - % #
    #[arg(short = 't', long = "terminator", default_value = "$")]
    terminator: String,
    /// Read sequences from this file, one per line
    #[arg(short = 'f', long = "file", conflicts_with = "input")]
    file: Option<String>,
    /// Output path (stdout if omitted)
    #[arg(short, long)]
    out: Option<String>,
    /// Write one JSON record per input; failed records are reported inline and do not change the exit status
    #[arg(long)]
    json: bool,
    /// Worker threads for batch input
    #[arg(long = "threads", default_value_t = 1)]
    threads: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(exit_code(&e));
    }
}

/// 错误 -> 进程退出码：BwtError 用自身代码，I/O 错误为 IOERR，其余为 SOFTWARE
fn exit_code(e: &anyhow::Error) -> i32 {
    if let Some(bwt_err) = e.downcast_ref::<BwtError>() {
        bwt_err.code()
    } else if e.downcast_ref::<std::io::Error>().is_some() {
        exitcode::IOERR
    } else {
        exitcode::SOFTWARE
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Transform { io, sa, parallel_threshold } => {
            let bwt = BwtOpt {
                terminator: Terminator::parse(&io.terminator)?,
                sa_algorithm: sa,
                parallel_threshold,
            };
            run_direction(Direction::Transform, &io, bwt)
        }
        Commands::Inverse { io } => {
            let bwt = BwtOpt::with_terminator(Terminator::parse(&io.terminator)?);
            run_direction(Direction::Inverse, &io, bwt)
        }
    }
}

fn run_direction(direction: Direction, io: &IoArgs, bwt: BwtOpt) -> Result<()> {
    let opt = BatchOpt {
        bwt,
        direction,
        json: io.json,
        threads: io.threads,
        ..BatchOpt::default()
    };
    info!("{:?} with options {}", direction, serde_json::to_string(&opt.bwt)?);

    let mut out: Box<dyn Write> = if let Some(p) = &io.out {
        let fh = std::fs::File::create(p).with_context(|| format!("cannot create output '{}'", p))?;
        Box::new(BufWriter::new(fh))
    } else {
        Box::new(BufWriter::new(std::io::stdout()))
    };

    if let Some(seq) = &io.input {
        // 单条序列：不按行拆分
        let res = direction.apply(seq, &opt.bwt);
        if opt.json {
            serde_json::to_writer(&mut out, &Report::new(1, Some(seq.clone()), res, &opt.bwt))?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", res?)?;
        }
        out.flush()?;
        return Ok(());
    }

    let stats = if let Some(path) = &io.file {
        let fh = std::fs::File::open(path).with_context(|| format!("cannot open input file '{}'", path))?;
        run_batch(BufReader::new(fh), &mut out, &opt)?
    } else {
        let stdin = std::io::stdin();
        run_batch(stdin.lock(), &mut out, &opt)?
    };
    if stats.failed > 0 {
        info!("{} of {} records failed", stats.failed, stats.records);
    }
    Ok(())
}
