use clap::Parser;
use crs_tools::{prompt::or_ask, run_program, AveragePolicy, ProcessLauncher, RunConfig};
use eyre::Result;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Runs `<program> <matrix file> <source node>` repeatedly and reports the mean wall-clock time.
/// Arguments left out are asked for on stdin.
#[derive(Parser, Debug)]
#[command(name = "crs-bench", version)]
struct Args {
    /// Program under test
    #[arg(env = "CRS_BENCH_PROGRAM")]
    program: Option<PathBuf>,
    /// Matrix file handed to the program
    #[arg(env = "CRS_BENCH_MATRIX")]
    matrix_file: Option<PathBuf>,
    /// Source node handed to the program
    #[arg(env = "CRS_BENCH_SOURCE")]
    source: Option<String>,
    /// Number of runs
    #[arg(env = "CRS_BENCH_RUNS")]
    runs: Option<u32>,
    /// Divide the total time by the `requested` number of runs or only the `successful` ones
    #[arg(long, env = "CRS_BENCH_AVERAGE_OVER", default_value_t = AveragePolicy::Requested)]
    average_over: AveragePolicy,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();
    let config = RunConfig::new(
        or_ask(args.program, "Enter the path to the program: ")?,
        or_ask(args.matrix_file, "Enter the path to the matrix file: ")?,
        or_ask(args.source, "Enter the source node: ")?,
        or_ask(args.runs, "Enter the number of runs: ")?,
    )?;
    debug!(?config, policy = %args.average_over, "starting benchmark");

    let report = run_program(&config, &mut ProcessLauncher, args.average_over)?;
    if report.failed() > 0 {
        debug!(failed = report.failed(), "some runs failed");
    }

    println!(
        "Average execution time over {} runs: {:.4} ms",
        report.requested, report.average_ms
    );

    Ok(())
}
