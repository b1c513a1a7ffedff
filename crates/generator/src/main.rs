use clap::Parser;
use crs_tools::{generate, prompt::or_ask, random_seed, GeneratorConfig, SamplingStrategy};
use eyre::Result;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Writes a random square sparse matrix as `crs_matrix_<size>_<seed>.txt`.
/// Arguments left out are asked for on stdin.
#[derive(Parser, Debug)]
#[command(name = "crs-generator", version)]
struct Args {
    /// Rows (and columns) of the square matrix
    size: Option<u32>,
    /// Number of distinct connections (edges)
    connections: Option<u64>,
    /// Seed to regenerate a previous matrix; random when omitted
    #[arg(long, env = "CRS_GENERATOR_SEED")]
    seed: Option<u64>,
    #[arg(long, env = "CRS_GENERATOR_STRATEGY", default_value_t = SamplingStrategy::Rejection)]
    strategy: SamplingStrategy,
    /// Directory the matrix file is written to
    #[arg(long, env = "CRS_GENERATOR_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,
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
    let size = or_ask(
        args.size,
        "Enter matrix size (the matrix is square so insert only 1 number): ",
    )?;
    let connections = or_ask(args.connections, "Enter number of connections (edges): ")?;

    let config = GeneratorConfig::new(size, connections, args.seed.unwrap_or_else(random_seed))
        .with_strategy(args.strategy);
    debug!(?config, "generating");

    let path = generate(&config, &args.out_dir)?;
    println!("CRS matrix written to {}", path.display());

    Ok(())
}
