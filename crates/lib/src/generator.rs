use crate::{
    connection::{check_request, sample_connections, ConnectionSet, SamplingStrategy},
    error::Error,
    naming::output_file_name,
    writer::write_crs,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::info;

/// Largest seed picked when none is supplied.
pub const MAX_SEED: u64 = 999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Rows and columns of the square matrix.
    pub size: u32,
    pub connections: u64,
    pub seed: u64,
    pub strategy: SamplingStrategy,
}

impl GeneratorConfig {
    pub fn new(size: u32, connections: u64, seed: u64) -> Self {
        Self {
            size,
            connections,
            seed,
            strategy: SamplingStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: SamplingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        check_request(self.size, self.connections)
    }

    pub fn file_name(&self) -> String {
        output_file_name(self.size, self.seed)
    }

    pub fn sample(&self) -> Result<ConnectionSet, Error> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        sample_connections(self.size, self.connections, self.strategy, &mut rng)
    }
}

/// Picks a fresh seed in `0..=MAX_SEED` from the thread-local generator.
pub fn random_seed() -> u64 {
    rand::thread_rng().gen_range(0..=MAX_SEED)
}

/// Samples the document described by `config` into `writer`.
pub fn generate_into<W: Write>(config: &GeneratorConfig, writer: W) -> Result<(), Error> {
    let connections = config.sample()?;
    write_crs(config.size, &connections, writer)?;
    Ok(())
}

/// Writes a new document into `out_dir` and returns its path.
///
/// Parameters are validated before the file is created, so a rejected request
/// leaves nothing behind.
pub fn generate(config: &GeneratorConfig, out_dir: &Path) -> Result<PathBuf, Error> {
    config.validate()?;
    info!("Random seed for this run: {}", config.seed);

    let connections = config.sample()?;
    let path = out_dir.join(config.file_name());
    let mut file = BufWriter::new(File::create(&path)?);
    write_crs(config.size, &connections, &mut file)?;
    file.flush()?;

    info!(
        path = %path.display(),
        size = config.size,
        connections = config.connections,
        strategy = %config.strategy,
        "CRS matrix written"
    );
    Ok(path)
}
