use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Matrix size must be a positive integer")]
    ZeroMatrixSize,
    #[error("Number of connections ({connections}) cannot exceed total elements in a {size}x{size} matrix")]
    TooManyConnections { size: u32, connections: u64 },
    #[error("A {size}x{size} matrix has more cells than can be addressed on this platform")]
    MatrixTooLarge { size: u32 },
    #[error("Number of runs must be at least 1")]
    ZeroRepetitions,
    #[error("All {requested} runs failed, no average to report")]
    NoSuccessfulRuns { requested: u32 },
    #[error("Failed to launch `{}`", executable.display())]
    Spawn {
        executable: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid answer `{input}`: {reason}")]
    InvalidInput { input: String, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}
