use crate::error::Error;
use rand::{seq::index, Rng};
use std::collections::BTreeSet;
use strum_macros::{Display, EnumString};

/// One non-zero entry of the matrix, 1-indexed.
///
/// Ordering is by row, then column, which is also the order rows are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Connection {
    pub row: u32,
    pub col: u32,
}

impl Connection {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

pub type ConnectionSet = BTreeSet<Connection>;

/// How distinct `(row, col)` pairs are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SamplingStrategy {
    /// Draw random pairs and keep the new ones until enough are collected.
    /// Slows down sharply as the requested count approaches `size * size`.
    #[default]
    Rejection,
    /// Sample distinct cell indices out of all `size * size` cells at once.
    Shuffle,
}

/// Rejects requests that can't produce a valid document, before anything is sampled.
pub fn check_request(size: u32, connections: u64) -> Result<(), Error> {
    if size == 0 {
        return Err(Error::ZeroMatrixSize);
    }
    let cells = u64::from(size) * u64::from(size);
    if connections > cells {
        return Err(Error::TooManyConnections { size, connections });
    }
    Ok(())
}

pub fn sample_connections<R: Rng + ?Sized>(
    size: u32,
    connections: u64,
    strategy: SamplingStrategy,
    rng: &mut R,
) -> Result<ConnectionSet, Error> {
    check_request(size, connections)?;
    let wanted = usize::try_from(connections).map_err(|_| Error::MatrixTooLarge { size })?;

    Ok(match strategy {
        SamplingStrategy::Rejection => {
            let mut set = ConnectionSet::new();
            while set.len() < wanted {
                let row = rng.gen_range(1..=size);
                let col = rng.gen_range(1..=size);
                set.insert(Connection::new(row, col));
            }
            set
        }
        SamplingStrategy::Shuffle => {
            let cells = usize::try_from(u64::from(size) * u64::from(size))
                .map_err(|_| Error::MatrixTooLarge { size })?;
            let width = size as usize;
            index::sample(rng, cells, wanted)
                .into_iter()
                .map(|cell| Connection::new((cell / width) as u32 + 1, (cell % width) as u32 + 1))
                .collect()
        }
    })
}
