use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("corpus has no pages")]
    EmptyCorpus,

    #[error("damping factor must be in (0, 1), got {0}")]
    InvalidDamping(f64),

    #[error("sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),

    #[error("convergence tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    #[error("round cap must be at least 1, got {0}")]
    InvalidMaxRounds(usize),

    #[error("page {0} is not in the corpus")]
    UnknownPage(String),

    #[error("no convergence after {rounds} rounds (last delta {delta})")]
    ConvergenceFailure { rounds: usize, delta: f64 },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
