//! Error type shared by the whole crate.

use thiserror::Error;

use crate::board::Position;

/// Failures that indicate a calling bug or a bad configuration.
///
/// Lock contention and unaffordable purchases are *not* errors; those paths
/// return `false` and the caller retries later.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("position ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("shuffle task moves {0:?} onto itself")]
    DegenerateTask(Position),
    #[error("time scale must be finite and >= 0, got {0}")]
    InvalidTimeScale(f64),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("no monkey at index {index} (have {count})")]
    UnknownMonkey { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, SimError>;
