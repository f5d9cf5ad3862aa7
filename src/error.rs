use thiserror::Error;

/// Errors raised while reading or analysing a tile count vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShantenError {
    /// A kind's count is negative or exceeds four.
    #[error("invalid hand: kind {kind} has {count} tiles (expected 0..=4)")]
    InvalidHand { kind: usize, count: i32 },

    #[error("unknown tile notation: {0}")]
    InvalidTile(String),

    #[error("pending digits without suit: {0}")]
    PendingDigits(String),

    #[error("no more copies of tile kind {kind}")]
    TooManyCopies { kind: usize },
}

#[cfg(feature = "python")]
impl From<ShantenError> for pyo3::PyErr {
    fn from(err: ShantenError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
