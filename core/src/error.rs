use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatError {
    #[error("Length mismatch: {left} vs {right} observations")]
    LengthMismatch { left: usize, right: usize },

    #[error("Insufficient data for '{what}': need at least {needed}, got {actual}")]
    InsufficientData {
        what:   &'static str,
        needed: usize,
        actual: usize,
    },

    #[error("Zero variance in '{what}'")]
    ZeroVariance { what: &'static str },

    #[error("Distribution error: {0}")]
    Distribution(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type StatResult<T> = Result<T, StatError>;
