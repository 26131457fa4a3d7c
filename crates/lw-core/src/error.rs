//! Error types for LuckWheel

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum WheelError {
    #[error("Invalid model: prize list must not be empty")]
    InvalidModel,

    #[error("Sector index {index} out of range (wheel has {len} sectors)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Prize not found: {0:?}")]
    PrizeNotFound(String),

    #[error("Invalid range: min {min} > max {max}")]
    InvalidRange { min: u64, max: u64 },

    #[error("A spin is already in progress")]
    SpinInProgress,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias
pub type WheelResult<T> = Result<T, WheelError>;
