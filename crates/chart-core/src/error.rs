// File: crates/chart-core/src/error.rs
// Summary: Error type for data preparation; a single `InvalidInput` kind.

use thiserror::Error;

/// Errors raised by the chart core.
///
/// Empty data, all-empty points and zero guide lines are valid inputs and never
/// produce an error; they yield a degenerate result instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    /// Malformed or mismatched series shapes, or non-positive layout parameters.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ChartError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidInput(format!("malformed json: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
