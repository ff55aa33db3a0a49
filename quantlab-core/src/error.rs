//! Error types for the core crate.
//!
//! Numerical edge cases (zero average loss, zero ROC base, zero peak, zero
//! previous equity) are not errors; each has a fixed fallback value at its
//! call site.

use thiserror::Error;

/// Errors raised by indicator, strategy, and engine construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("strategy produced {actual} signals for {expected} prices")]
    SignalLengthMismatch { expected: usize, actual: usize },
}

impl CoreError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
