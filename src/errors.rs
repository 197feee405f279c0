//! Error types

use thiserror::Error;

/// Errors raised while building a drawing from unchecked input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("Repeat length must not be negative, got {length}")]
    NegativeLength { length: i64 },
}

impl DrawError {
    pub fn negative_length(length: i64) -> Self {
        Self::NegativeLength { length }
    }
}
