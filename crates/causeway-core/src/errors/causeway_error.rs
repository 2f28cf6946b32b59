//! Top-level error aggregating every subsystem error.

use super::error_code::CausewayErrorCode;
use super::{AdjacencyError, ConfigError, UnifyError};

/// Any error surfaced by Causeway.
#[derive(Debug, thiserror::Error)]
pub enum CausewayError {
    #[error("Adjacency error: {0}")]
    Adjacency(#[from] AdjacencyError),

    #[error("Unification error: {0}")]
    Unify(#[from] UnifyError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CausewayErrorCode for CausewayError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Adjacency(e) => e.error_code(),
            Self::Unify(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type CausewayResult<T> = Result<T, CausewayError>;
