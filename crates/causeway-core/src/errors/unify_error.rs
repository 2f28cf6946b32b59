//! Unification errors.

use super::error_code::{self, CausewayErrorCode};
use super::AdjacencyError;

/// Errors raised by the unification driver.
#[derive(Debug, thiserror::Error)]
pub enum UnifyError {
    #[error("unification needs at least one adjacency result")]
    EmptyInput,

    #[error("input {index} is malformed: {source}")]
    InvalidInput {
        index: usize,
        #[source]
        source: AdjacencyError,
    },

    #[error("variant group {group} failed: {source}")]
    GroupFailed {
        group: usize,
        #[source]
        source: Box<UnifyError>,
    },
}

impl CausewayErrorCode for UnifyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => error_code::EMPTY_INPUT,
            Self::InvalidInput { source, .. } => source.error_code(),
            Self::GroupFailed { .. } => error_code::GROUP_FAILED,
        }
    }
}
