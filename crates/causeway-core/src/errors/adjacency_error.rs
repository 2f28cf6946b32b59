//! Adjacency result contract violations.

use super::error_code::{self, CausewayErrorCode};

/// A malformed `AdjacencyResult`. Always fatal: no partial recovery is attempted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdjacencyError {
    #[error("matrix has {rows} rows but {columns} column labels")]
    DimensionMismatch { rows: usize, columns: usize },

    #[error("matrix row {row} has width {width}, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },

    #[error("duplicate column label: {label}")]
    DuplicateColumn { label: String },

    #[error("non-finite coefficient at [{row}][{column}]")]
    NonFiniteCoefficient { row: usize, column: usize },
}

impl CausewayErrorCode for AdjacencyError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_ADJACENCY
    }
}
