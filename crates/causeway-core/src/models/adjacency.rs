//! The adjacency result exchanged at every boundary of the engine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::AdjacencyError;

/// A dense causal adjacency matrix plus its ordered column labels.
///
/// `matrix[i][j]` is the causal-strength coefficient from `columns[j]` to
/// `columns[i]`. An entry of exactly `0.0` means "no edge".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyResult {
    /// Row `i` holds the coefficients pointing *into* `columns[i]`.
    pub matrix: Vec<Vec<f64>>,
    /// Activity (or gate) names, unique, in matrix order.
    pub columns: Vec<String>,
}

impl AdjacencyResult {
    /// Build a validated result.
    pub fn new(matrix: Vec<Vec<f64>>, columns: Vec<String>) -> Result<Self, AdjacencyError> {
        let result = Self { matrix, columns };
        result.validate()?;
        Ok(result)
    }

    /// An all-zero matrix over the given labels.
    pub fn empty<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let n = columns.len();
        Self {
            matrix: vec![vec![0.0; n]; n],
            columns,
        }
    }

    /// Check the square-matrix and unique-label contract.
    pub fn validate(&self) -> Result<(), AdjacencyError> {
        let n = self.columns.len();
        if self.matrix.len() != n {
            return Err(AdjacencyError::DimensionMismatch {
                rows: self.matrix.len(),
                columns: n,
            });
        }
        for (row, values) in self.matrix.iter().enumerate() {
            if values.len() != n {
                return Err(AdjacencyError::RaggedRow {
                    row,
                    width: values.len(),
                    expected: n,
                });
            }
            if let Some(column) = values.iter().position(|v| !v.is_finite()) {
                return Err(AdjacencyError::NonFiniteCoefficient { row, column });
            }
        }

        let mut seen = HashSet::with_capacity(n);
        for label in &self.columns {
            if !seen.insert(label.as_str()) {
                return Err(AdjacencyError::DuplicateColumn {
                    label: label.clone(),
                });
            }
        }
        Ok(())
    }

    /// Number of labels (the matrix dimension).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a label in `columns`.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// Coefficient of the edge `from -> to`, if both labels exist.
    pub fn coefficient(&self, from: &str, to: &str) -> Option<f64> {
        let j = self.index_of(from)?;
        let i = self.index_of(to)?;
        self.matrix.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Set the coefficient of `from -> to`. Returns `false` if a label is unknown.
    pub fn set_coefficient(&mut self, from: &str, to: &str, value: f64) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(j), Some(i)) => {
                self.matrix[i][j] = value;
                true
            }
            _ => false,
        }
    }

    /// Copy with every coefficient below `threshold` zeroed.
    ///
    /// The comparison is signed: negative coefficients are always dropped
    /// when a threshold is given.
    pub fn filtered(&self, threshold: f64) -> Self {
        let matrix = self
            .matrix
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| if v < threshold { 0.0 } else { v })
                    .collect()
            })
            .collect();
        Self {
            matrix,
            columns: self.columns.clone(),
        }
    }

    /// Every non-zero entry as `(from, to, coefficient)`, row-major.
    pub fn edges(&self) -> Vec<(&str, &str, f64)> {
        let mut edges = Vec::new();
        for (i, row) in self.matrix.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value != 0.0 {
                    edges.push((self.columns[j].as_str(), self.columns[i].as_str(), value));
                }
            }
        }
        edges
    }
}
