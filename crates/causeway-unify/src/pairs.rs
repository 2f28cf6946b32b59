//! Causal pair extraction and comparison against a discovered process model.
//!
//! A pair is `(from, to)`: `from` causes `to`. Pairs from a unified result
//! are compared against the pairs of a process model to list the
//! dependencies one has and the other lacks.

use std::collections::BTreeMap;

use causeway_core::AdjacencyResult;
use serde::{Deserialize, Serialize};

/// `(from, to)` activity labels.
pub type Pair = (String, String);

/// Causal pairs keyed by `(from, to)`, valued by coefficient.
pub type CausalPairs = BTreeMap<Pair, f64>;

/// Extract every dependency of `result` as a pair.
///
/// With `p_threshold`, coefficients below it are dropped first; the
/// comparison is signed, so negative coefficients never survive a threshold.
pub fn causal_pairs(result: &AdjacencyResult, p_threshold: Option<f64>) -> CausalPairs {
    let filtered;
    let source = match p_threshold {
        Some(p) => {
            filtered = result.filtered(p);
            &filtered
        }
        None => result,
    };
    source
        .edges()
        .into_iter()
        .map(|(from, to, value)| ((from.to_string(), to.to_string()), value))
        .collect()
}

/// Dependencies present on one side only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairDiff {
    /// In the causal result, missing from the process model.
    pub added: Vec<Pair>,
    /// In the process model, missing from the causal result.
    pub removed: Vec<Pair>,
}

impl PairDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Compare the pairs of a process model with causal pairs. Both lists come
/// out sorted because the inputs are ordered maps.
pub fn diff_pairs<P, C>(process: &BTreeMap<Pair, P>, causal: &BTreeMap<Pair, C>) -> PairDiff {
    let added = causal
        .keys()
        .filter(|pair| !process.contains_key(*pair))
        .cloned()
        .collect();
    let removed = process
        .keys()
        .filter(|pair| !causal.contains_key(*pair))
        .cloned()
        .collect();
    PairDiff { added, removed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(from: &str, to: &str) -> Pair {
        (from.to_string(), to.to_string())
    }

    fn sample() -> AdjacencyResult {
        // rows are targets: matrix[1][0] is a -> b
        AdjacencyResult::new(
            vec![
                vec![0.0, 0.0, 0.0],
                vec![0.9, 0.0, 0.0],
                vec![-0.6, 0.3, 0.0],
            ],
            vec!["a".into(), "b".into(), "c".into()],
        )
        .unwrap()
    }

    #[test]
    fn pairs_follow_column_to_row_orientation() {
        let pairs = causal_pairs(&sample(), None);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs.get(&pair("a", "b")), Some(&0.9));
        assert_eq!(pairs.get(&pair("b", "c")), Some(&0.3));
        assert_eq!(pairs.get(&pair("a", "c")), Some(&-0.6));
        assert!(!pairs.contains_key(&pair("b", "a")));
    }

    #[test]
    fn threshold_is_signed() {
        let pairs = causal_pairs(&sample(), Some(0.5));
        assert_eq!(pairs.keys().cloned().collect::<Vec<_>>(), vec![pair("a", "b")]);
    }

    #[test]
    fn diff_lists_both_sides_sorted() {
        let process: BTreeMap<Pair, ()> = [pair("a", "b"), pair("x", "y"), pair("c", "d")]
            .into_iter()
            .map(|p| (p, ()))
            .collect();
        let causal = causal_pairs(&sample(), None);

        let diff = diff_pairs(&process, &causal);
        assert_eq!(diff.added, vec![pair("a", "c"), pair("b", "c")]);
        assert_eq!(diff.removed, vec![pair("c", "d"), pair("x", "y")]);
        assert!(!diff.is_empty());
    }

    #[test]
    fn identical_sides_have_no_diff() {
        let causal = causal_pairs(&sample(), None);
        assert!(diff_pairs(&causal, &causal).is_empty());
    }
}
