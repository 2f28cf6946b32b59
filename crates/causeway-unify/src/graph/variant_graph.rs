//! Thresholded per-variant graph built from one adjacency result.

use std::collections::HashMap;

use causeway_core::errors::AdjacencyError;
use causeway_core::{AdjacencyResult, DependencyDirection};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::successors::ActivitySet;

/// Directed graph over one variant's activities.
///
/// An edge `u -> v` means "u causes v" with a coefficient whose magnitude
/// reached the strength cutoff. Immutable once built.
#[derive(Debug, Clone)]
pub struct VariantGraph {
    /// Node weights are activity labels, edge weights the input coefficients.
    graph: DiGraph<String, f64>,
    /// Map from label → NodeIndex for O(1) lookup.
    node_index: HashMap<String, NodeIndex>,
}

impl VariantGraph {
    /// Build the thresholded graph of `result`.
    ///
    /// The matrix is read transposed: `matrix[i][j]` becomes the edge
    /// `columns[j] -> columns[i]`. Coefficients that are zero or whose
    /// magnitude is below `strength` are dropped.
    pub fn build(result: &AdjacencyResult, strength: f64) -> Result<Self, AdjacencyError> {
        result.validate()?;

        let mut graph = DiGraph::with_capacity(result.len(), result.len());
        let mut node_index = HashMap::with_capacity(result.len());
        let nodes: Vec<NodeIndex> = result
            .columns
            .iter()
            .map(|label| {
                let idx = graph.add_node(label.clone());
                node_index.insert(label.clone(), idx);
                idx
            })
            .collect();

        for (to, row) in result.matrix.iter().enumerate() {
            for (from, &coefficient) in row.iter().enumerate() {
                if coefficient != 0.0 && coefficient.abs() >= strength {
                    graph.add_edge(nodes[from], nodes[to], coefficient);
                }
            }
        }

        Ok(Self { graph, node_index })
    }

    pub fn contains(&self, label: &str) -> bool {
        self.node_index.contains_key(label)
    }

    /// Direct successors of `label`, or `None` if the node is absent.
    pub fn successors(&self, label: &str) -> Option<ActivitySet> {
        self.neighbors(label, DependencyDirection::Successors)
    }

    /// Direct predecessors of `label`, or `None` if the node is absent.
    pub fn predecessors(&self, label: &str) -> Option<ActivitySet> {
        self.neighbors(label, DependencyDirection::Predecessors)
    }

    /// Neighbours of `label` in the given dependency direction.
    pub fn neighbors(&self, label: &str, direction: DependencyDirection) -> Option<ActivitySet> {
        let idx = *self.node_index.get(label)?;
        let dir = match direction {
            DependencyDirection::Successors => Direction::Outgoing,
            DependencyDirection::Predecessors => Direction::Incoming,
        };
        Some(
            self.graph
                .neighbors_directed(idx, dir)
                .map(|n| self.graph[n].clone())
                .collect(),
        )
    }

    /// Labels in matrix order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(|idx| self.graph[idx].as_str())
    }

    /// Every retained edge as `(from, to, coefficient)`.
    pub fn edges(&self) -> Vec<(&str, &str, f64)> {
        self.graph
            .edge_indices()
            .filter_map(|e| {
                let (a, b) = self.graph.edge_endpoints(e)?;
                Some((self.graph[a].as_str(), self.graph[b].as_str(), self.graph[e]))
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(matrix: Vec<Vec<f64>>, columns: &[&str]) -> AdjacencyResult {
        AdjacencyResult::new(matrix, columns.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn transposes_matrix_into_cause_effect_edges() {
        // Row b, column a: a causes b.
        let r = result(vec![vec![0.0, 0.0], vec![0.9, 0.0]], &["a", "b"]);
        let g = VariantGraph::build(&r, 0.48).unwrap();
        assert_eq!(g.successors("a").unwrap(), ActivitySet::from(["b".to_string()]));
        assert!(g.successors("b").unwrap().is_empty());
        assert_eq!(g.predecessors("b").unwrap(), ActivitySet::from(["a".to_string()]));
    }

    #[test]
    fn drops_weak_coefficients_by_magnitude() {
        let r = result(
            vec![
                vec![0.0, 0.0, 0.0],
                vec![0.47, 0.0, 0.0],
                vec![-0.6, 0.0, 0.0],
            ],
            &["a", "b", "c"],
        );
        let g = VariantGraph::build(&r, 0.48).unwrap();
        assert_eq!(g.successors("a").unwrap(), ActivitySet::from(["c".to_string()]));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn all_zero_matrix_gives_isolated_nodes() {
        let r = AdjacencyResult::empty(["a", "b", "c"]);
        let g = VariantGraph::build(&r, 0.0).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.labels().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn absent_label_has_no_neighbours() {
        let r = AdjacencyResult::empty(["a"]);
        let g = VariantGraph::build(&r, 0.4).unwrap();
        assert!(g.successors("z").is_none());
        assert!(!g.contains("z"));
    }

    #[test]
    fn malformed_input_fails_fast() {
        let r = AdjacencyResult {
            matrix: vec![vec![0.0]],
            columns: vec!["a".into(), "b".into()],
        };
        assert!(VariantGraph::build(&r, 0.4).is_err());
    }
}
