//! Successor-set collection across variant graphs.

use std::collections::BTreeSet;

use causeway_core::DependencyDirection;

use crate::graph::VariantGraph;

/// A set of activity labels. Ordered so that classification is deterministic.
pub type ActivitySet = BTreeSet<String>;

/// One activity's neighbour sets across variants, deduplicated, in variant order.
pub type SuccessorFamily = Vec<ActivitySet>;

/// Gather the direct-successor sets of `activity` from every variant graph
/// that contains it.
pub fn collect(activity: &str, variant_graphs: &[VariantGraph]) -> SuccessorFamily {
    collect_directed(activity, variant_graphs, DependencyDirection::Successors)
}

/// Gather `activity`'s neighbour sets in the given direction.
///
/// Empty sets and sets equal to one already collected are skipped. An empty
/// family means the activity has no dependency in any variant.
pub fn collect_directed(
    activity: &str,
    variant_graphs: &[VariantGraph],
    direction: DependencyDirection,
) -> SuccessorFamily {
    let mut family = SuccessorFamily::new();
    for graph in variant_graphs {
        let Some(set) = graph.neighbors(activity, direction) else {
            continue;
        };
        if set.is_empty() || family.contains(&set) {
            continue;
        }
        family.push(set);
    }
    family
}

#[cfg(test)]
mod tests {
    use super::*;
    use causeway_core::AdjacencyResult;

    fn chain(edges: &[(&str, &str)], columns: &[&str]) -> VariantGraph {
        let mut result = AdjacencyResult::empty(columns.iter().copied());
        for (from, to) in edges {
            assert!(result.set_coefficient(from, to, 0.9));
        }
        VariantGraph::build(&result, 0.4).unwrap()
    }

    fn set(items: &[&str]) -> ActivitySet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn deduplicates_equal_sets() {
        let graphs = vec![
            chain(&[("x", "y"), ("x", "z")], &["x", "y", "z"]),
            chain(&[("x", "z"), ("x", "y")], &["z", "y", "x"]),
            chain(&[("x", "y")], &["x", "y"]),
        ];
        assert_eq!(collect("x", &graphs), vec![set(&["y", "z"]), set(&["y"])]);
    }

    #[test]
    fn skips_empty_and_missing() {
        let graphs = vec![
            chain(&[], &["x", "y"]),
            chain(&[("a", "b")], &["a", "b"]),
        ];
        assert!(collect("x", &graphs).is_empty());
        assert!(collect("nowhere", &graphs).is_empty());
    }

    #[test]
    fn predecessor_direction_reads_incoming_edges() {
        let graphs = vec![
            chain(&[("a", "x")], &["a", "x"]),
            chain(&[("b", "x")], &["b", "x"]),
        ];
        assert_eq!(
            collect_directed("x", &graphs, DependencyDirection::Predecessors),
            vec![set(&["a"]), set(&["b"])]
        );
        assert!(collect("x", &graphs).is_empty());
    }
}
