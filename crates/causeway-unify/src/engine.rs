//! UnificationEngine: thresholds every input, classifies every activity, and
//! projects the unified graph back into an adjacency result.

use std::collections::HashSet;

use causeway_core::constants::UNIFIED_EDGE_WEIGHT;
use causeway_core::errors::UnifyError;
use causeway_core::{AdjacencyResult, GateKind, UnificationConfig};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::assemble::assemble;
use crate::classify::classify;
use crate::context::UnificationContext;
use crate::graph::{projection, UnifiedGraph, VariantGraph};
use crate::successors;

/// Unify `results` with default settings and the given strength cutoff.
pub fn unify(results: &[AdjacencyResult], strength: f64) -> Result<AdjacencyResult, UnifyError> {
    let config = UnificationConfig {
        strength_threshold: strength,
        ..UnificationConfig::default()
    };
    UnificationEngine::new(config).unify(results)
}

/// The unification driver.
///
/// Holds configuration only. Every call builds its own graph and its own
/// `UnificationContext`, so one engine can serve concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct UnificationEngine {
    config: UnificationConfig,
}

impl UnificationEngine {
    pub fn new(config: UnificationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UnificationConfig {
        &self.config
    }

    /// Build the thresholded graph of a single variant, using the standalone cutoff.
    pub fn variant_graph(&self, result: &AdjacencyResult) -> Result<VariantGraph, UnifyError> {
        let prepared = self.prefilter(result);
        VariantGraph::build(&prepared, self.config.variant_strength_threshold)
            .map_err(|source| UnifyError::InvalidInput { index: 0, source })
    }

    /// Unify `results` into one gated adjacency result.
    ///
    /// Inputs may themselves be unified results, which is how a two-level
    /// hierarchy (variant groups, then the whole log) is built.
    pub fn unify(&self, results: &[AdjacencyResult]) -> Result<AdjacencyResult, UnifyError> {
        let graph = self.unify_graph(results)?;
        Ok(projection::to_adjacency(&graph))
    }

    /// Unify `results` and keep the graph form for inspection.
    ///
    /// With more than one input, gate columns (`XOR_0`, ...) of different
    /// inputs are renumbered first so that gates never merge across inputs.
    pub fn unify_graph(&self, results: &[AdjacencyResult]) -> Result<UnifiedGraph, UnifyError> {
        if results.is_empty() {
            return Err(UnifyError::EmptyInput);
        }
        for (index, result) in results.iter().enumerate() {
            result
                .validate()
                .map_err(|source| UnifyError::InvalidInput { index, source })?;
        }

        let disjoined;
        let results = if results.len() > 1 {
            disjoined = disjoin_gate_labels(results, &self.config);
            disjoined.as_slice()
        } else {
            results
        };

        let variant_graphs = results
            .iter()
            .enumerate()
            .map(|(index, result)| {
                VariantGraph::build(&self.prefilter(result), self.config.strength_threshold)
                    .map_err(|source| UnifyError::InvalidInput { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let universe = activity_universe(results);
        let _span = causeway_core::unify_span!(results.len(), universe.len()).entered();

        let mut ctx =
            UnificationContext::new(self.config.direction, self.config.eor_universe_limit);
        ctx.reserve(universe.iter().copied());
        let mut graph = UnifiedGraph::with_activities(universe.iter().copied());

        let mut skipped = 0usize;
        for activity in &universe {
            let family = successors::collect_directed(activity, &variant_graphs, ctx.direction());
            if family.is_empty() {
                skipped += 1;
                continue;
            }

            let _classify = causeway_core::classify_span!(activity, family.len()).entered();
            let classification = classify(&family, &mut ctx);
            let gate = assemble(&mut graph, activity, &classification, &mut ctx);
            debug!(
                activity = %activity,
                kind = ?classification.kind,
                gate = ?gate,
                replacements = classification.replacements.len(),
                "activity unified"
            );
        }

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            and_gates = graph.gates(GateKind::And).len(),
            xor_gates = graph.gates(GateKind::Xor).len(),
            or_gates = graph.gates(GateKind::Or).len(),
            eor_gates = graph.gates(GateKind::Eor).len(),
            skipped,
            "unification complete"
        );
        Ok(graph)
    }

    /// Unify each variant group, then unify the group results.
    ///
    /// A single group returns its own unified result. Groups run on the rayon
    /// pool when `parallel_groups` is set; each gets a fresh context.
    pub fn unify_groups(
        &self,
        groups: &[Vec<AdjacencyResult>],
    ) -> Result<AdjacencyResult, UnifyError> {
        if groups.is_empty() {
            return Err(UnifyError::EmptyInput);
        }
        let _span = causeway_core::unify_groups_span!(groups.len()).entered();

        let unify_group = |(group, results): (usize, &Vec<AdjacencyResult>)| {
            self.unify_graph(results).map_err(|e| UnifyError::GroupFailed {
                group,
                source: Box::new(e),
            })
        };
        let mut graphs: Vec<UnifiedGraph> = if self.config.parallel_groups {
            groups
                .par_iter()
                .enumerate()
                .map(unify_group)
                .collect::<Result<Vec<_>, UnifyError>>()?
        } else {
            groups
                .iter()
                .enumerate()
                .map(unify_group)
                .collect::<Result<Vec<_>, UnifyError>>()?
        };

        if graphs.len() == 1 {
            if let Some(only) = graphs.pop() {
                return Ok(projection::to_adjacency(&only));
            }
        }

        let level: Vec<AdjacencyResult> = graphs.iter().map(projection::to_adjacency).collect();
        self.group_level_engine().unify(&level)
    }

    /// Unified results carry binary edges: the second level keeps all of them.
    fn group_level_engine(&self) -> Self {
        Self::new(UnificationConfig {
            strength_threshold: UNIFIED_EDGE_WEIGHT,
            p_value_threshold: None,
            ..self.config.clone()
        })
    }

    fn prefilter(&self, result: &AdjacencyResult) -> AdjacencyResult {
        match self.config.p_value_threshold {
            Some(p) => result.filtered(p),
            None => result.clone(),
        }
    }
}

/// Renumber the gate columns of every input into one sequence per kind, in
/// input order, so that `XOR_0` of two different inputs do not merge into
/// one node. Columns that are not gate labels keep their names.
fn disjoin_gate_labels(
    results: &[AdjacencyResult],
    config: &UnificationConfig,
) -> Vec<AdjacencyResult> {
    let mut namespace = UnificationContext::new(config.direction, config.eor_universe_limit);
    namespace.reserve(
        results
            .iter()
            .flat_map(|r| r.columns.iter())
            .map(String::as_str)
            .filter(|label| GateKind::parse_label(label).is_none()),
    );

    results
        .iter()
        .map(|result| {
            let mut renamed = result.clone();
            for column in renamed.columns.iter_mut() {
                if let Some((kind, _)) = GateKind::parse_label(column) {
                    *column = namespace.next_label(kind);
                }
            }
            renamed
        })
        .collect()
}

/// Union of every input's columns, deduplicated, in first-seen order.
pub fn activity_universe(results: &[AdjacencyResult]) -> Vec<&str> {
    let mut seen = HashSet::new();
    results
        .iter()
        .flat_map(|r| r.columns.iter())
        .map(String::as_str)
        .filter(|label| seen.insert(*label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(edges: &[(&str, &str)], columns: &[&str]) -> AdjacencyResult {
        let mut result = AdjacencyResult::empty(columns.iter().copied());
        for (from, to) in edges {
            result.set_coefficient(from, to, 0.8);
        }
        result
    }

    #[test]
    fn universe_is_deduplicated_in_first_seen_order() {
        let results = vec![variant(&[], &["b", "a"]), variant(&[], &["c", "a", "d"])];
        assert_eq!(activity_universe(&results), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn empty_input_is_rejected() {
        let engine = UnificationEngine::default();
        assert!(matches!(engine.unify(&[]), Err(UnifyError::EmptyInput)));
        assert!(matches!(engine.unify_groups(&[]), Err(UnifyError::EmptyInput)));
    }

    #[test]
    fn malformed_input_reports_its_index() {
        let bad = AdjacencyResult {
            matrix: vec![vec![0.0]],
            columns: vec!["a".into(), "b".into()],
        };
        let err = UnificationEngine::default()
            .unify(&[variant(&[], &["a"]), bad])
            .unwrap_err();
        assert!(matches!(err, UnifyError::InvalidInput { index: 1, .. }));
    }

    #[test]
    fn gate_columns_are_renumbered_across_inputs() {
        let first = variant(&[("s", "XOR_0")], &["s", "XOR_0"]);
        let second = variant(&[("t", "XOR_0"), ("t", "OR_0")], &["t", "XOR_0", "OR_0"]);
        let renamed = disjoin_gate_labels(&[first, second], &UnificationConfig::default());
        assert_eq!(renamed[0].columns, vec!["s", "XOR_0"]);
        assert_eq!(renamed[1].columns, vec!["t", "XOR_1", "OR_0"]);
        assert_eq!(renamed[1].coefficient("t", "XOR_1"), Some(0.8));
    }

    #[test]
    fn duplicate_gate_columns_are_still_rejected() {
        let bad = AdjacencyResult {
            matrix: vec![vec![0.0; 2]; 2],
            columns: vec!["XOR_0".into(), "XOR_0".into()],
        };
        let err = UnificationEngine::default()
            .unify(&[variant(&[], &["a"]), bad])
            .unwrap_err();
        assert!(matches!(err, UnifyError::InvalidInput { index: 1, .. }));
    }

    #[test]
    fn p_value_prefilter_drops_weak_edges() {
        let mut result = variant(&[("x", "y")], &["x", "y", "z"]);
        result.set_coefficient("x", "z", 0.45);
        let engine = UnificationEngine::new(UnificationConfig {
            p_value_threshold: Some(0.5),
            ..UnificationConfig::default()
        });
        let graph = engine.unify_graph(&[result]).unwrap();
        assert!(graph.has_edge("x", "y"));
        assert!(!graph.has_edge("x", "z"));
    }

    #[test]
    fn variant_graph_uses_standalone_cutoff() {
        let mut result = variant(&[], &["x", "y"]);
        result.set_coefficient("x", "y", 0.45);
        let engine = UnificationEngine::default();
        assert_eq!(engine.variant_graph(&result).unwrap().edge_count(), 0);
        assert!(engine.unify_graph(&[result]).unwrap().has_edge("x", "y"));
    }
}
