//! petgraph::StableGraph wrapper holding the unified gated graph.

use std::collections::HashMap;

use causeway_core::constants::UNIFIED_EDGE_WEIGHT;
use causeway_core::GateKind;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::{Directed, Direction};

use crate::successors::ActivitySet;

/// What a node in the unified graph stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// A process activity taken from an input result's columns.
    Activity,
    /// A synthetic gate created during this run.
    Gate(GateKind),
}

/// A node in the unified graph.
#[derive(Debug, Clone)]
pub struct UnifiedNode {
    pub label: String,
    pub role: NodeRole,
}

/// The underlying directed graph type. Edge weights are projection weights.
pub type UnifiedStableGraph = StableGraph<UnifiedNode, f64, Directed>;

/// Accumulating graph for one unification run.
///
/// Nodes and edges are only ever added. Node order is insertion order:
/// activities first, then gates as they are created.
pub struct UnifiedGraph {
    /// The petgraph stable graph.
    pub graph: UnifiedStableGraph,
    /// Map from label → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl UnifiedGraph {
    /// Create an empty unified graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Seed a graph with one activity node per label.
    pub fn with_activities<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut graph = Self::new();
        for label in labels {
            graph.ensure_node(label, NodeRole::Activity);
        }
        graph
    }

    /// Get or create a node. An existing node keeps its first role.
    pub fn ensure_node(&mut self, label: &str, role: NodeRole) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(label) {
            return idx;
        }
        let idx = self.graph.add_node(UnifiedNode {
            label: label.to_string(),
            role,
        });
        self.node_index.insert(label.to_string(), idx);
        idx
    }

    /// Add `from -> to`, creating missing endpoints as activities.
    /// Parallel edges are collapsed into one.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let a = self.ensure_node(from, NodeRole::Activity);
        let b = self.ensure_node(to, NodeRole::Activity);
        self.graph.update_edge(a, b, UNIFIED_EDGE_WEIGHT);
    }

    /// Look up a node index by label.
    pub fn get_node(&self, label: &str) -> Option<NodeIndex> {
        self.node_index.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.node_index.contains_key(label)
    }

    pub fn role(&self, label: &str) -> Option<NodeRole> {
        self.get_node(label)
            .and_then(|idx| self.graph.node_weight(idx))
            .map(|n| n.role)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.get_node(from), self.get_node(to)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    /// Direct successors of `label` (empty if the node is absent).
    pub fn successors(&self, label: &str) -> ActivitySet {
        self.neighbors(label, Direction::Outgoing)
    }

    /// Direct predecessors of `label` (empty if the node is absent).
    pub fn predecessors(&self, label: &str) -> ActivitySet {
        self.neighbors(label, Direction::Incoming)
    }

    fn neighbors(&self, label: &str, dir: Direction) -> ActivitySet {
        match self.get_node(label) {
            Some(idx) => self
                .graph
                .neighbors_directed(idx, dir)
                .map(|n| self.graph[n].label.clone())
                .collect(),
            None => ActivitySet::new(),
        }
    }

    /// Labels in node order.
    pub fn labels(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].label.as_str())
            .collect()
    }

    /// Gate labels of one kind, in creation order.
    pub fn gates(&self, kind: GateKind) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph[idx].role == NodeRole::Gate(kind))
            .map(|idx| self.graph[idx].label.as_str())
            .collect()
    }

    /// Activity labels, in node order.
    pub fn activities(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph[idx].role == NodeRole::Activity)
            .map(|idx| self.graph[idx].label.as_str())
            .collect()
    }

    /// Number of gate nodes across all kinds.
    pub fn gate_count(&self) -> usize {
        self.graph
            .node_indices()
            .filter(|&idx| matches!(self.graph[idx].role, NodeRole::Gate(_)))
            .count()
    }

    /// Every edge as `(from, to)`.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_indices()
            .filter_map(|e| {
                let (a, b) = self.graph.edge_endpoints(e)?;
                Some((self.graph[a].label.as_str(), self.graph[b].label.as_str()))
            })
            .collect()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for UnifiedGraph {
    fn default() -> Self {
        Self::new()
    }
}
