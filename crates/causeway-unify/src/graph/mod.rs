//! Graph structures: thresholded per-variant graphs, the accumulating unified
//! graph, and its projection back to a dense adjacency result.

pub mod projection;
pub mod unified;
pub mod variant_graph;

pub use unified::{NodeRole, UnifiedGraph, UnifiedNode};
pub use variant_graph::VariantGraph;
