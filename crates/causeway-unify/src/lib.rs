//! # causeway-unify
//!
//! Merges per-variant causal adjacency matrices into one gated dependency
//! graph. For every activity the successor sets observed across variants are
//! classified as AND / XOR / OR / EOR and wired through synthetic gate nodes.
//! The result is projected back into an `AdjacencyResult`, so unified results
//! can be unified again (variant → variant group → log).

pub mod assemble;
pub mod classify;
pub mod context;
pub mod engine;
pub mod graph;
pub mod pairs;
pub mod successors;
pub mod variants;

pub use classify::{Branch, Classification, Replacement};
pub use context::UnificationContext;
pub use engine::{unify, UnificationEngine};
pub use graph::{UnifiedGraph, VariantGraph};
pub use pairs::{causal_pairs, diff_pairs, CausalPairs, PairDiff};
pub use successors::{ActivitySet, SuccessorFamily};
pub use variants::{group_variants, VariantGroups};
