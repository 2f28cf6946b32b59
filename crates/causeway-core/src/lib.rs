//! # causeway-core
//!
//! Foundation crate for the Causeway unification engine.
//! Defines the adjacency result type, gate kinds, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::UnificationConfig;
pub use errors::{CausewayError, CausewayResult};
pub use models::{AdjacencyResult, DependencyDirection, GateKind};
