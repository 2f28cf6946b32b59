//! Data model shared by every Causeway crate.

pub mod adjacency;
pub mod direction;
pub mod gate;

pub use adjacency::AdjacencyResult;
pub use direction::DependencyDirection;
pub use gate::GateKind;
