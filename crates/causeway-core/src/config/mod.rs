//! Configuration system for Causeway.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod defaults;
pub mod unification_config;

pub use unification_config::UnificationConfig;
