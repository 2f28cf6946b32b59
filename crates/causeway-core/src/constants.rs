//! Engine-wide constants that are not configuration.

/// Weight written into the projected matrix for every unified edge.
pub const UNIFIED_EDGE_WEIGHT: f64 = 1.0;

/// Separator between a gate kind and its ordinal in a gate label (`XOR_3`).
pub const GATE_LABEL_SEPARATOR: char = '_';

/// Largest successor universe for which `2^|U| - 1` fits in a `u64`.
pub const MAX_EOR_UNIVERSE: usize = 63;

/// File name of the project-level config.
pub const PROJECT_CONFIG_FILENAME: &str = "causeway.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CAUSEWAY_LOG";

/// Separator between activities in a variant string (`a,b,c`).
pub const VARIANT_SEPARATOR: char = ',';
