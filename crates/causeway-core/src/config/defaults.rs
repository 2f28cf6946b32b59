// Single source of truth for all default values.

// --- Thresholding ---
pub const DEFAULT_STRENGTH_THRESHOLD: f64 = 0.4;
pub const DEFAULT_VARIANT_STRENGTH_THRESHOLD: f64 = 0.48;
pub const DEFAULT_P_VALUE_THRESHOLD: Option<f64> = None;

// --- Classification ---
pub const DEFAULT_EOR_UNIVERSE_LIMIT: usize = 20;

// --- Driver ---
pub const DEFAULT_PARALLEL_GROUPS: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
