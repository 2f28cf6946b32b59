//! CausewayErrorCode trait for the calling orchestration layer.

/// Trait for exposing a stable error code alongside the message.
/// Every error enum implements this so callers (API layer, explanation
/// engine) can map failures to user-facing messages without string matching.
pub trait CausewayErrorCode {
    /// Returns the error code string (e.g., "INVALID_ADJACENCY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const INVALID_ADJACENCY: &str = "INVALID_ADJACENCY";
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const GROUP_FAILED: &str = "GROUP_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
