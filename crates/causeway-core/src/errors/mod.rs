//! Error handling for Causeway.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod adjacency_error;
pub mod causeway_error;
pub mod config_error;
pub mod error_code;
pub mod unify_error;

pub use adjacency_error::AdjacencyError;
pub use causeway_error::{CausewayError, CausewayResult};
pub use config_error::ConfigError;
pub use error_code::CausewayErrorCode;
pub use unify_error::UnifyError;
