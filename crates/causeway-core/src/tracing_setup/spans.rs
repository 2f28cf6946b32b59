//! Span definitions per engine operation.
//!
//! Each span carries the operation's input sizes via the `tracing` crate.

/// Create a unification span.
#[macro_export]
macro_rules! unify_span {
    ($inputs:expr, $universe:expr) => {
        tracing::info_span!("causeway.unify", inputs = $inputs, universe = $universe)
    };
}

/// Create a span for hierarchical (grouped) unification.
#[macro_export]
macro_rules! unify_groups_span {
    ($groups:expr) => {
        tracing::info_span!("causeway.unify_groups", groups = $groups)
    };
}

/// Create a per-activity classification span.
#[macro_export]
macro_rules! classify_span {
    ($activity:expr, $family_size:expr) => {
        tracing::debug_span!("causeway.classify", activity = %$activity, family_size = $family_size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const UNIFY: &str = "causeway.unify";
    pub const UNIFY_GROUPS: &str = "causeway.unify_groups";
    pub const CLASSIFY: &str = "causeway.classify";
}
