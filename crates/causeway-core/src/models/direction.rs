//! Which neighbourhood of an activity the engine combines into gates.

use serde::{Deserialize, Serialize};

/// Direction in which dependencies are gathered and gates are wired.
///
/// `Successors` gates an activity's downstream effects (split semantics).
/// `Predecessors` gates its upstream causes (join semantics); every edge the
/// assembler adds is reversed in that mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyDirection {
    #[default]
    Successors,
    Predecessors,
}

impl DependencyDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Successors => "successors",
            Self::Predecessors => "predecessors",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "successors" => Some(Self::Successors),
            "predecessors" => Some(Self::Predecessors),
            _ => None,
        }
    }

    /// Orient a logical `(from, to)` pair for this direction.
    pub fn orient<'a>(&self, from: &'a str, to: &'a str) -> (&'a str, &'a str) {
        match self {
            Self::Successors => (from, to),
            Self::Predecessors => (to, from),
        }
    }
}

impl std::fmt::Display for DependencyDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
