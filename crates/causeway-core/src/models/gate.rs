//! Gate kinds and gate label formatting.

use serde::{Deserialize, Serialize};

use crate::constants::GATE_LABEL_SEPARATOR;

/// The logical combinator a synthetic gate node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateKind {
    /// Successors always occur together.
    And,
    /// Exactly one successor group occurs per variant.
    Xor,
    /// Some non-exhaustive combination of successor groups occurs.
    Or,
    /// Every non-empty combination of the successor universe occurs.
    Eor,
}

impl GateKind {
    pub const COUNT: usize = 4;

    pub const ALL: [GateKind; 4] = [Self::And, Self::Xor, Self::Or, Self::Eor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Xor => "XOR",
            Self::Or => "OR",
            Self::Eor => "EOR",
        }
    }

    /// Dense index, used for per-kind counter arrays.
    pub fn index(&self) -> usize {
        match self {
            Self::And => 0,
            Self::Xor => 1,
            Self::Or => 2,
            Self::Eor => 3,
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "AND" => Some(Self::And),
            "XOR" => Some(Self::Xor),
            "OR" => Some(Self::Or),
            "EOR" => Some(Self::Eor),
            _ => None,
        }
    }

    /// Gate label for an ordinal: `XOR_3`.
    pub fn label(&self, ordinal: u64) -> String {
        format!("{}{}{}", self.as_str(), GATE_LABEL_SEPARATOR, ordinal)
    }

    /// Parse a gate label back into its kind and ordinal.
    ///
    /// Renderers use this to draw gate nodes differently from activities.
    pub fn parse_label(label: &str) -> Option<(Self, u64)> {
        let (kind, ordinal) = label.rsplit_once(GATE_LABEL_SEPARATOR)?;
        let kind = Self::from_str_name(kind)?;
        if ordinal.is_empty() || !ordinal.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        ordinal.parse().ok().map(|n| (kind, n))
    }
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
