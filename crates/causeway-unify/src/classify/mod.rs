//! Gate-type classification of one activity's successor family.
//!
//! Order of steps:
//! 1. a single set is a plain AND (direct edges, no gate);
//! 2. AND-absorption of coherent sets;
//! 3. XOR when the revised sets are pairwise disjoint;
//! 4. EOR when the revised family is the full non-empty powerset of its universe;
//! 5. OR otherwise.

pub mod absorption;
pub mod combinators;

use causeway_core::GateKind;
use tracing::{debug, warn};

use self::combinators::Exhaustiveness;
use crate::context::UnificationContext;
use crate::successors::ActivitySet;

/// One element of a gate's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    /// A group of labels reached together: one edge per member.
    Set(ActivitySet),
    /// A single label: one edge.
    Label(String),
}

impl Branch {
    /// Labels this branch wires edges to.
    pub fn targets(&self) -> Vec<&str> {
        match self {
            Self::Set(set) => set.iter().map(String::as_str).collect(),
            Self::Label(label) => vec![label.as_str()],
        }
    }
}

/// An AND sub-gate created by absorption: `label` stands for `members`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub label: String,
    pub members: ActivitySet,
}

/// Classification of one activity's successor family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Outer gate kind. `None` means direct edges from the activity.
    pub kind: Option<GateKind>,
    pub payload: Vec<Branch>,
    /// AND sub-gates created while classifying, scoped to this activity.
    pub replacements: Vec<Replacement>,
}

impl Classification {
    fn direct(targets: &ActivitySet, replacements: Vec<Replacement>) -> Self {
        Self {
            kind: None,
            payload: targets.iter().cloned().map(Branch::Label).collect(),
            replacements,
        }
    }

    fn gated(kind: GateKind, payload: Vec<Branch>, replacements: Vec<Replacement>) -> Self {
        Self {
            kind: Some(kind),
            payload,
            replacements,
        }
    }

    /// True when nothing needs to be wired.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty() && self.replacements.is_empty()
    }

    /// Union of every payload target.
    pub fn targets(&self) -> ActivitySet {
        self.payload
            .iter()
            .flat_map(Branch::targets)
            .map(str::to_string)
            .collect()
    }
}

/// Classify a deduplicated successor family.
///
/// Gate counters in `ctx` advance for every AND sub-gate created here; the
/// outer gate label is drawn later by the assembler.
pub fn classify(family: &[ActivitySet], ctx: &mut UnificationContext) -> Classification {
    match family {
        [] => return Classification::direct(&ActivitySet::new(), Vec::new()),
        [only] => return Classification::direct(only, Vec::new()),
        _ => {}
    }

    let (revised, replacements) = absorption::absorb(family, ctx);

    if let [only] = revised.as_slice() {
        return Classification::direct(only, replacements);
    }

    if combinators::pairwise_disjoint(&revised) {
        let payload = revised.into_iter().map(Branch::Set).collect();
        return Classification::gated(GateKind::Xor, payload, replacements);
    }

    let universe = combinators::universe(&revised);
    match combinators::exhaustiveness(&revised, &universe, ctx.eor_universe_limit()) {
        Exhaustiveness::Exhaustive => {
            let payload = universe.into_iter().map(Branch::Label).collect();
            Classification::gated(GateKind::Eor, payload, replacements)
        }
        outcome => {
            // Disabled falls back silently
            if outcome == Exhaustiveness::Skipped {
                warn!(
                    universe = universe.len(),
                    limit = ctx.eor_universe_limit(),
                    "successor universe exceeds EOR limit, falling back to OR"
                );
            }
            debug!(family = revised.len(), "residual family classified as OR");
            let payload = revised.into_iter().map(Branch::Set).collect();
            Classification::gated(GateKind::Or, payload, replacements)
        }
    }
}
