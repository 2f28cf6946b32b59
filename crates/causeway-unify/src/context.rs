//! Per-run unification state: gate counters and the set of taken labels.

use std::collections::HashSet;

use causeway_core::config::defaults::DEFAULT_EOR_UNIVERSE_LIMIT;
use causeway_core::{DependencyDirection, GateKind};

/// State owned by exactly one unification run.
///
/// Gate ordinals are drawn from per-kind counters that only move forward.
/// A label already used by any node of the run (for example an activity that
/// is itself a gate from an earlier unification level) is skipped, so every
/// label in one run is unique.
#[derive(Debug, Clone)]
pub struct UnificationContext {
    counters: [u64; GateKind::COUNT],
    taken: HashSet<String>,
    direction: DependencyDirection,
    eor_universe_limit: usize,
}

impl UnificationContext {
    pub fn new(direction: DependencyDirection, eor_universe_limit: usize) -> Self {
        Self {
            counters: [0; GateKind::COUNT],
            taken: HashSet::new(),
            direction,
            eor_universe_limit,
        }
    }

    /// Mark labels as in use. Called with the activity universe before any gate is created.
    pub fn reserve<'a>(&mut self, labels: impl IntoIterator<Item = &'a str>) {
        self.taken.extend(labels.into_iter().map(str::to_string));
    }

    /// Draw the next free label for `kind`.
    pub fn next_label(&mut self, kind: GateKind) -> String {
        loop {
            let counter = &mut self.counters[kind.index()];
            let label = kind.label(*counter);
            *counter += 1;
            if self.taken.insert(label.clone()) {
                return label;
            }
        }
    }

    /// Next ordinal the counter for `kind` would try.
    pub fn counter(&self, kind: GateKind) -> u64 {
        self.counters[kind.index()]
    }

    pub fn direction(&self) -> DependencyDirection {
        self.direction
    }

    pub fn eor_universe_limit(&self) -> usize {
        self.eor_universe_limit
    }
}

impl Default for UnificationContext {
    fn default() -> Self {
        Self::new(DependencyDirection::default(), DEFAULT_EOR_UNIVERSE_LIMIT)
    }
}
