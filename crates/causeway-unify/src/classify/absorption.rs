//! AND-absorption: collapse always-co-occurring successors into AND sub-gates.

use causeway_core::GateKind;

use super::Replacement;
use crate::context::UnificationContext;
use crate::successors::{ActivitySet, SuccessorFamily};

/// `set` partially intersects `other` when they share a member but `set`
/// also has members outside `other`.
pub fn partially_intersects(set: &ActivitySet, other: &ActivitySet) -> bool {
    !set.is_disjoint(other) && !set.is_subset(other)
}

/// A set is coherent when it has more than one member and no other set of
/// the family partially intersects it.
pub fn coherent_sets(family: &[ActivitySet]) -> Vec<&ActivitySet> {
    family
        .iter()
        .enumerate()
        .filter(|(i, set)| {
            set.len() > 1
                && family
                    .iter()
                    .enumerate()
                    .all(|(k, other)| k == *i || !partially_intersects(set, other))
        })
        .map(|(_, set)| set)
        .collect()
}

/// Replace every coherent set with a fresh `AND_<n>` label, everywhere it occurs.
///
/// Single pass: coherence is judged against the input family only. Coherent
/// sets are pairwise disjoint, and any other set either misses a coherent set
/// entirely or contains all of it, so substitution order does not matter.
pub fn absorb(
    family: &[ActivitySet],
    ctx: &mut UnificationContext,
) -> (SuccessorFamily, Vec<Replacement>) {
    let replacements: Vec<Replacement> = coherent_sets(family)
        .into_iter()
        .map(|members| Replacement {
            label: ctx.next_label(GateKind::And),
            members: members.clone(),
        })
        .collect();

    if replacements.is_empty() {
        return (family.to_vec(), replacements);
    }

    let mut revised = SuccessorFamily::with_capacity(family.len());
    for set in family {
        let substituted = substitute(set, &replacements);
        if !revised.contains(&substituted) {
            revised.push(substituted);
        }
    }
    (revised, replacements)
}

fn substitute(set: &ActivitySet, replacements: &[Replacement]) -> ActivitySet {
    let mut out = set.clone();
    for replacement in replacements {
        if replacement.members.is_subset(set) {
            out.retain(|m| !replacement.members.contains(m));
            out.insert(replacement.label.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> ActivitySet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn subset_never_partially_intersects_its_superset() {
        assert!(!partially_intersects(&set(&["a", "b"]), &set(&["a", "b", "c"])));
        assert!(partially_intersects(&set(&["a", "b", "c"]), &set(&["a", "b"])));
        assert!(!partially_intersects(&set(&["a"]), &set(&["b"])));
    }

    #[test]
    fn nested_subset_is_absorbed_into_superset() {
        let mut ctx = UnificationContext::default();
        let family = vec![set(&["a", "b"]), set(&["a", "b", "c"])];
        let (revised, replacements) = absorb(&family, &mut ctx);

        assert_eq!(replacements.len(), 1);
        assert_eq!(replacements[0].label, "AND_0");
        assert_eq!(replacements[0].members, set(&["a", "b"]));
        assert_eq!(revised, vec![set(&["AND_0"]), set(&["AND_0", "c"])]);
        assert!(!revised.contains(&set(&["a", "b"])));
    }

    #[test]
    fn overlapping_sets_are_left_alone() {
        let mut ctx = UnificationContext::default();
        let family = vec![set(&["a", "b"]), set(&["b", "c"])];
        let (revised, replacements) = absorb(&family, &mut ctx);
        assert!(replacements.is_empty());
        assert_eq!(revised, family);
        assert_eq!(ctx.counter(GateKind::And), 0);
    }

    #[test]
    fn disjoint_groups_each_get_a_gate() {
        let mut ctx = UnificationContext::default();
        let family = vec![set(&["a", "b"]), set(&["c", "d"]), set(&["e"])];
        let (revised, replacements) = absorb(&family, &mut ctx);
        let labels: Vec<_> = replacements.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["AND_0", "AND_1"]);
        assert_eq!(revised, vec![set(&["AND_0"]), set(&["AND_1"]), set(&["e"])]);
    }

    #[test]
    fn singletons_are_never_coherent() {
        let family = vec![set(&["a"]), set(&["b"])];
        assert!(coherent_sets(&family).is_empty());
    }
}
