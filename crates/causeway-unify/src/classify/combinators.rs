//! Set-family tests behind the XOR and EOR classifications.

use crate::successors::ActivitySet;

/// Outcome of the exhaustive-OR test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exhaustiveness {
    /// The family is exactly the non-empty powerset of its universe.
    Exhaustive,
    /// The family is missing at least one non-empty subset.
    Partial,
    /// The universe is larger than the configured limit; not tested.
    Skipped,
    /// The limit is 0: EOR testing is turned off.
    Disabled,
}

/// True when no two sets of the family share a member.
pub fn pairwise_disjoint(family: &[ActivitySet]) -> bool {
    family.iter().enumerate().all(|(i, a)| {
        family[i + 1..].iter().all(|b| a.is_disjoint(b))
    })
}

/// Union of every set in the family.
pub fn universe(family: &[ActivitySet]) -> ActivitySet {
    family.iter().flatten().cloned().collect()
}

/// Compare the family size against `2^|U| - 1`.
///
/// The family holds distinct non-empty subsets of `U`, so equal counts mean
/// it is the full non-empty powerset.
pub fn exhaustiveness(family: &[ActivitySet], universe: &ActivitySet, limit: usize) -> Exhaustiveness {
    if limit == 0 {
        return Exhaustiveness::Disabled;
    }
    if universe.len() > limit {
        return Exhaustiveness::Skipped;
    }
    let Some(powerset) = 1u64.checked_shl(universe.len() as u32) else {
        return Exhaustiveness::Skipped;
    };
    if family.len() as u64 == powerset - 1 {
        Exhaustiveness::Exhaustive
    } else {
        Exhaustiveness::Partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> ActivitySet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn disjointness() {
        assert!(pairwise_disjoint(&[set(&["a"]), set(&["b", "c"]), set(&["d"])]));
        assert!(!pairwise_disjoint(&[set(&["a"]), set(&["b"]), set(&["a", "c"])]));
        assert!(pairwise_disjoint(&[]));
    }

    #[test]
    fn full_powerset_is_exhaustive() {
        let family = vec![set(&["a"]), set(&["b"]), set(&["a", "b"])];
        let u = universe(&family);
        assert_eq!(exhaustiveness(&family, &u, 20), Exhaustiveness::Exhaustive);
    }

    #[test]
    fn missing_subset_is_partial() {
        let family = vec![set(&["a"]), set(&["a", "b"])];
        let u = universe(&family);
        assert_eq!(exhaustiveness(&family, &u, 20), Exhaustiveness::Partial);
    }

    #[test]
    fn large_universe_is_skipped() {
        let family = vec![set(&["a", "b", "c"]), set(&["a"])];
        let u = universe(&family);
        assert_eq!(exhaustiveness(&family, &u, 2), Exhaustiveness::Skipped);
    }

    #[test]
    fn zero_limit_disables_the_test() {
        let family = vec![set(&["a"]), set(&["b"]), set(&["a", "b"])];
        let u = universe(&family);
        assert_eq!(exhaustiveness(&family, &u, 0), Exhaustiveness::Disabled);
    }
}
