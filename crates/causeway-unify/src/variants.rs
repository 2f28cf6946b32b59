//! Grouping of variants by the activities they contain.
//!
//! Variants are comma-separated activity sequences, e.g. `"a,b,c"`. Two
//! variants belong to the same group when their sorted activity lists match,
//! repeats included: `"a,b,a"` and `"a,b"` are different groups.
//! Groups are the first level of hierarchical unification.

use std::collections::{BTreeMap, BTreeSet};

use causeway_core::constants::VARIANT_SEPARATOR;

/// Sorted activity list identifying a group. Repeated activities stay.
pub type GroupKey = Vec<String>;

/// Variants bucketed by sorted activity list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantGroups {
    groups: BTreeMap<GroupKey, Vec<Vec<String>>>,
}

impl VariantGroups {
    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.groups.keys()
    }

    /// Variants in one group, in input order.
    pub fn get(&self, key: &[String]) -> Option<&[Vec<String>]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Groups whose activities include every activity of `key`.
    pub fn covering_groups(&self, key: &[String]) -> Vec<&GroupKey> {
        let wanted: BTreeSet<&str> = key.iter().map(String::as_str).collect();
        self.groups
            .keys()
            .filter(|candidate| {
                let have: BTreeSet<&str> = candidate.iter().map(String::as_str).collect();
                wanted.is_subset(&have)
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[Vec<String>])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group `variants` by their sorted activity lists. Empty variant strings are ignored.
pub fn group_variants<'a>(variants: impl IntoIterator<Item = &'a str>) -> VariantGroups {
    let mut groups: BTreeMap<GroupKey, Vec<Vec<String>>> = BTreeMap::new();
    for variant in variants {
        let trace: Vec<String> = variant
            .split(VARIANT_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if trace.is_empty() {
            continue;
        }
        groups.entry(group_key(&trace)).or_default().push(trace);
    }
    VariantGroups { groups }
}

/// Activities of a trace, sorted.
pub fn group_key(trace: &[String]) -> GroupKey {
    let mut key = trace.to_vec();
    key.sort();
    key
}
