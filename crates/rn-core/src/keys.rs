//! Super-key and candidate-key enumeration.

use crate::attribute_set::AttributeSet;
use crate::closure::closure;
use crate::fd::FunctionalDependency;
use crate::relation::Relation;
use crate::subsets::subsets;

/// All subsets of the relation's attributes whose closure covers the whole
/// schema, ascending by size.
///
/// Brute force over the power set: `O(2^n · n · |fds|)`.
pub fn super_keys(relation: &Relation, fds: &[FunctionalDependency]) -> Vec<AttributeSet> {
    subsets(relation.attributes())
        .into_iter()
        .filter(|candidate| {
            closure(candidate, fds)
                .closure()
                .is_superset_of(relation.attributes())
        })
        .collect()
}

/// The minimal super-keys of the relation.
///
/// A super-key is a candidate key iff no proper subset of it is also a
/// super-key. Minimality is checked explicitly against the full super-key
/// list; candidate keys of different sizes can coexist, so filtering by
/// smallest cardinality would lose keys.
pub fn candidate_keys(relation: &Relation, fds: &[FunctionalDependency]) -> Vec<AttributeSet> {
    let supers = super_keys(relation, fds);
    let keys: Vec<AttributeSet> = supers
        .iter()
        .filter(|key| is_minimal(key, &supers))
        .cloned()
        .collect();

    // The full attribute set is always a super-key, so a non-empty relation
    // always yields at least one candidate key.
    assert!(
        !keys.is_empty(),
        "no candidate key found for relation '{}'",
        relation.name()
    );
    keys
}

fn is_minimal(key: &AttributeSet, supers: &[AttributeSet]) -> bool {
    !supers
        .iter()
        .any(|other| other != key && other.is_subset_of(key))
}

#[cfg(test)]
#[path = "keys_test.rs"]
mod tests;
