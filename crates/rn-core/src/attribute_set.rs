//! Ordered attribute sets and the set algebra used by every algorithm.

use crate::attribute::Attribute;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// A set of attributes with canonical (sorted) iteration order.
///
/// Backed by a `BTreeSet` so that rendering, subset enumeration, and
/// grouping are deterministic across runs. All algebra methods return new
/// sets; nothing is shared or mutated across callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet(BTreeSet<Attribute>);

impl AttributeSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Number of attributes in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the set has no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Membership test. Accepts `&Attribute` or `&str`.
    pub fn contains<Q>(&self, attr: &Q) -> bool
    where
        Attribute: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.0.contains(attr)
    }

    /// Insert an attribute, returning `true` if it was not already present.
    pub fn insert(&mut self, attr: Attribute) -> bool {
        self.0.insert(attr)
    }

    /// Remove an attribute, returning `true` if it was present.
    pub fn remove<Q>(&mut self, attr: &Q) -> bool
    where
        Attribute: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.0.remove(attr)
    }

    /// Iterate attributes in canonical sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.0.iter()
    }

    /// New set containing the attributes of both sets.
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// New set containing the attributes of `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// New set containing the attributes present in both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    /// True if every attribute of `self` is in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    /// True if every attribute of `other` is in `self`.
    pub fn is_superset_of(&self, other: &Self) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Attribute names joined with `,` in canonical order, without braces.
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(Attribute::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.joined())
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(Attribute::new).collect())
    }
}

impl IntoIterator for AttributeSet {
    type Item = Attribute;
    type IntoIter = std::collections::btree_set::IntoIter<Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = std::collections::btree_set::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "attribute_set_test.rs"]
mod tests;
