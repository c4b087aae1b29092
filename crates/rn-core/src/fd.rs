//! Functional dependencies over attribute sets.

use crate::attribute_set::AttributeSet;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A functional dependency `determinant -> dependent`.
///
/// Both sides are non-empty. Two dependencies are equal iff both sides are
/// set-equal; the textual order they were written in does not matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionalDependency {
    determinant: AttributeSet,
    dependent: AttributeSet,
}

impl FunctionalDependency {
    /// Create a new dependency, panicking in debug builds if a side is empty.
    ///
    /// Prefer [`try_new`](Self::try_new) when handling untrusted input.
    pub fn new(determinant: AttributeSet, dependent: AttributeSet) -> Self {
        debug_assert!(!determinant.is_empty(), "determinant must not be empty");
        debug_assert!(!dependent.is_empty(), "dependent must not be empty");
        Self {
            determinant,
            dependent,
        }
    }

    /// Try to create a new dependency, validating that both sides are non-empty.
    pub fn try_new(determinant: AttributeSet, dependent: AttributeSet) -> CoreResult<Self> {
        if determinant.is_empty() {
            return Err(CoreError::EmptyDeterminant);
        }
        if dependent.is_empty() {
            return Err(CoreError::EmptyDependent);
        }
        Ok(Self {
            determinant,
            dependent,
        })
    }

    /// The left-hand side.
    pub fn determinant(&self) -> &AttributeSet {
        &self.determinant
    }

    /// The right-hand side.
    pub fn dependent(&self) -> &AttributeSet {
        &self.dependent
    }

    /// A dependency is trivial iff its dependent is a subset of its
    /// determinant; trivial dependencies carry no information.
    pub fn is_trivial(&self) -> bool {
        self.dependent.is_subset_of(&self.determinant)
    }
}

impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.determinant, self.dependent)
    }
}

#[cfg(test)]
#[path = "fd_test.rs"]
mod tests;
