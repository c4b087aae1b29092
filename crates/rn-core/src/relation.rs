//! Relation schemas: a name plus a non-empty attribute set.

use crate::attribute_set::AttributeSet;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A relation schema.
///
/// Immutable value object. Decomposition derives new relations with new
/// names and new attribute sets; a parent relation is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    name: String,
    attributes: AttributeSet,
}

impl Relation {
    /// Create a new `Relation`, panicking in debug builds if the name or the
    /// attribute set is empty.
    ///
    /// Prefer [`try_new`](Self::try_new) when handling untrusted input.
    pub fn new(name: impl Into<String>, attributes: AttributeSet) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "Relation name must not be empty");
        debug_assert!(!attributes.is_empty(), "Relation must have attributes");
        Self { name, attributes }
    }

    /// Try to create a new `Relation`, validating both invariants.
    pub fn try_new(name: impl Into<String>, attributes: AttributeSet) -> CoreResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::EmptyRelationName);
        }
        if attributes.is_empty() {
            return Err(CoreError::EmptyRelation { name });
        }
        Ok(Self { name, attributes })
    }

    /// The relation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The relation's attribute set.
    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.attributes.joined())
    }
}

#[cfg(test)]
#[path = "relation_test.rs"]
mod tests;
