//! Attribute-set closure under a list of functional dependencies.

use crate::attribute_set::AttributeSet;
use crate::fd::FunctionalDependency;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of a closure computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureResult {
    closure: AttributeSet,
    iterations: usize,
}

impl ClosureResult {
    /// The computed closure, a superset of the input attribute set.
    pub fn closure(&self) -> &AttributeSet {
        &self.closure
    }

    /// Number of fixpoint passes that added at least one attribute.
    ///
    /// Diagnostic only: the count depends on the order of the dependency
    /// list, the closure itself does not.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Consume the result and return the closure set.
    pub fn into_closure(self) -> AttributeSet {
        self.closure
    }
}

impl fmt::Display for ClosureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.closure, self.iterations)
    }
}

/// Compute the closure of `attrs` under `fds`.
///
/// Fixpoint iteration: on each full pass, every dependency whose determinant
/// is contained in the working set contributes its dependent attributes. The
/// working set is bounded by the attribute universe and grows strictly on
/// every counted pass, so the loop terminates. The resulting set does not
/// depend on the order of `fds`.
///
/// With an empty dependency list the closure is the input set itself, and
/// the closure of the empty set is empty as long as every determinant is
/// non-empty (which the `FunctionalDependency` constructor guarantees).
pub fn closure(attrs: &AttributeSet, fds: &[FunctionalDependency]) -> ClosureResult {
    let mut current = attrs.clone();
    let mut iterations = 0;

    loop {
        let mut changed = false;
        for fd in fds {
            if fd.determinant().is_subset_of(&current) {
                for attr in fd.dependent().iter() {
                    if current.insert(attr.clone()) {
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            break;
        }
        iterations += 1;
        log::trace!("closure pass {iterations}: {current}");
    }

    ClosureResult {
        closure: current,
        iterations,
    }
}

#[cfg(test)]
#[path = "closure_test.rs"]
mod tests;
