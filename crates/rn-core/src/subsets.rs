//! Non-empty subset enumeration, smallest subsets first.

use crate::attribute::Attribute;
use crate::attribute_set::AttributeSet;

/// Enumerate all `2^n - 1` non-empty subsets of `set`, ascending by
/// cardinality, with a stable order inside each size class (bitmask
/// enumeration over the canonical sorted element order).
///
/// This is a deliberate brute-force primitive with an `O(2^n)` contract;
/// callers own the exponential cost and are expected to pass small sets.
pub fn subsets(set: &AttributeSet) -> Vec<AttributeSet> {
    let elements: Vec<&Attribute> = set.iter().collect();
    let n = elements.len();
    assert!(
        n < usize::BITS as usize,
        "attribute set too large to enumerate subsets of"
    );

    let total = 1usize << n;
    let mut all = Vec::with_capacity(total - 1);
    for mask in 1..total {
        let subset: AttributeSet = (0..n)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| elements[i].clone())
            .collect();
        all.push(subset);
    }

    // sort_by_key is stable, so bitmask order survives within a size class
    all.sort_by_key(AttributeSet::len);
    all
}

#[cfg(test)]
#[path = "subsets_test.rs"]
mod tests;
