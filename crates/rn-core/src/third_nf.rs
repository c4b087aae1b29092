//! Third Normal Form: minimal basis, membership, and dependency-preserving
//! synthesis.

use crate::attribute::Attribute;
use crate::attribute_set::AttributeSet;
use crate::closure::closure;
use crate::fd::FunctionalDependency;
use crate::keys::candidate_keys;
use crate::relation::Relation;
use std::collections::BTreeMap;

/// Reduce `fds` to a minimal basis (canonical cover): singleton dependents,
/// no redundant dependency, no extraneous determinant attribute, with the
/// same closure-generating power as the input.
///
/// Redundant dependencies are tested in input order, so when several are
/// mutually redundant the earliest-tested one is removed first. Extraneous
/// determinant attributes are tried in canonical sorted order, with the
/// closure taken under the current working set.
pub fn minimal_basis(fds: &[FunctionalDependency]) -> Vec<FunctionalDependency> {
    // Pass 1: one dependency per dependent attribute.
    let mut basis: Vec<FunctionalDependency> = fds
        .iter()
        .flat_map(|fd| {
            fd.dependent().iter().map(|attr| {
                FunctionalDependency::new(
                    fd.determinant().clone(),
                    std::iter::once(attr.clone()).collect(),
                )
            })
        })
        .collect();

    // Pass 2: a dependency is redundant if its dependent is still derivable
    // from its determinant once it is removed.
    let mut i = 0;
    while i < basis.len() {
        let fd = basis.remove(i);
        if closure(fd.determinant(), &basis)
            .closure()
            .is_superset_of(fd.dependent())
        {
            log::debug!("dropping redundant dependency {fd}");
        } else {
            basis.insert(i, fd);
            i += 1;
        }
    }

    // Pass 3: a determinant attribute is extraneous if the reduced
    // determinant still derives the dependent under the working set (which
    // still carries the unreduced dependency while it is being tested).
    for i in 0..basis.len() {
        if basis[i].determinant().len() < 2 {
            continue;
        }
        let original: Vec<Attribute> = basis[i].determinant().iter().cloned().collect();
        let mut kept = basis[i].determinant().clone();
        for attr in &original {
            let mut reduced = kept.clone();
            reduced.remove(attr);
            if closure(&reduced, &basis)
                .closure()
                .is_superset_of(basis[i].dependent())
            {
                log::debug!("dropping extraneous attribute {attr} from {}", basis[i]);
                kept = reduced;
            }
        }
        if kept != *basis[i].determinant() {
            basis[i] = FunctionalDependency::new(kept, basis[i].dependent().clone());
        }
    }

    basis
}

/// True iff every non-trivial dependency either has a super-key determinant
/// or only prime dependent attributes (attributes belonging to some
/// candidate key) - the exception BCNF does not grant.
pub fn is_third_nf(relation: &Relation, fds: &[FunctionalDependency]) -> bool {
    let candidates = candidate_keys(relation, fds);
    fds.iter().filter(|fd| !fd.is_trivial()).all(|fd| {
        let super_key = closure(fd.determinant(), fds)
            .closure()
            .is_superset_of(relation.attributes());
        super_key
            || fd
                .dependent()
                .iter()
                .all(|attr| candidates.iter().any(|key| key.contains(attr)))
    })
}

/// Synthesize a lossless-join, dependency-preserving 3NF decomposition.
///
/// One relation per distinct minimal-basis determinant (determinant union
/// grouped dependents); if none of them contains a candidate key of the
/// original relation, one extra relation holding the first-enumerated
/// candidate key is appended; exact duplicates and strict subsets of other
/// components are dropped. Grouping is keyed by the ordered attribute set,
/// so the emitted relations are deterministic.
pub fn decompose_3nf(relation: &Relation, fds: &[FunctionalDependency]) -> Vec<Relation> {
    let basis = minimal_basis(fds);

    let mut grouped: BTreeMap<AttributeSet, AttributeSet> = BTreeMap::new();
    for fd in &basis {
        grouped
            .entry(fd.determinant().clone())
            .and_modify(|dependent| *dependent = dependent.union(fd.dependent()))
            .or_insert_with(|| fd.dependent().clone());
    }

    let mut components: Vec<Relation> = Vec::new();
    let mut counter = 1;
    for (determinant, dependent) in &grouped {
        components.push(Relation::new(
            format!("{}_{}", relation.name(), counter),
            determinant.union(dependent),
        ));
        counter += 1;
    }

    let candidates = candidate_keys(relation, &basis);
    let has_key = components
        .iter()
        .any(|r| candidates.iter().any(|key| key.is_subset_of(r.attributes())));
    if !has_key {
        if let Some(key) = candidates.first() {
            log::debug!("no component holds a key of {relation}; adding one for {key}");
            components.push(Relation::new(
                format!("{}_{}", relation.name(), counter),
                key.clone(),
            ));
        }
    }

    // Drop exact duplicates, then components subsumed by a larger component.
    let mut deduped: Vec<Relation> = Vec::new();
    for component in components {
        if !deduped
            .iter()
            .any(|other| other.attributes() == component.attributes())
        {
            deduped.push(component);
        }
    }
    deduped
        .iter()
        .filter(|component| {
            !deduped.iter().any(|other| {
                other.attributes() != component.attributes()
                    && component.attributes().is_subset_of(other.attributes())
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "third_nf_test.rs"]
mod tests;
