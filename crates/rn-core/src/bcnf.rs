//! Boyce-Codd Normal Form: membership, violations, and lossless decomposition.

use crate::attribute_set::AttributeSet;
use crate::closure::closure;
use crate::fd::FunctionalDependency;
use crate::relation::Relation;
use crate::subsets::subsets;

/// True iff every non-trivial dependency's determinant is a super-key of
/// the relation (its closure covers the whole schema).
pub fn is_bcnf(relation: &Relation, fds: &[FunctionalDependency]) -> bool {
    fds.iter()
        .filter(|fd| !fd.is_trivial())
        .all(|fd| determines_all(fd.determinant(), relation, fds))
}

/// The non-trivial dependencies whose determinant is not a super-key, in
/// input order.
pub fn violations(relation: &Relation, fds: &[FunctionalDependency]) -> Vec<FunctionalDependency> {
    fds.iter()
        .filter(|fd| !fd.is_trivial() && !determines_all(fd.determinant(), relation, fds))
        .cloned()
        .collect()
}

fn determines_all(
    determinant: &AttributeSet,
    relation: &Relation,
    fds: &[FunctionalDependency],
) -> bool {
    closure(determinant, fds)
        .closure()
        .is_superset_of(relation.attributes())
}

/// Materialize every dependency implied by `fds` on the relation's schema:
/// one synthetic dependency per non-empty attribute subset, mapping the
/// subset to its closure, in subset-enumeration order.
///
/// Exponential in the schema size, by contract; computed once per
/// decomposition and reused at every recursion level so that projections
/// reflect dependencies implied by the original schema.
pub fn implied_fds(relation: &Relation, fds: &[FunctionalDependency]) -> Vec<FunctionalDependency> {
    subsets(relation.attributes())
        .into_iter()
        .map(|subset| {
            let derived = closure(&subset, fds).into_closure();
            FunctionalDependency::new(subset, derived)
        })
        .collect()
}

/// Project `fds` onto a schema: a dependency is kept iff its determinant is
/// fully contained in the schema, with its dependent intersected with the
/// schema. Dependencies whose intersected dependent is empty are dropped.
/// Returns new values; the inputs are never mutated.
pub fn project_fds(
    schema: &AttributeSet,
    fds: &[FunctionalDependency],
) -> Vec<FunctionalDependency> {
    fds.iter()
        .filter(|fd| fd.determinant().is_subset_of(schema))
        .filter_map(|fd| {
            let dependent = fd.dependent().intersection(schema);
            if dependent.is_empty() {
                None
            } else {
                Some(FunctionalDependency::new(fd.determinant().clone(), dependent))
            }
        })
        .collect()
}

/// Recursively split `relation` into a lossless-join BCNF decomposition.
///
/// The first violating dependency in input order is split on: with
/// `Z = closure(X)` under the current dependency list, the children are
/// `Z` and `(attributes - Z) ∪ X`, named `<parent>_1` and `<parent>_2`.
/// Equivalent dependency lists in a different order can therefore produce
/// different, equally valid decompositions. Dependency preservation is not
/// guaranteed.
pub fn decompose_bcnf(relation: &Relation, fds: &[FunctionalDependency]) -> Vec<Relation> {
    let implied = implied_fds(relation, fds);
    decompose_rec(relation, fds, &implied)
}

fn decompose_rec(
    relation: &Relation,
    fds: &[FunctionalDependency],
    implied: &[FunctionalDependency],
) -> Vec<Relation> {
    let violating = violations(relation, fds);
    let Some(fd) = violating.first() else {
        return vec![relation.clone()];
    };
    log::debug!("splitting {relation} on violating dependency {fd}");

    let reachable = closure(fd.determinant(), fds).into_closure();
    let r1 = Relation::new(format!("{}_1", relation.name()), reachable.clone());
    let r2 = Relation::new(
        format!("{}_2", relation.name()),
        relation
            .attributes()
            .difference(&reachable)
            .union(fd.determinant()),
    );

    // Both children are strictly smaller than the parent: the violating
    // determinant is not a super-key, so its closure misses part of the
    // schema, and the closure strictly exceeds the determinant.
    let r1_fds = project_fds(r1.attributes(), implied);
    let r2_fds = project_fds(r2.attributes(), implied);

    let mut result = decompose_rec(&r1, &r1_fds, implied);
    result.extend(decompose_rec(&r2, &r2_fds, implied));
    result
}

#[cfg(test)]
#[path = "bcnf_test.rs"]
mod tests;
