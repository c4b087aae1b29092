use super::*;
use crate::subsets::subsets;

fn set(attrs: &str) -> AttributeSet {
    attrs.chars().map(Attribute::from).collect()
}

fn fd(determinant: &str, dependent: &str) -> FunctionalDependency {
    FunctionalDependency::new(set(determinant), set(dependent))
}

#[test]
fn test_basis_splits_dependents() {
    let basis = minimal_basis(&[fd("A", "BC")]);
    assert_eq!(basis, vec![fd("A", "B"), fd("A", "C")]);
}

#[test]
fn test_basis_removes_redundant_fd() {
    // A->C is derivable through B
    let basis = minimal_basis(&[fd("A", "B"), fd("B", "C"), fd("A", "C")]);
    assert_eq!(basis, vec![fd("A", "B"), fd("B", "C")]);
}

#[test]
fn test_basis_removes_extraneous_attribute() {
    // B is extraneous in AB->C because A alone determines B
    let basis = minimal_basis(&[fd("AB", "C"), fd("A", "B")]);
    assert_eq!(basis, vec![fd("A", "C"), fd("A", "B")]);
}

#[test]
fn test_basis_already_minimal() {
    let fds = vec![fd("A", "B"), fd("A", "C"), fd("BC", "A"), fd("D", "E")];
    assert_eq!(minimal_basis(&fds), fds);
}

#[test]
fn test_basis_preserves_closure_power() {
    let relation = Relation::new("R", set("ABCDE"));
    let fds = vec![fd("A", "BC"), fd("B", "C"), fd("AB", "D"), fd("D", "E")];
    let basis = minimal_basis(&fds);

    for subset in subsets(relation.attributes()) {
        assert_eq!(
            closure(&subset, &fds).closure(),
            closure(&subset, &basis).closure(),
            "closures diverge on {subset}"
        );
    }
}

#[test]
fn test_third_nf_accepts_prime_dependents() {
    // C->A is not a super-key dependency, but A is prime ({A,B} is a key)
    let relation = Relation::new("R", set("ABC"));
    let fds = vec![fd("AB", "C"), fd("C", "A")];
    assert!(is_third_nf(&relation, &fds));
}

#[test]
fn test_third_nf_rejects_non_prime_dependents() {
    // D->E: D is not a super-key and E is in no candidate key
    let relation = Relation::new("R", set("ABCDE"));
    let fds = vec![fd("A", "B"), fd("A", "C"), fd("BC", "A"), fd("D", "E")];
    assert!(!is_third_nf(&relation, &fds));
}

#[test]
fn test_third_nf_accepts_key_determinants() {
    let relation = Relation::new("R", set("ABC"));
    let fds = vec![fd("A", "BC")];
    assert!(is_third_nf(&relation, &fds));
}

#[test]
fn test_decompose_synthesis() {
    let relation = Relation::new("R", set("ABCDE"));
    let fds = vec![fd("A", "B"), fd("A", "C"), fd("BC", "A"), fd("D", "E")];
    let decomposed = decompose_3nf(&relation, &fds);

    let attrs: Vec<&AttributeSet> = decomposed.iter().map(Relation::attributes).collect();
    assert_eq!(attrs, vec![&set("ABC"), &set("DE"), &set("AD")]);
}

#[test]
fn test_decompose_preserves_dependencies() {
    let relation = Relation::new("R", set("ABCDE"));
    let fds = vec![fd("A", "B"), fd("A", "C"), fd("BC", "A"), fd("D", "E")];
    let basis = minimal_basis(&fds);
    let decomposed = decompose_3nf(&relation, &fds);

    for dep in &basis {
        let span = dep.determinant().union(dep.dependent());
        assert!(
            decomposed
                .iter()
                .any(|r| span.is_subset_of(r.attributes())),
            "{dep} is not confined to a single component"
        );
    }
}

#[test]
fn test_decompose_keeps_a_key() {
    let relation = Relation::new("R", set("ABCDE"));
    let fds = vec![fd("A", "B"), fd("A", "C"), fd("BC", "A"), fd("D", "E")];
    let basis = minimal_basis(&fds);
    let decomposed = decompose_3nf(&relation, &fds);
    let candidates = candidate_keys(&relation, &basis);

    assert!(decomposed
        .iter()
        .any(|r| candidates.iter().any(|key| key.is_subset_of(r.attributes()))));
}

#[test]
fn test_decompose_components_are_third_nf() {
    let relation = Relation::new("R", set("ABCDE"));
    let fds = vec![fd("A", "B"), fd("A", "C"), fd("BC", "A"), fd("D", "E")];
    let implied = crate::bcnf::implied_fds(&relation, &fds);

    for component in decompose_3nf(&relation, &fds) {
        let local = crate::bcnf::project_fds(component.attributes(), &implied);
        assert!(is_third_nf(&component, &local), "{component} not in 3NF");
    }
}

#[test]
fn test_decompose_merges_equal_determinant_groups() {
    // A->B and B->A yield two components over the same attributes
    let relation = Relation::new("R", set("AB"));
    let fds = vec![fd("A", "B"), fd("B", "A")];
    let decomposed = decompose_3nf(&relation, &fds);
    assert_eq!(decomposed.len(), 1);
    assert_eq!(decomposed[0].attributes(), &set("AB"));
}

#[test]
fn test_decompose_without_fds_emits_the_key_relation() {
    let relation = Relation::new("R", set("ABC"));
    let decomposed = decompose_3nf(&relation, &[]);
    assert_eq!(decomposed.len(), 1);
    assert_eq!(decomposed[0].attributes(), &set("ABC"));
}
