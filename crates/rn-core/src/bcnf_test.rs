use super::*;
use crate::attribute::Attribute;

fn set(attrs: &str) -> AttributeSet {
    attrs.chars().map(Attribute::from).collect()
}

fn fd(determinant: &str, dependent: &str) -> FunctionalDependency {
    FunctionalDependency::new(set(determinant), set(dependent))
}

#[test]
fn test_key_determinants_satisfy_bcnf() {
    let relation = Relation::new("R", set("ABC"));
    let fds = vec![fd("A", "B"), fd("A", "C")];
    assert!(is_bcnf(&relation, &fds));
    assert!(violations(&relation, &fds).is_empty());
}

#[test]
fn test_trivial_fds_are_ignored() {
    let relation = Relation::new("R", set("ABC"));
    let fds = vec![fd("AB", "A"), fd("A", "BC")];
    assert!(is_bcnf(&relation, &fds));
}

#[test]
fn test_non_key_determinant_violates() {
    // C->A holds but C is not a super-key
    let relation = Relation::new("R", set("ABC"));
    let fds = vec![fd("AB", "C"), fd("C", "A")];
    assert!(!is_bcnf(&relation, &fds));
    assert_eq!(violations(&relation, &fds), vec![fd("C", "A")]);
}

#[test]
fn test_violations_in_input_order() {
    let relation = Relation::new("R", set("ABCDE"));
    let fds = vec![fd("A", "B"), fd("A", "C"), fd("BC", "A"), fd("D", "E")];
    assert!(!is_bcnf(&relation, &fds));
    // no determinant reaches the whole schema, so all four violate
    assert_eq!(violations(&relation, &fds), fds);
}

#[test]
fn test_implied_fds_one_per_subset() {
    let relation = Relation::new("R", set("AB"));
    let fds = vec![fd("A", "B")];
    let implied = implied_fds(&relation, &fds);
    assert_eq!(
        implied,
        vec![fd("A", "AB"), fd("B", "B"), fd("AB", "AB")]
    );
}

#[test]
fn test_project_fds() {
    let fds = vec![fd("A", "ABC"), fd("B", "B"), fd("C", "B")];
    let projected = project_fds(&set("AC"), &fds);
    // B's dependency loses its determinant, C's loses its whole dependent
    assert_eq!(projected, vec![fd("A", "AC")]);
}

#[test]
fn test_decompose_already_in_bcnf() {
    let relation = Relation::new("R", set("ABC"));
    let fds = vec![fd("A", "BC")];
    assert_eq!(decompose_bcnf(&relation, &fds), vec![relation]);
}

#[test]
fn test_decompose_textbook_split() {
    // R(A,B,C,D,E,F) with B->D, C->E, DE->A
    let relation = Relation::new("R", set("ABCDEF"));
    let fds = vec![fd("B", "D"), fd("C", "E"), fd("DE", "A")];
    let decomposed = decompose_bcnf(&relation, &fds);

    let attrs: Vec<&AttributeSet> = decomposed.iter().map(Relation::attributes).collect();
    assert_eq!(attrs, vec![&set("BD"), &set("CE"), &set("ABC"), &set("BCF")]);

    // lossless cover: the components repartition every original attribute
    let union = decomposed
        .iter()
        .fold(AttributeSet::new(), |acc, r| acc.union(r.attributes()));
    assert_eq!(&union, relation.attributes());

    // every component is in BCNF under its projected dependencies
    let implied = implied_fds(&relation, &fds);
    for component in &decomposed {
        let local = project_fds(component.attributes(), &implied);
        assert!(is_bcnf(component, &local), "{component} not in BCNF");
    }
}

#[test]
fn test_decompose_names_follow_the_split_tree() {
    let relation = Relation::new("R", set("ABCDE"));
    let fds = vec![fd("A", "B"), fd("A", "C"), fd("BC", "A"), fd("D", "E")];
    let decomposed = decompose_bcnf(&relation, &fds);

    let summary: Vec<String> = decomposed.iter().map(Relation::to_string).collect();
    assert_eq!(summary, vec!["R_1(A,B,C)", "R_2_1(D,E)", "R_2_2(A,D)"]);
}
