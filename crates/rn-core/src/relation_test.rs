use super::*;
use crate::attribute::Attribute;

fn set(attrs: &str) -> AttributeSet {
    attrs.chars().map(Attribute::from).collect()
}

#[test]
fn test_new_and_accessors() {
    let relation = Relation::new("R", set("BAC"));
    assert_eq!(relation.name(), "R");
    assert_eq!(relation.attributes(), &set("ABC"));
}

#[test]
fn test_display_uses_canonical_order() {
    let relation = Relation::new("Orders", set("CBA"));
    assert_eq!(relation.to_string(), "Orders(A,B,C)");
}

#[test]
fn test_try_new_rejects_empty_attributes() {
    let result = Relation::try_new("R", AttributeSet::new());
    assert!(matches!(result, Err(CoreError::EmptyRelation { .. })));
}

#[test]
fn test_try_new_rejects_empty_name() {
    let result = Relation::try_new("", set("AB"));
    assert!(matches!(result, Err(CoreError::EmptyRelationName)));
}

#[test]
fn test_serde_shape() {
    let relation = Relation::new("R", set("BA"));
    let json = serde_json::to_value(&relation).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"name": "R", "attributes": ["A", "B"]})
    );
}
