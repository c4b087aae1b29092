use super::*;

fn set(attrs: &str) -> AttributeSet {
    attrs.chars().map(Attribute::from).collect()
}

#[test]
fn test_canonical_order_and_dedup() {
    let s: AttributeSet = ["C", "A", "B", "A"].into_iter().collect();
    assert_eq!(s.len(), 3);
    let names: Vec<&str> = s.iter().map(Attribute::as_str).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_display() {
    assert_eq!(set("CAB").to_string(), "{A,B,C}");
    assert_eq!(AttributeSet::new().to_string(), "{}");
}

#[test]
fn test_union() {
    assert_eq!(set("AB").union(&set("BC")), set("ABC"));
    assert_eq!(set("AB").union(&AttributeSet::new()), set("AB"));
}

#[test]
fn test_difference() {
    assert_eq!(set("ABC").difference(&set("B")), set("AC"));
    assert_eq!(set("AB").difference(&set("AB")), AttributeSet::new());
}

#[test]
fn test_intersection() {
    assert_eq!(set("ABC").intersection(&set("BCD")), set("BC"));
    assert!(set("AB").intersection(&set("CD")).is_empty());
}

#[test]
fn test_subset_and_superset() {
    assert!(set("AB").is_subset_of(&set("ABC")));
    assert!(set("ABC").is_superset_of(&set("AB")));
    assert!(set("AB").is_subset_of(&set("AB")));
    assert!(!set("ABD").is_subset_of(&set("ABC")));
    assert!(AttributeSet::new().is_subset_of(&set("A")));
}

#[test]
fn test_contains_by_name() {
    let s = set("AB");
    assert!(s.contains("A"));
    assert!(!s.contains("C"));
    assert!(s.contains(&Attribute::new("B")));
}

#[test]
fn test_insert_and_remove() {
    let mut s = set("A");
    assert!(s.insert(Attribute::new("B")));
    assert!(!s.insert(Attribute::new("B")));
    assert!(s.remove("A"));
    assert!(!s.remove("A"));
    assert_eq!(s, set("B"));
}

#[test]
fn test_value_semantics() {
    let a = set("AB");
    let b = a.union(&set("C"));
    // the input set is untouched
    assert_eq!(a, set("AB"));
    assert_eq!(b, set("ABC"));
}

#[test]
fn test_serde_as_sorted_sequence() {
    let json = serde_json::to_string(&set("BA")).unwrap();
    assert_eq!(json, "[\"A\",\"B\"]");
    let back: AttributeSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set("AB"));
}
