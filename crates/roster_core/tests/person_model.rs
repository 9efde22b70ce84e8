use roster_core::Person;

#[test]
fn blank_sets_defaults() {
    let person = Person::blank();

    assert!(!person.id.is_nil());
    assert_eq!(person.name, "");
    assert_eq!(person.age, 0);
    assert!(!person.is_submittable());
}

#[test]
fn default_is_blank_with_fresh_id() {
    let first = Person::default();
    let second = Person::default();

    assert_eq!(first.name, second.name);
    assert_eq!(first.age, second.age);
    assert_ne!(first.id, second.id);
}

#[test]
fn trimmed_name_strips_surrounding_whitespace() {
    let person = Person::new("  Ada Lovelace  ", 36);
    assert_eq!(person.trimmed_name(), "Ada Lovelace");
}

#[test]
fn is_submittable_rejects_missing_or_whitespace_name() {
    assert!(!Person::new("", 30).is_submittable());
    assert!(!Person::new("   ", 30).is_submittable());
    assert!(!Person::new("\t\n", 30).is_submittable());
}

#[test]
fn is_submittable_rejects_non_positive_age() {
    assert!(!Person::new("Ada Lovelace", 0).is_submittable());
    assert!(!Person::new("Ada Lovelace", -1).is_submittable());
}

#[test]
fn is_submittable_accepts_trimmed_name_and_positive_age() {
    assert!(Person::new("Ada Lovelace", 1).is_submittable());
    assert!(Person::new("  Ada Lovelace ", 36).is_submittable());
}

#[test]
fn person_serialization_uses_expected_wire_fields() {
    let person = Person::new("Isaac Newton", 39);

    let json = serde_json::to_value(&person).expect("person should serialize");
    assert_eq!(json["id"], person.id.to_string());
    assert_eq!(json["name"], "Isaac Newton");
    assert_eq!(json["age"], 39);

    let decoded: Person = serde_json::from_value(json).expect("person should deserialize");
    assert_eq!(decoded, person);
}
