use clearbrook_core::{Field, Form, FormRegistry};
use clearbrook_page::{validate, validate_fields};

fn contact_registry(phone: &str) -> FormRegistry {
    let mut registry = FormRegistry::new();
    registry.insert(
        Form::new("contact-form")
            .with_field(Field::text("name").required().with_value("Alex"))
            .with_field(Field::text("email").required().with_value("alex@example.com"))
            .with_field(Field::text("phone").required().with_value(phone))
            .with_field(Field::text("message").with_value("")),
    );
    registry
}

#[test]
fn blank_mandatory_field_fails_and_is_marked() {
    let mut registry = contact_registry("");

    assert!(!validate(&mut registry, "contact-form"));

    let form = registry.get("contact-form").unwrap();
    assert!(form.field("phone").unwrap().invalid);
    assert!(!form.field("name").unwrap().invalid);
    assert!(!form.field("email").unwrap().invalid);
}

#[test]
fn whitespace_only_counts_as_blank() {
    let mut registry = contact_registry("   ");
    assert!(!validate(&mut registry, "contact-form"));
    assert!(registry.get("contact-form").unwrap().field("phone").unwrap().invalid);
}

#[test]
fn filling_the_field_clears_its_marker() {
    let mut registry = contact_registry("");
    assert!(!validate(&mut registry, "contact-form"));

    registry
        .get_mut("contact-form")
        .unwrap()
        .set_value("phone", "555-0100");

    assert!(validate(&mut registry, "contact-form"));
    assert!(!registry.get("contact-form").unwrap().field("phone").unwrap().invalid);
}

#[test]
fn optional_fields_are_ignored() {
    let mut registry = contact_registry("555-0100");
    assert!(validate(&mut registry, "contact-form"));
    // The blank optional message field neither fails nor gets marked.
    assert!(!registry.get("contact-form").unwrap().field("message").unwrap().invalid);
}

#[test]
fn missing_form_fails_validation() {
    let mut registry = FormRegistry::new();
    assert!(!validate(&mut registry, "contact-form"));
    assert!(validate_fields(&mut registry, "contact-form").is_none());
}

#[test]
fn outcomes_cover_only_required_fields() {
    let mut registry = contact_registry("");
    let outcomes = validate_fields(&mut registry, "contact-form").unwrap();

    assert_eq!(outcomes.len(), 3);
    let phone = outcomes.iter().find(|o| o.name == "phone").unwrap();
    assert!(!phone.valid);
    assert!(outcomes.iter().all(|o| o.name != "message"));
}
