use clearbrook_core::{CoreError, Field, Form, FormRegistry};

#[test]
fn registry_lookup_by_id() {
    let mut registry = FormRegistry::new();
    registry.insert(Form::new("phq9-form").with_field(Field::single_choice("phq9-q1")));

    assert!(registry.get("phq9-form").is_some());
    assert!(registry.get("gad7-form").is_none());
}

#[test]
fn insert_replaces_form_with_same_id() {
    let mut registry = FormRegistry::new();
    registry.insert(Form::new("contact").with_field(Field::text("name")));
    registry.insert(Form::new("contact").with_field(Field::text("email")));

    let form = registry.get("contact").unwrap();
    assert_eq!(form.fields.len(), 1);
    assert_eq!(form.fields[0].name, "email");
}

#[test]
fn set_value_reports_missing_field() {
    let mut form = Form::new("contact").with_field(Field::text("name"));

    assert!(form.set_value("name", "Alex"));
    assert_eq!(form.field("name").unwrap().value, "Alex");
    assert!(!form.set_value("phone", "555-0100"));
}

#[test]
fn selection_is_none_until_chosen() {
    let blank = Field::single_choice("phq9-q1");
    assert_eq!(blank.selection(), None);

    let chosen = Field::single_choice("phq9-q1").with_value("2");
    assert_eq!(chosen.selection(), Some("2"));
}

#[test]
fn text_fields_never_report_a_selection() {
    let field = Field::text("notes").with_value("feeling better");
    assert_eq!(field.selection(), None);
    assert_eq!(field.points().unwrap(), None);
}

#[test]
fn points_parses_selected_value() {
    let field = Field::single_choice("phq9-q1").with_value("3");
    assert_eq!(field.points().unwrap(), Some(3));

    let unselected = Field::single_choice("phq9-q2");
    assert_eq!(unselected.points().unwrap(), None);
}

#[test]
fn points_rejects_non_numeric_selection() {
    let field = Field::single_choice("phq9-q1").with_value("often");
    let err = field.points().unwrap_err();
    match err {
        CoreError::UnparseableValue { field, value } => {
            assert_eq!(field, "phq9-q1");
            assert_eq!(value, "often");
        }
        other => panic!("unexpected error: {other}"),
    }
}
