//! Tests for form-level aggregation.

use validatable::prelude::*;

fn signup_form() -> validatable::Result<Form> {
    let mut form = Form::new();
    form.add(
        "username",
        ValidationState::builder(
            FieldConfig::new()
                .rule(Rule::required("Username is required"))
                .rule(Rule::min_length(3, "Username must be at least 3 characters")),
        )
        .name("username")
        .build(),
    )?;
    form.add(
        "email",
        ValidationState::builder(
            FieldConfig::new()
                .rule(Rule::required("Email is required"))
                .rule(Rule::email("Please enter a valid email")),
        )
        .name("email")
        .value("someone@example.com")
        .build(),
    )?;
    form.add(
        "terms",
        ValidationState::builder(FieldConfig::new().rule(Rule::checked("You must accept the terms")))
            .name("terms")
            .value(false)
            .build(),
    )?;
    Ok(form)
}

#[test]
fn test_validate_reports_first_message_per_field() -> validatable::Result<()> {
    let mut form = signup_form()?;
    let result = form.validate(true);

    assert!(result.is_invalid());
    let names: Vec<_> = result.errors().iter().map(|e| e.field_name.as_str()).collect();
    assert_eq!(names, vec!["username", "terms"]);
    assert_eq!(
        result.first_error().and_then(|e| e.message.as_deref()),
        Some("Username is required")
    );
    assert_eq!(result.first_invalid_field(), Some("username"));
    assert!(!form.is_valid());
    Ok(())
}

#[test]
fn test_validate_all_valid() -> validatable::Result<()> {
    let mut form = signup_form()?;
    form.field_mut("username")?.set_input_value("ferris");
    form.field_mut("terms")?.set_input_value(true);

    assert_eq!(form.validate(false), ValidationResult::Valid);
    assert!(form.is_valid());
    Ok(())
}

#[test]
fn test_forced_validation_shows_errors() -> validatable::Result<()> {
    let mut form = signup_form()?;
    assert!(form.field("username")?.validations().is_empty());

    form.validate(true);
    assert_eq!(
        form.field("username")?.validations(),
        vec![
            Some("Username is required".to_string()),
            Some("Username must be at least 3 characters".to_string())
        ]
    );
    Ok(())
}

#[test]
fn test_duplicate_and_unknown_fields() -> validatable::Result<()> {
    let mut form = signup_form()?;

    let dup = form.add("email", ValidationState::new(FieldConfig::new()));
    assert!(matches!(dup, Err(ValidationError::DuplicateField(name)) if name == "email"));

    assert!(matches!(
        form.field("phone"),
        Err(ValidationError::UnknownField(_))
    ));
    Ok(())
}

#[test]
fn test_watch_errors_tracks_update_error() -> validatable::Result<()> {
    let mut form = signup_form()?;

    let username = form.field_mut("username")?;
    username.set_focused(true);
    username.set_focused(false);

    let passthrough = form.watch_errors();
    assert!(passthrough.is_empty());
    assert_eq!(form.fields_with_errors(), vec!["username"]);

    form.field_mut("username")?.set_input_value("ferris");
    form.watch_errors();
    assert!(form.fields_with_errors().is_empty());
    Ok(())
}

#[test]
fn test_reset_hands_back_clear_events() -> validatable::Result<()> {
    let mut form = signup_form()?;
    form.validate(true);
    form.watch_errors();

    form.reset();
    let events = form.watch_errors();
    assert_eq!(events.len(), 6);
    assert_eq!(events[0], ("username".to_string(), FieldEvent::Input(Value::Null)));

    for (name, event) in events {
        if let FieldEvent::Input(value) = event {
            form.field_mut(&name)?.set_input_value(value);
        }
    }
    form.settle();

    for (_, field) in form.fields() {
        assert!(!field.should_validate());
        assert!(field.validations().is_empty());
        assert!(!field.has_pending());
    }
    Ok(())
}

#[test]
fn test_reset_leaves_no_field_with_errors() -> validatable::Result<()> {
    let mut form = signup_form()?;
    let username = form.field_mut("username")?;
    username.set_focused(true);
    username.set_input_value("ferris");
    username.set_focused(false);
    let terms = form.field_mut("terms")?;
    terms.set_focused(true);
    terms.set_focused(false);
    form.watch_errors();
    assert_eq!(form.fields_with_errors(), vec!["terms"]);

    form.reset();
    for (name, event) in form.watch_errors() {
        if let FieldEvent::Input(value) = event {
            form.field_mut(&name)?.set_input_value(value);
        }
    }
    form.settle();

    let events = form.watch_errors();
    assert!(events.is_empty());
    assert!(form.fields_with_errors().is_empty());
    for (_, field) in form.fields() {
        assert!(field.events().is_empty());
    }
    Ok(())
}
