//! Tests for built-in rules.

use validatable::prelude::*;

fn ok(rule: &Rule, value: impl Into<Value>) -> bool {
    rule.evaluate(&value.into()).is_valid()
}

#[test]
fn test_required() {
    let rule = Rule::required("Required");
    assert!(!ok(&rule, Value::Null));
    assert!(!ok(&rule, "   "));
    assert!(!ok(&rule, false));
    assert!(!ok(&rule, Value::List(Vec::new())));
    assert!(ok(&rule, "x"));
    assert!(ok(&rule, true));
    assert!(ok(&rule, 0i64));
}

#[test]
fn test_required_message() {
    let rule = Rule::required("Name is required");
    assert_eq!(
        rule.evaluate(&Value::Null),
        RuleResult::Invalid(Some("Name is required".into()))
    );
}

#[test]
fn test_length_rules_count_chars() {
    let min = Rule::min_length(3, "short");
    let max = Rule::max_length(3, "long");

    assert!(!ok(&min, "ab"));
    assert!(ok(&min, "äöü"));
    assert!(!ok(&min, Value::Null));

    assert!(ok(&max, "äöü"));
    assert!(!ok(&max, "abcd"));
    assert!(ok(&max, Value::Null));
}

#[test]
fn test_pattern() -> validatable::Result<()> {
    let rule = Rule::pattern(r"^\d{4}$", "Four digits")?;
    assert!(ok(&rule, "2024"));
    assert!(!ok(&rule, "20x4"));
    assert!(!ok(&rule, 2024i64));
    Ok(())
}

#[test]
fn test_invalid_pattern() {
    let result = Rule::pattern("(unclosed", "bad");
    assert!(matches!(result, Err(ValidationError::InvalidPattern(_))));
}

#[test]
fn test_email() {
    let rule = Rule::email("Invalid email");
    assert!(ok(&rule, "someone@example.com"));
    assert!(!ok(&rule, "not an email"));
    // Empty passes; required() handles presence.
    assert!(ok(&rule, ""));
    assert!(ok(&rule, Value::Null));
}

#[test]
fn test_equals_and_contains() {
    let equals = Rule::equals("secret", "Passwords must match");
    assert!(ok(&equals, "secret"));
    assert!(!ok(&equals, "Secret"));

    let contains = Rule::contains("@", "Missing @");
    assert!(ok(&contains, "a@b"));
    assert!(!ok(&contains, "ab"));
}

#[test]
fn test_checked() {
    let rule = Rule::checked("Accept the terms");
    assert!(ok(&rule, true));
    assert!(!ok(&rule, false));
    assert!(!ok(&rule, Value::Null));
}

#[test]
fn test_min_items() {
    let rule = Rule::min_items(2, "Pick two");
    assert!(!ok(&rule, vec![Value::from("a")]));
    assert!(ok(&rule, vec![Value::from("a"), Value::from("b")]));
    assert!(!ok(&rule, "ab"));
}

#[test]
fn test_rule_from_closure_result() {
    let rule = Rule::new(|v: &Value| -> Result<(), String> {
        match v.as_str() {
            Some(s) if s.starts_with('#') => Ok(()),
            _ => Err("Must start with #".to_string()),
        }
    });
    assert!(ok(&rule, "#tag"));
    assert_eq!(
        rule.evaluate(&Value::from("tag")),
        RuleResult::invalid("Must start with #")
    );
}

#[test]
fn test_rule_from_closure_bool() {
    let rule = Rule::new(|v: &Value| v.is_truthy());
    assert!(ok(&rule, "x"));
    assert_eq!(rule.evaluate(&Value::Null), RuleResult::Invalid(None));
}

#[test]
fn test_literal_rule_ignores_value() {
    let rule = Rule::literal("fixed");
    assert_eq!(rule.evaluate(&Value::from("anything")), RuleResult::invalid("fixed"));
    assert_eq!(format!("{:?}", Rule::literal(true)), "Rule::Literal(Valid)");
}
