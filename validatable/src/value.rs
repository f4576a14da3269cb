//! Field values as seen by validation rules.

use serde::{Deserialize, Serialize};

/// The current value of a form field.
///
/// Text inputs carry `Text`, checkboxes `Bool`, multi-selects `List`.
/// `Null` is the cleared single-value state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// The value a field is cleared to on reset.
    pub fn cleared(multiple: bool) -> Self {
        if multiple {
            Self::List(Vec::new())
        } else {
            Self::Null
        }
    }

    /// Whether the value counts as "entered" by the user.
    ///
    /// Lists are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::List(_) => true,
        }
    }

    /// Whether the value holds nothing (null, blank text or empty list).
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    /// Length in characters for text, items for lists.
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::Text(s) => Some(s.chars().count()),
            Self::List(items) => Some(items.len()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::List(_) => "list",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from(0i64).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(Value::from("a").is_truthy());
        assert!(Value::List(Vec::new()).is_truthy());
    }

    #[test]
    fn test_cleared() {
        assert_eq!(Value::cleared(false), Value::Null);
        assert_eq!(Value::cleared(true), Value::List(Vec::new()));
    }

    #[test]
    fn test_len_counts_chars() {
        assert_eq!(Value::from("héllo").length(), Some(5));
        assert_eq!(Value::from(vec![Value::Null]).length(), Some(1));
        assert_eq!(Value::from(true).length(), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".into()));
    }
}
