//! Validation rules.
//!
//! A rule is either a fixed result or a pure function of the field value.
//! Built-in constructors cover the common cases for text, checkbox and
//! multi-select fields.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::value::Value;

/// Outcome of applying one rule to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleResult {
    /// The rule passed.
    Valid,
    /// The rule failed. `None` is a failure without a message.
    Invalid(Option<String>),
    /// The rule produced something that is neither a pass nor a failure.
    /// Carries a description of what it produced.
    Malformed(String),
}

impl RuleResult {
    /// Failure with a message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(Some(msg.into()))
    }

    /// Failure without a message.
    pub fn fail() -> Self {
        Self::Invalid(None)
    }

    /// `Valid` when `ok`, otherwise a failure with `msg`.
    pub fn check(ok: bool, msg: impl Into<String>) -> Self {
        if ok { Self::Valid } else { Self::invalid(msg) }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<bool> for RuleResult {
    fn from(ok: bool) -> Self {
        if ok { Self::Valid } else { Self::fail() }
    }
}

impl From<&str> for RuleResult {
    fn from(msg: &str) -> Self {
        Self::invalid(msg)
    }
}

impl From<String> for RuleResult {
    fn from(msg: String) -> Self {
        Self::Invalid(Some(msg))
    }
}

impl From<std::result::Result<(), String>> for RuleResult {
    fn from(result: std::result::Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(msg) => Self::Invalid(Some(msg)),
        }
    }
}

type CheckFn = dyn Fn(&Value) -> RuleResult + Send + Sync;

/// A single validation rule.
#[derive(Clone)]
pub enum Rule {
    /// Computed from the value on every validation pass.
    Check(Arc<CheckFn>),
    /// A fixed result, independent of the value.
    Literal(RuleResult),
}

impl Rule {
    /// Rule from a function returning anything convertible to a result.
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<RuleResult>,
    {
        Self::Check(Arc::new(move |v: &Value| -> RuleResult { f(v).into() }))
    }

    /// Rule with a fixed result.
    pub fn literal(result: impl Into<RuleResult>) -> Self {
        Self::Literal(result.into())
    }

    /// Rule from a predicate and the message shown when it fails.
    pub fn predicate<F>(f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        Self::Check(Arc::new(move |v: &Value| RuleResult::check(f(v), msg.clone())))
    }

    /// Apply the rule to a value.
    pub fn evaluate(&self, value: &Value) -> RuleResult {
        match self {
            Self::Check(f) => f(value),
            Self::Literal(result) => result.clone(),
        }
    }

    /// Require the field to be non-blank.
    pub fn required(msg: impl Into<String>) -> Self {
        Self::predicate(|v| !v.is_blank() && v.as_bool() != Some(false), msg)
    }

    /// Require at least `min` characters (or list items).
    pub fn min_length(min: usize, msg: impl Into<String>) -> Self {
        Self::predicate(move |v| v.length().is_some_and(|len| len >= min), msg)
    }

    /// Require at most `max` characters (or list items).
    ///
    /// Values without a length pass.
    pub fn max_length(max: usize, msg: impl Into<String>) -> Self {
        Self::predicate(move |v| v.length().is_none_or(|len| len <= max), msg)
    }

    /// Require text matching a regex pattern.
    pub fn pattern(pattern: &str, msg: impl Into<String>) -> Result<Self> {
        let re = regex::Regex::new(pattern)?;
        Ok(Self::predicate(
            move |v| v.as_str().is_some_and(|s| re.is_match(s)),
            msg,
        ))
    }

    /// Require a valid email address. Empty values pass; combine with
    /// [`Rule::required`] for mandatory fields.
    pub fn email(msg: impl Into<String>) -> Self {
        Self::predicate(
            |v| match v {
                Value::Null => true,
                Value::Text(s) if s.is_empty() => true,
                Value::Text(s) => email_address::EmailAddress::is_valid(s),
                _ => false,
            },
            msg,
        )
    }

    /// Require the value to equal `other`.
    pub fn equals(other: impl Into<Value>, msg: impl Into<String>) -> Self {
        let other = other.into();
        Self::predicate(move |v| *v == other, msg)
    }

    /// Require text containing a substring.
    pub fn contains(substr: impl Into<String>, msg: impl Into<String>) -> Self {
        let substr = substr.into();
        Self::predicate(move |v| v.as_str().is_some_and(|s| s.contains(&substr)), msg)
    }

    /// Require a checkbox to be checked.
    pub fn checked(msg: impl Into<String>) -> Self {
        Self::predicate(|v| v.as_bool() == Some(true), msg)
    }

    /// Require at least `min` selected items.
    pub fn min_items(min: usize, msg: impl Into<String>) -> Self {
        Self::predicate(
            move |v| matches!(v, Value::List(items) if items.len() >= min),
            msg,
        )
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Check(_) => f.write_str("Rule::Check(..)"),
            Self::Literal(result) => f.debug_tuple("Rule::Literal").field(result).finish(),
        }
    }
}

impl From<RuleResult> for Rule {
    fn from(result: RuleResult) -> Self {
        Self::Literal(result)
    }
}
