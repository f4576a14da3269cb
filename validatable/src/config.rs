//! Field configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::messages::Messages;
use crate::rule::Rule;

/// How many messages a field shows while in the error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorCount(pub usize);

impl Default for ErrorCount {
    fn default() -> Self {
        Self(1)
    }
}

impl FromStr for ErrorCount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| ValidationError::InvalidErrorCount(s.to_string()))
    }
}

impl fmt::Display for ErrorCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ErrorCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(usize),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Per-field validation configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    /// Force the error state on.
    pub error: bool,

    /// Maximum number of messages shown in the error state.
    pub error_count: ErrorCount,

    /// Error messages supplied by the caller. Win over everything else.
    pub error_messages: Messages,

    /// Neutral messages, shown when there are no error or success messages.
    pub messages: Messages,

    /// Keep the hint visible when the field is not focused.
    pub persistent_hint: bool,

    /// Rules run on every validation pass, in order.
    #[serde(skip)]
    pub rules: Vec<Rule>,

    /// Force the success state on.
    pub success: bool,

    pub success_messages: Messages,

    /// Wait for the first blur before showing errors.
    pub validate_on_blur: bool,
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn error_count(mut self, count: usize) -> Self {
        self.error_count = ErrorCount(count);
        self
    }

    pub fn error_messages(mut self, messages: impl Into<Messages>) -> Self {
        self.error_messages = messages.into();
        self
    }

    pub fn messages(mut self, messages: impl Into<Messages>) -> Self {
        self.messages = messages.into();
        self
    }

    pub fn persistent_hint(mut self) -> Self {
        self.persistent_hint = true;
        self
    }

    /// Append a rule.
    pub fn rule(mut self, rule: impl Into<Rule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Replace the rule set.
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }

    pub fn success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    pub fn success_messages(mut self, messages: impl Into<Messages>) -> Self {
        self.success_messages = messages.into();
        self
    }

    pub fn validate_on_blur(mut self) -> Self {
        self.validate_on_blur = true;
        self
    }
}
