//! Form-level aggregation over several fields.
//!
//! A `Form` owns named fields in insertion order, validates them together
//! and keeps track of which fields currently report an error through their
//! `update:error` events.

use std::collections::HashMap;

use log::debug;

use crate::error::{Result, ValidationError};
use crate::events::FieldEvent;
use crate::result::{FieldError, ValidationResult};
use crate::state::ValidationState;

#[derive(Debug, Default)]
pub struct Form {
    fields: Vec<(String, ValidationState)>,
    errors: HashMap<String, bool>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field under `name`.
    pub fn add(&mut self, name: impl Into<String>, field: ValidationState) -> Result<()> {
        let name = name.into();
        if self.position(&name).is_some() {
            return Err(ValidationError::DuplicateField(name));
        }
        debug!("form: added field {}", name);
        self.fields.push((name, field));
        Ok(())
    }

    pub fn field(&self, name: &str) -> Result<&ValidationState> {
        self.position(name)
            .map(|i| &self.fields[i].1)
            .ok_or_else(|| ValidationError::UnknownField(name.to_string()))
    }

    pub fn field_mut(&mut self, name: &str) -> Result<&mut ValidationState> {
        match self.position(name) {
            Some(i) => Ok(&mut self.fields[i].1),
            None => Err(ValidationError::UnknownField(name.to_string())),
        }
    }

    /// Iterate over fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &ValidationState)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(n, _)| n == name)
    }

    /// Validate every field. The result lists the first message of each
    /// failing field.
    pub fn validate(&mut self, force: bool) -> ValidationResult {
        let mut errors = Vec::new();

        for (name, field) in &mut self.fields {
            if field.validate(force) {
                continue;
            }
            errors.push(FieldError {
                field_name: name.clone(),
                field_id: field.id(),
                message: field.error_bucket().first().cloned().flatten(),
            });
        }

        debug!("form: validated, {} invalid field(s)", errors.len());
        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    /// Whether every field passed its last validation.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, field)| field.valid())
    }

    pub fn reset(&mut self) {
        for (_, field) in &mut self.fields {
            field.reset();
        }
        self.errors.clear();
    }

    /// Run deferred work on every field.
    pub fn settle(&mut self) {
        for (_, field) in &mut self.fields {
            field.settle();
        }
    }

    /// Drain every field's events. `update:error` events are folded into
    /// the form's error map; the rest are returned with their field name.
    pub fn watch_errors(&mut self) -> Vec<(String, FieldEvent)> {
        let mut passthrough = Vec::new();

        for (name, field) in &mut self.fields {
            for event in field.take_events() {
                match event {
                    FieldEvent::UpdateError(has_error) => {
                        self.errors.insert(name.clone(), has_error);
                    }
                    other => passthrough.push((name.clone(), other)),
                }
            }
        }

        passthrough
    }

    /// Names of fields whose last `update:error` reported an error.
    pub fn fields_with_errors(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(name, _)| self.errors.get(name).copied().unwrap_or(false))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
