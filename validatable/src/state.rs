//! Per-field validation state machine.
//!
//! `ValidationState` runs a field's rules, decides which messages are shown
//! and when errors become visible. The host owns the value, focus and
//! overrides and pushes every change in through the `set_*` handlers. Each
//! handler runs synchronously; the only deferred work is the second half of
//! [`ValidationState::reset`], which runs on [`ValidationState::settle`].

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use log::{debug, trace};
use uuid::Uuid;

use crate::color::{Color, ColorProvider, NoColor};
use crate::config::FieldConfig;
use crate::diagnostics::{DiagnosticSink, LogSink, RuleContext, invalid_rule_message};
use crate::events::FieldEvent;
use crate::messages::Messages;
use crate::rule::{Rule, RuleResult};
use crate::value::Value;

/// Unique identifier for a field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FieldId(Uuid);

impl FieldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A message in the error bucket. `None` comes from a rule that failed
/// without a message; renderers show nothing for it.
pub type ErrorMessage = Option<String>;

/// Lifecycle flags of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationFlags {
    /// The field has received a non-empty value at least once.
    pub has_input: bool,
    /// The field has lost focus at least once since creation or reset.
    pub has_focused: bool,
    /// Computed errors are shown to the user.
    pub should_validate: bool,
    /// The last validation pass produced no errors.
    pub valid: bool,
}

/// Visual state of a field, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualState {
    Error,
    Success,
    Color(Color),
}

/// Work scheduled to run after the host's next update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Second half of a reset: hide errors, forget the blur, re-validate.
    ResetValidation,
}

/// Validation state of one field.
pub struct ValidationState {
    id: FieldId,
    name: Option<String>,
    config: FieldConfig,
    flags: ValidationFlags,
    error_bucket: Vec<ErrorMessage>,
    input_value: Value,
    is_focused: bool,
    is_multiple: bool,
    color: Box<dyn ColorProvider>,
    diagnostics: Arc<dyn DiagnosticSink>,
    events: Vec<FieldEvent>,
    deferred: VecDeque<Deferred>,
    /// Last `has_error()` seen by the change watcher.
    last_has_error: bool,
}

impl ValidationState {
    /// Create and initialize a field with no value, no colour and the
    /// default log sink.
    pub fn new(config: FieldConfig) -> Self {
        Self::builder(config).build()
    }

    pub fn builder(config: FieldConfig) -> ValidationStateBuilder {
        ValidationStateBuilder {
            config,
            name: None,
            value: Value::Null,
            multiple: false,
            color: Box::new(NoColor),
            diagnostics: Arc::new(LogSink),
        }
    }

    // ------------------------------------------------------------------
    // Rule runner
    // ------------------------------------------------------------------

    /// Run every rule against the current value.
    ///
    /// With `force`, errors become visible regardless of focus history.
    /// Returns whether the field is valid.
    pub fn validate(&mut self, force: bool) -> bool {
        let value = self.input_value.clone();
        self.validate_with(force, &value)
    }

    /// Run every rule against `value` instead of the current value.
    pub fn validate_with(&mut self, force: bool, value: &Value) -> bool {
        if force {
            self.flags.should_validate = true;
        }

        let valid = self.run_rules(value);
        self.watch_has_error();
        valid
    }

    fn run_rules(&mut self, value: &Value) -> bool {
        self.error_bucket.clear();

        for (index, rule) in self.config.rules.iter().enumerate() {
            match rule.evaluate(value) {
                RuleResult::Valid => {}
                RuleResult::Invalid(msg) => self.error_bucket.push(msg),
                RuleResult::Malformed(received) => {
                    let context = RuleContext {
                        field_id: self.id,
                        field: self.name.clone(),
                        rule_index: index,
                        received,
                    };
                    self.diagnostics
                        .report_invalid_rule_result(&invalid_rule_message(&context.received), &context);
                }
            }
        }

        self.flags.valid = self.error_bucket.is_empty();
        debug!(
            "field {}: validated {} rule(s), {} error(s)",
            self.label(),
            self.config.rules.len(),
            self.error_bucket.len()
        );
        self.flags.valid
    }

    // ------------------------------------------------------------------
    // Display state
    // ------------------------------------------------------------------

    pub fn has_error(&self) -> bool {
        !self.config.error_messages.is_empty() || !self.error_bucket.is_empty() || self.config.error
    }

    pub fn has_success(&self) -> bool {
        !self.config.success_messages.is_empty() || self.config.success
    }

    pub fn has_messages(&self) -> bool {
        !self.validations().is_empty()
    }

    /// Messages to display, by priority: error overrides, success
    /// overrides, neutral messages, then computed errors once visible.
    pub fn validations(&self) -> Vec<ErrorMessage> {
        let overrides = [
            &self.config.error_messages,
            &self.config.success_messages,
            &self.config.messages,
        ];

        if let Some(target) = overrides.into_iter().find(|m| !m.is_empty()) {
            target.to_vec().into_iter().map(Some).collect()
        } else if self.flags.should_validate {
            self.error_bucket.clone()
        } else {
            Vec::new()
        }
    }

    /// `validations()` limited to `error_count` entries while the field is
    /// in the error state.
    pub fn visible_messages(&self) -> Vec<ErrorMessage> {
        let mut messages = self.validations();
        if self.has_error() {
            messages.truncate(self.config.error_count.0);
        }
        messages
    }

    pub fn validation_state(&self) -> Option<VisualState> {
        if self.has_error() {
            Some(VisualState::Error)
        } else if self.has_success() {
            Some(VisualState::Success)
        } else if self.color.has_color() {
            self.color.color().map(VisualState::Color)
        } else {
            None
        }
    }

    pub fn show_hint(&self) -> bool {
        self.config.persistent_hint || self.is_focused
    }

    // ------------------------------------------------------------------
    // Signal handlers
    // ------------------------------------------------------------------

    /// The host's bound value changed.
    ///
    /// While a reset is pending the value and flags are updated but the
    /// rules are not re-run; the deferred step validates once errors are
    /// hidden again.
    pub fn set_input_value(&mut self, value: impl Into<Value>) {
        let value = value.into();
        if value == self.input_value {
            return;
        }
        trace!("field {}: input value changed", self.label());
        self.input_value = value;

        if self.input_value.is_truthy() && !self.flags.has_input {
            self.flags.has_input = true;
        }
        if self.flags.has_input && !self.config.validate_on_blur {
            self.flags.should_validate = true;
        }

        if self.has_pending() {
            trace!("field {}: reset pending, deferring validation", self.label());
            return;
        }

        let value = self.input_value.clone();
        self.run_rules(&value);
        self.watch_has_error();
    }

    /// The host's focus state changed.
    pub fn set_focused(&mut self, focused: bool) {
        if focused == self.is_focused {
            return;
        }
        trace!("field {}: focused = {}", self.label(), focused);
        self.is_focused = focused;

        if !focused && !self.flags.has_focused {
            self.flags.has_focused = true;
            self.flags.should_validate = true;
            self.emit(FieldEvent::UpdateError(!self.error_bucket.is_empty()));
        }
        self.watch_has_error();
    }

    pub fn set_multiple(&mut self, multiple: bool) {
        self.is_multiple = multiple;
    }

    /// Replace the rule set. Re-validates only when the number of rules
    /// changes.
    pub fn set_rules(&mut self, rules: impl IntoIterator<Item = Rule>) {
        let old_len = self.config.rules.len();
        self.config.rules = rules.into_iter().collect();

        if self.config.rules.len() == old_len {
            trace!("field {}: rule count unchanged, skipping validation", self.label());
            return;
        }
        self.validate(false);
    }

    /// The external error flag changed.
    ///
    /// The `has_error` change is observed before `should_validate` follows
    /// the flag, so turning the flag on for a quiet field emits nothing and
    /// turning it off on a visible field emits `UpdateError(false)`.
    pub fn set_error(&mut self, error: bool) {
        if error == self.config.error {
            return;
        }
        self.config.error = error;
        self.watch_has_error();
        self.flags.should_validate = error;
    }

    pub fn set_success(&mut self, success: bool) {
        self.config.success = success;
    }

    pub fn set_error_messages(&mut self, messages: impl Into<Messages>) {
        self.config.error_messages = messages.into();
        self.watch_has_error();
    }

    pub fn set_success_messages(&mut self, messages: impl Into<Messages>) {
        self.config.success_messages = messages.into();
    }

    pub fn set_messages(&mut self, messages: impl Into<Messages>) {
        self.config.messages = messages.into();
    }

    pub fn set_error_count(&mut self, count: usize) {
        self.config.error_count.0 = count;
    }

    pub fn set_validate_on_blur(&mut self, validate_on_blur: bool) {
        self.config.validate_on_blur = validate_on_blur;
    }

    /// Emit `UpdateError` when `has_error()` changed since the last check
    /// and errors are visible.
    fn watch_has_error(&mut self) {
        let has_error = self.has_error();
        if has_error == self.last_has_error {
            return;
        }
        self.last_has_error = has_error;

        if self.flags.should_validate {
            self.emit(FieldEvent::UpdateError(has_error));
        }
    }

    // ------------------------------------------------------------------
    // Reset
    // ------------------------------------------------------------------

    /// Ask the host to clear the value, then hide errors once the host has
    /// applied it. Call [`settle`](Self::settle) after the host's update.
    pub fn reset(&mut self) {
        debug!("field {}: reset requested", self.label());
        self.emit(FieldEvent::Input(Value::cleared(self.is_multiple)));
        self.emit(FieldEvent::Change(Value::Null));
        self.deferred.push_back(Deferred::ResetValidation);
    }

    /// Run deferred work queued during the last update cycle, oldest first.
    pub fn settle(&mut self) {
        while let Some(task) = self.deferred.pop_front() {
            trace!("field {}: running {:?}", self.label(), task);
            match task {
                Deferred::ResetValidation => {
                    self.flags.should_validate = false;
                    self.flags.has_focused = false;
                    self.validate(false);
                }
            }
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.deferred.is_empty()
    }

    // ------------------------------------------------------------------
    // Events and accessors
    // ------------------------------------------------------------------

    fn emit(&mut self, event: FieldEvent) {
        debug!("field {}: emit {}", self.label(), event.name());
        self.events.push(event);
    }

    /// Drain queued events in emission order.
    pub fn take_events(&mut self) -> Vec<FieldEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[FieldEvent] {
        &self.events
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn flags(&self) -> ValidationFlags {
        self.flags
    }

    pub fn valid(&self) -> bool {
        self.flags.valid
    }

    pub fn should_validate(&self) -> bool {
        self.flags.should_validate
    }

    pub fn error_bucket(&self) -> &[ErrorMessage] {
        &self.error_bucket
    }

    pub fn input_value(&self) -> &Value {
        &self.input_value
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn is_multiple(&self) -> bool {
        self.is_multiple
    }

    fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.id.to_string(),
        }
    }
}

impl fmt::Debug for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationState")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("flags", &self.flags)
            .field("error_bucket", &self.error_bucket)
            .field("input_value", &self.input_value)
            .field("is_focused", &self.is_focused)
            .finish_non_exhaustive()
    }
}

/// Builder for a [`ValidationState`].
///
/// ```ignore
/// let field = ValidationState::builder(FieldConfig::new().rule(Rule::required("Required")))
///     .name("email")
///     .value("someone@example.com")
///     .build();
/// ```
pub struct ValidationStateBuilder {
    config: FieldConfig,
    name: Option<String>,
    value: Value,
    multiple: bool,
    color: Box<dyn ColorProvider>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl ValidationStateBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Initial value, validated during `build`.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn color(mut self, color: impl ColorProvider + 'static) -> Self {
        self.color = Box::new(color);
        self
    }

    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Create the field and run the first validation pass.
    pub fn build(self) -> ValidationState {
        let should_validate = self.config.error;
        let mut state = ValidationState {
            id: FieldId::new(),
            name: self.name,
            config: self.config,
            flags: ValidationFlags {
                should_validate,
                ..Default::default()
            },
            error_bucket: Vec::new(),
            input_value: self.value,
            is_focused: false,
            is_multiple: self.multiple,
            color: self.color,
            diagnostics: self.diagnostics,
            events: Vec::new(),
            deferred: VecDeque::new(),
            last_has_error: false,
        };

        let value = state.input_value.clone();
        state.run_rules(&value);
        state.last_has_error = state.has_error();
        debug!("field {}: initialized, valid = {}", state.label(), state.flags.valid);
        state
    }
}
