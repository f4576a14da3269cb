//! Reporting of rule authoring errors.
//!
//! A rule that produces neither a pass nor a failure is skipped and
//! reported here. Sinks must not panic.

use crate::state::FieldId;

/// Where a malformed rule result came from.
#[derive(Debug, Clone)]
pub struct RuleContext {
    pub field_id: FieldId,
    /// Field name, if the host gave one.
    pub field: Option<String>,
    /// Position of the rule in the rule set.
    pub rule_index: usize,
    /// Description of what the rule produced.
    pub received: String,
}

pub trait DiagnosticSink {
    fn report_invalid_rule_result(&self, message: &str, context: &RuleContext);
}

/// Default sink, writes to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report_invalid_rule_result(&self, message: &str, context: &RuleContext) {
        log::warn!(
            "{} (field {}, rule #{})",
            message,
            context.field.as_deref().unwrap_or("<unnamed>"),
            context.rule_index
        );
    }
}

pub(crate) fn invalid_rule_message(received: &str) -> String {
    format!("Rules should return a string or boolean, received '{received}' instead")
}
