//! Notifications emitted by a field.

use crate::value::Value;

/// An event queued for the host. Fire-and-forget.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// The displayed error state changed.
    UpdateError(bool),
    /// The host should replace its bound value.
    Input(Value),
    /// The bound value was committed.
    Change(Value),
}

impl FieldEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UpdateError(_) => "update:error",
            Self::Input(_) => "input",
            Self::Change(_) => "change",
        }
    }
}
