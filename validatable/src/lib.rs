//! Validation state for form input fields.
//!
//! Each field owns a [`ValidationState`]: it runs the field's rules, keeps
//! the resulting error messages, and decides when they are shown (on
//! input, on first blur, or when forced). Hosts push value, focus and
//! override changes in and drain [`FieldEvent`]s out.
//!
//! # Example
//!
//! ```ignore
//! use validatable::prelude::*;
//!
//! let mut email = ValidationState::builder(
//!     FieldConfig::new()
//!         .rule(Rule::required("Email is required"))
//!         .rule(Rule::email("Please enter a valid email")),
//! )
//! .name("email")
//! .build();
//!
//! email.set_focused(true);
//! email.set_focused(false);
//! assert_eq!(email.validations(), vec![Some("Email is required".to_string())]);
//! ```

pub mod color;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod form;
pub mod messages;
pub mod result;
pub mod rule;
pub mod state;
pub mod value;

pub use error::{Result, ValidationError};
pub use state::ValidationState;

pub mod prelude {
    pub use crate::color::{Color, ColorProvider, NoColor};
    pub use crate::config::{ErrorCount, FieldConfig};
    pub use crate::diagnostics::{DiagnosticSink, LogSink, RuleContext};
    pub use crate::error::ValidationError;
    pub use crate::events::FieldEvent;
    pub use crate::form::Form;
    pub use crate::messages::Messages;
    pub use crate::result::{FieldError, ValidationResult};
    pub use crate::rule::{Rule, RuleResult};
    pub use crate::state::{
        Deferred, ErrorMessage, FieldId, ValidationFlags, ValidationState, VisualState,
    };
    pub use crate::value::Value;
}
