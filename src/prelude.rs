//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! crate, so a form screen can get going with a single `use`.
//!
//! # Example
//!
//! ```rust,no_run
//! use oinstec_forms::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let template = FormTemplate::from_file("templates/revision-cilindro.json")?;
//! let answers = AnswerMap::from_file("answers/inspeccion-0042.json")?;
//!
//! for field in visible_fields(&template, &answers) {
//!     println!("{}", field.label);
//! }
//! # Ok(())
//! # }
//! ```

// Evaluation
pub use crate::evaluator::{
    Evaluator, EvaluatorOptions, UnknownOperatorPolicy, is_visible, visible_fields,
};
pub use crate::session::{FormSession, SubscriptionId, VisibilityChange};

// Template model
pub use crate::answers::AnswerMap;
pub use crate::template::{
    Condition, FieldDefinition, FieldType, FormTemplate, LogicalOperator, Operator,
    ValidationRules, VisibilityRule, lint,
};
pub use crate::value::{Attachment, Value};

// Errors
pub use crate::error::{LoadError, SessionError, TemplateError};

// Traces, validation and rendering
pub use crate::render::{Widget, render_text};
pub use crate::trace::{ConditionTrace, TraceFormatter, VisibilityTrace};
pub use crate::validate::{IssueKind, ValidationIssue, validate_answers};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
