use crate::template::FieldType;
use thiserror::Error;

/// Errors that can occur while loading templates or answers from disk or JSON.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {what} JSON: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Authoring problems found in a form template.
///
/// None of these stop the evaluator from running; they describe templates
/// that would show or hide fields in surprising ways.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("Field id '{0}' is declared more than once")]
    DuplicateFieldId(String),

    #[error("Field '{field_id}' of type '{field_type}' has no options to choose from")]
    MissingOptions {
        field_id: String,
        field_type: FieldType,
    },

    #[error("Visibility rule of field '{0}' has no conditions")]
    EmptyRule(String),

    #[error("Visibility rule of field '{field_id}' uses unknown operator '{operator}'")]
    UnknownOperator { field_id: String, operator: String },

    #[error("Visibility rule of field '{field_id}' has a condition without a field reference")]
    MissingConditionField { field_id: String },

    #[error("Visibility rule of field '{field_id}' references unknown field '{referenced}'")]
    DanglingReference {
        field_id: String,
        referenced: String,
    },

    #[error("Visibility rule of field '{0}' depends on its own answer")]
    SelfReference(String),

    #[error("Field '{field_id}' has an invalid validation pattern: {message}")]
    InvalidPattern { field_id: String, message: String },

    #[error("Field '{field_id}' has validation min {min} greater than max {max}")]
    InvertedRange { field_id: String, min: f64, max: f64 },
}

/// Errors raised by a `FormSession` when a caller breaks its contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Field '{0}' does not exist in template '{1}'")]
    UnknownField(String, String),

    #[error("Field '{0}' is a section header and takes no answer")]
    NotAnswerable(String),
}
