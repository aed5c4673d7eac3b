use super::rule::VisibilityRule;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of input a field collects. Drives widget selection and answer shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Number,
    Select,
    Radio,
    Checkbox,
    Date,
    File,
    SectionHeader,
    Textarea,
}

impl FieldType {
    /// Choice fields must declare `options`.
    pub fn requires_options(self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio | FieldType::Checkbox)
    }

    /// Section headers are layout only and never carry an answer.
    pub fn accepts_answer(self) -> bool {
        !matches!(self, FieldType::SectionHeader)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Select => "select",
            FieldType::Radio => "radio",
            FieldType::Checkbox => "checkbox",
            FieldType::Date => "date",
            FieldType::File => "file",
            FieldType::SectionHeader => "section-header",
            FieldType::Textarea => "textarea",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional constraints checked when answers are validated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// One input definition within a form template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_rule: Option<VisibilityRule>,
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl FieldDefinition {
    /// A field with the given id, type and order and nothing else set.
    pub fn new(id: impl Into<String>, kind: FieldType, order: i64) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            kind,
            placeholder: None,
            description: None,
            required: false,
            options: Vec::new(),
            validation: None,
            visibility_rule: None,
            order,
            section: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_options<S: Into<String>>(mut self, options: impl IntoIterator<Item = S>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rule(mut self, rule: VisibilityRule) -> Self {
        self.visibility_rule = Some(rule);
        self
    }

    pub fn with_validation(mut self, validation: ValidationRules) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Required either directly or through its validation rules.
    pub fn is_required(&self) -> bool {
        self.required
            || self
                .validation
                .as_ref()
                .and_then(|v| v.required)
                .unwrap_or(false)
    }
}
