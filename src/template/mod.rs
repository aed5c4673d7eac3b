pub mod field;
pub mod lint;
pub mod rule;

pub use field::*;
pub use lint::lint;
pub use rule::*;

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_active() -> bool {
    true
}

/// A versioned collection of field definitions describing one form type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    pub fields: Vec<FieldDefinition>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl FormTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            version: "1".to_string(),
            fields,
            active: true,
        }
    }

    /// Parse a template from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|source| LoadError::Json {
            what: "template",
            source,
        })
    }

    /// Load a template from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Load a template and log every authoring problem `lint` finds.
    pub fn from_file_checked(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let template = Self::from_file(path)?;
        for problem in lint(&template) {
            tracing::warn!(template = %template.id, "{}", problem);
        }
        Ok(template)
    }

    /// Look up a field by id.
    pub fn field(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn contains_field(&self, id: &str) -> bool {
        self.field(id).is_some()
    }
}
