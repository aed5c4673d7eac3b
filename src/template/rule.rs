use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison applied by a single condition.
///
/// Names that are not recognised survive deserialization as `Unknown` so a
/// template with a typo still loads; how they evaluate is decided by the
/// evaluator's `UnknownOperatorPolicy`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
    IsEmpty,
    IsNotEmpty,
    Unknown(String),
}

impl Operator {
    pub fn as_str(&self) -> &str {
        match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "notEquals",
            Operator::Contains => "contains",
            Operator::GreaterThan => "greaterThan",
            Operator::LessThan => "lessThan",
            Operator::IsEmpty => "isEmpty",
            Operator::IsNotEmpty => "isNotEmpty",
            Operator::Unknown(name) => name,
        }
    }

    /// Unary operators ignore the condition's literal value.
    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::IsEmpty | Operator::IsNotEmpty)
    }
}

impl From<String> for Operator {
    fn from(name: String) -> Self {
        match name.as_str() {
            "equals" => Operator::Equals,
            "notEquals" => Operator::NotEquals,
            "contains" => Operator::Contains,
            "greaterThan" => Operator::GreaterThan,
            "lessThan" => Operator::LessThan,
            "isEmpty" => Operator::IsEmpty,
            "isNotEmpty" => Operator::IsNotEmpty,
            _ => Operator::Unknown(name),
        }
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.as_str().to_string()
    }
}

impl Default for Operator {
    fn default() -> Self {
        Operator::Unknown(String::new())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the results of a rule's conditions are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperator::And => f.write_str("AND"),
            LogicalOperator::Or => f.write_str("OR"),
        }
    }
}

/// A single test against another field's current answer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_id: Option<String>,
    #[serde(default)]
    pub operator: Operator,
    #[serde(default)]
    pub value: Value,
}

impl Condition {
    pub fn new(field_id: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            field_id: Some(field_id.into()),
            operator,
            value: value.into(),
        }
    }

    /// The referenced field id, if the condition names a non-empty one.
    pub fn target(&self) -> Option<&str> {
        self.field_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Gates a field's display on a combination of conditions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityRule {
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub logical_operator: LogicalOperator,
}

impl VisibilityRule {
    /// A rule whose conditions must all hold.
    pub fn all(conditions: Vec<Condition>) -> Self {
        Self {
            conditions,
            logical_operator: LogicalOperator::And,
        }
    }

    /// A rule satisfied when any condition holds.
    pub fn any(conditions: Vec<Condition>) -> Self {
        Self {
            conditions,
            logical_operator: LogicalOperator::Or,
        }
    }
}
