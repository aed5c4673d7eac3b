mod formatter;

pub use formatter::TraceFormatter;

use crate::template::{LogicalOperator, Operator};
use crate::value::Value;

/// Why a condition was not evaluated by its operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradeReason {
    /// The condition names no field.
    MissingField,
    /// The operator is not one the evaluator knows.
    UnknownOperator,
}

/// A record of how one condition of a visibility rule was evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionTrace {
    Compared {
        field_id: String,
        operator: Operator,
        answer: Value,
        literal: Value,
        outcome: bool,
    },
    Degraded {
        field_id: Option<String>,
        operator: Operator,
        reason: DegradeReason,
        outcome: bool,
    },
}

impl ConditionTrace {
    pub fn outcome(&self) -> bool {
        match self {
            ConditionTrace::Compared { outcome, .. } | ConditionTrace::Degraded { outcome, .. } => {
                *outcome
            }
        }
    }
}

/// A record of how a field's visibility was decided.
#[derive(Debug, Clone, PartialEq)]
pub enum VisibilityTrace {
    /// The field has no visibility rule.
    Unconditional { field_id: String },
    Rule {
        field_id: String,
        logical_operator: LogicalOperator,
        conditions: Vec<ConditionTrace>,
        outcome: bool,
    },
}

impl VisibilityTrace {
    pub fn field_id(&self) -> &str {
        match self {
            VisibilityTrace::Unconditional { field_id } | VisibilityTrace::Rule { field_id, .. } => {
                field_id
            }
        }
    }

    pub fn outcome(&self) -> bool {
        match self {
            VisibilityTrace::Unconditional { .. } => true,
            VisibilityTrace::Rule { outcome, .. } => *outcome,
        }
    }
}
