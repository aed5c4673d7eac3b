use super::{ConditionTrace, DegradeReason, VisibilityTrace};
use crate::template::Operator;

/// Formats visibility traces into human-readable explanations.
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format a visibility trace, e.g.
    /// `visible: $tipo (was "GNV") equals "GNV" AND $presion (was 250) greaterThan 200`.
    pub fn format_trace(trace: &VisibilityTrace) -> String {
        let verdict = if trace.outcome() { "visible" } else { "hidden" };
        match trace {
            VisibilityTrace::Unconditional { .. } => format!("{}: no visibility rule", verdict),
            VisibilityTrace::Rule {
                logical_operator,
                conditions,
                ..
            } => {
                if conditions.is_empty() {
                    return format!("{}: rule has no conditions", verdict);
                }
                let joiner = format!(" {} ", logical_operator);
                let body = conditions
                    .iter()
                    .map(Self::format_condition)
                    .collect::<Vec<_>>()
                    .join(&joiner);
                format!("{}: {}", verdict, body)
            }
        }
    }

    /// Format a single condition. Failed conditions are marked with `[x]`.
    pub fn format_condition(trace: &ConditionTrace) -> String {
        let text = match trace {
            ConditionTrace::Compared {
                field_id,
                operator,
                answer,
                literal,
                ..
            } => {
                if operator.is_unary() {
                    format!("${} (was {}) {}", field_id, answer, operator)
                } else {
                    format!("${} (was {}) {} {}", field_id, answer, operator, literal)
                }
            }
            ConditionTrace::Degraded {
                field_id,
                operator,
                reason,
                ..
            } => {
                let target = field_id.as_deref().unwrap_or("?");
                match reason {
                    DegradeReason::MissingField => {
                        format!("<condition without field> {}", Self::operator_name(operator))
                    }
                    DegradeReason::UnknownOperator => {
                        format!("${} <unknown operator '{}'>", target, operator)
                    }
                }
            }
        };
        if trace.outcome() {
            text
        } else {
            format!("[x] {}", text)
        }
    }

    fn operator_name(operator: &Operator) -> &str {
        match operator.as_str() {
            "" => "<no operator>",
            name => name,
        }
    }
}
