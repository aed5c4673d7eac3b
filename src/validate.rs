use crate::answers::AnswerMap;
use crate::evaluator::Evaluator;
use crate::template::{FieldDefinition, FieldType, FormTemplate, ValidationRules};
use crate::value::{Value, format_number};
use regex::Regex;
use std::fmt;

/// What a validation issue complains about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Required,
    NotANumber,
    BelowMin,
    AboveMax,
    PatternMismatch,
    NotAnOption,
}

/// A problem with one answer, ready to show next to its field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub field_id: String,
    pub kind: IssueKind,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_id, self.message)
    }
}

/// Validates the answers of every currently visible field.
///
/// Hidden fields are skipped entirely, so a required field behind an unmet
/// rule never blocks submission.
pub fn validate_answers(template: &FormTemplate, answers: &AnswerMap) -> Vec<ValidationIssue> {
    validate_with(&Evaluator::new(), template, answers)
}

/// `validate_answers` using a specific evaluator for visibility.
pub fn validate_with(
    evaluator: &Evaluator,
    template: &FormTemplate,
    answers: &AnswerMap,
) -> Vec<ValidationIssue> {
    evaluator
        .visible_fields(template, answers)
        .into_iter()
        .filter(|field| field.kind.accepts_answer())
        .filter_map(|field| validate_field(field, answers.get(&field.id)))
        .collect()
}

/// Validates a single answer against its field definition.
pub fn validate_field(field: &FieldDefinition, answer: &Value) -> Option<ValidationIssue> {
    let rules = field.validation.clone().unwrap_or_default();
    let issue = |kind: IssueKind, default: String| ValidationIssue {
        field_id: field.id.clone(),
        kind,
        message: rules.message.clone().unwrap_or(default),
    };

    if answer.is_empty() {
        return field
            .is_required()
            .then(|| issue(IssueKind::Required, format!("{} is required", field.label)));
    }

    let pattern_issue = || match &rules.pattern {
        Some(pattern) if !matches_whole(pattern, &answer.to_text()) => Some(issue(
            IssueKind::PatternMismatch,
            format!("{} has an invalid format", field.label),
        )),
        _ => None,
    };

    match field.kind {
        FieldType::Number => {
            let n = answer.to_number();
            if n.is_nan() {
                return Some(issue(IssueKind::NotANumber, format!("{} must be a number", field.label)));
            }
            check_range(&rules, n, "")
                .map(|(kind, msg)| issue(kind, format!("{} {}", field.label, msg)))
                .or_else(pattern_issue)
        }
        FieldType::Text | FieldType::Textarea => {
            let len = answer.to_text().chars().count() as f64;
            check_range(&rules, len, " characters")
                .map(|(kind, msg)| issue(kind, format!("{} {}", field.label, msg)))
                .or_else(pattern_issue)
        }
        FieldType::Select | FieldType::Radio => {
            let choice = answer.to_text();
            (!field.options.is_empty() && !field.options.contains(&choice))
                .then(|| {
                    issue(
                        IssueKind::NotAnOption,
                        format!("{} is not an option of {}", choice, field.label),
                    )
                })
                .or_else(pattern_issue)
        }
        FieldType::Checkbox => {
            let selected = match answer {
                Value::List(items) => items.clone(),
                single => vec![single.clone()],
            };
            if let Some(bad) = selected
                .iter()
                .map(Value::to_text)
                .find(|choice| !field.options.is_empty() && !field.options.contains(choice))
            {
                return Some(issue(
                    IssueKind::NotAnOption,
                    format!("{} is not an option of {}", bad, field.label),
                ));
            }
            // Bounds on a checkbox count selections.
            check_range(&rules, selected.len() as f64, " selections")
                .map(|(kind, msg)| issue(kind, format!("{} {}", field.label, msg)))
                .or_else(pattern_issue)
        }
        FieldType::Date => pattern_issue(),
        FieldType::File | FieldType::SectionHeader => None,
    }
}

fn check_range(rules: &ValidationRules, n: f64, unit: &str) -> Option<(IssueKind, String)> {
    if let Some(min) = rules.min {
        if n < min {
            return Some((IssueKind::BelowMin, format!("must be at least {}{}", format_number(min), unit)));
        }
    }
    if let Some(max) = rules.max {
        if n > max {
            return Some((IssueKind::AboveMax, format!("must be at most {}{}", format_number(max), unit)));
        }
    }
    None
}

/// Patterns must match the whole answer. An unparsable pattern accepts
/// everything; template lint reports it.
fn matches_whole(pattern: &str, text: &str) -> bool {
    match Regex::new(&format!("^(?:{})$", pattern)) {
        Ok(re) => re.is_match(text),
        Err(e) => {
            tracing::debug!(pattern, error = %e, "skipping invalid validation pattern");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_is_anchored() {
        assert!(matches_whole("[A-Z]{3}-[0-9]{3}", "ABC-123"));
        assert!(!matches_whole("[A-Z]{3}-[0-9]{3}", "xABC-123"));
        assert!(matches_whole("(", "anything"));
    }

    #[test]
    fn range_reports_lower_bound_first() {
        let rules = ValidationRules {
            min: Some(10.0),
            max: Some(5.0),
            ..Default::default()
        };
        assert_eq!(check_range(&rules, 7.0, "").map(|(k, _)| k), Some(IssueKind::BelowMin));
    }
}
