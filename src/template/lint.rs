use super::{FormTemplate, Operator};
use crate::error::TemplateError;
use ahash::AHashSet;
use regex::Regex;

/// Checks a template for authoring mistakes.
///
/// Returns every problem found, in field declaration order. An empty list
/// means the template is well formed.
pub fn lint(template: &FormTemplate) -> Vec<TemplateError> {
    let mut problems = Vec::new();
    let mut seen = AHashSet::new();
    let ids: AHashSet<&str> = template.fields.iter().map(|f| f.id.as_str()).collect();

    for field in &template.fields {
        if !seen.insert(field.id.as_str()) {
            problems.push(TemplateError::DuplicateFieldId(field.id.clone()));
        }

        if field.kind.requires_options() && field.options.is_empty() {
            problems.push(TemplateError::MissingOptions {
                field_id: field.id.clone(),
                field_type: field.kind,
            });
        }

        if let Some(validation) = &field.validation {
            if let Some(pattern) = &validation.pattern {
                if let Err(e) = Regex::new(pattern) {
                    problems.push(TemplateError::InvalidPattern {
                        field_id: field.id.clone(),
                        message: e.to_string(),
                    });
                }
            }
            if let (Some(min), Some(max)) = (validation.min, validation.max) {
                if min > max {
                    problems.push(TemplateError::InvertedRange {
                        field_id: field.id.clone(),
                        min,
                        max,
                    });
                }
            }
        }

        let Some(rule) = &field.visibility_rule else {
            continue;
        };
        if rule.conditions.is_empty() {
            problems.push(TemplateError::EmptyRule(field.id.clone()));
        }
        for condition in &rule.conditions {
            if let Operator::Unknown(name) = &condition.operator {
                problems.push(TemplateError::UnknownOperator {
                    field_id: field.id.clone(),
                    operator: name.clone(),
                });
            }
            match condition.target() {
                None => problems.push(TemplateError::MissingConditionField {
                    field_id: field.id.clone(),
                }),
                Some(target) if target == field.id => {
                    problems.push(TemplateError::SelfReference(field.id.clone()))
                }
                Some(target) if !ids.contains(target) => {
                    problems.push(TemplateError::DanglingReference {
                        field_id: field.id.clone(),
                        referenced: target.to_string(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    problems
}
