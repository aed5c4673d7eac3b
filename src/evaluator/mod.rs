use crate::answers::AnswerMap;
use crate::template::{Condition, FieldDefinition, FormTemplate, LogicalOperator};
use crate::trace::{ConditionTrace, DegradeReason, VisibilityTrace};
use itertools::Itertools;

mod builder;
mod operators;

pub use builder::{EvaluatorBuilder, EvaluatorOptions, UnknownOperatorPolicy};

/// Decides which fields of a template are visible for a set of answers.
///
/// An `Evaluator` holds no answer state: every call is a pure function of the
/// template (or field) and the answers passed in, so one instance can be
/// shared freely between forms and threads.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    options: EvaluatorOptions,
}

/// Outcome of a single condition before any tracing data is attached.
enum Check {
    Compared(bool),
    Degraded(DegradeReason, bool),
}

impl Check {
    fn outcome(&self) -> bool {
        match self {
            Check::Compared(b) | Check::Degraded(_, b) => *b,
        }
    }
}

impl Evaluator {
    /// An evaluator with default options (unknown operators fail open).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Whether `field` should currently be displayed.
    ///
    /// Fields without a rule are always visible. Otherwise each condition is
    /// evaluated and the results are combined with the rule's logical
    /// operator. Never fails: malformed conditions degrade to a boolean.
    pub fn is_visible(&self, field: &FieldDefinition, answers: &AnswerMap) -> bool {
        let Some(rule) = &field.visibility_rule else {
            return true;
        };
        let mut results = rule
            .conditions
            .iter()
            .map(|condition| self.check(field, condition, answers).outcome());
        let visible = match rule.logical_operator {
            LogicalOperator::And => results.all(|b| b),
            LogicalOperator::Or => results.any(|b| b),
        };
        tracing::trace!(field = %field.id, visible, "visibility evaluated");
        visible
    }

    /// The visible fields of `template`, sorted by ascending `order`.
    ///
    /// Fields sharing an `order` keep their declaration order.
    pub fn visible_fields<'t>(
        &self,
        template: &'t FormTemplate,
        answers: &AnswerMap,
    ) -> Vec<&'t FieldDefinition> {
        template
            .fields
            .iter()
            .sorted_by_key(|field| field.order)
            .filter(|field| self.is_visible(field, answers))
            .collect()
    }

    /// Ids of the visible fields, in display order.
    pub fn visible_ids(&self, template: &FormTemplate, answers: &AnswerMap) -> Vec<String> {
        self.visible_fields(template, answers)
            .into_iter()
            .map(|field| field.id.clone())
            .collect()
    }

    /// Evaluates `field` like `is_visible`, recording every condition.
    ///
    /// All conditions are evaluated; nothing is short-circuited, so the trace
    /// shows each one's outcome.
    pub fn explain(&self, field: &FieldDefinition, answers: &AnswerMap) -> VisibilityTrace {
        let Some(rule) = &field.visibility_rule else {
            return VisibilityTrace::Unconditional {
                field_id: field.id.clone(),
            };
        };
        let conditions: Vec<ConditionTrace> = rule
            .conditions
            .iter()
            .map(|condition| self.trace_condition(field, condition, answers))
            .collect();
        let outcome = match rule.logical_operator {
            LogicalOperator::And => conditions.iter().all(ConditionTrace::outcome),
            LogicalOperator::Or => conditions.iter().any(ConditionTrace::outcome),
        };
        VisibilityTrace::Rule {
            field_id: field.id.clone(),
            logical_operator: rule.logical_operator,
            conditions,
            outcome,
        }
    }

    fn check(&self, field: &FieldDefinition, condition: &Condition, answers: &AnswerMap) -> Check {
        let Some(target) = condition.target() else {
            tracing::debug!(field = %field.id, "condition without field reference treated as satisfied");
            return Check::Degraded(DegradeReason::MissingField, true);
        };
        match operators::apply(&condition.operator, answers.get(target), &condition.value) {
            Some(outcome) => Check::Compared(outcome),
            None => {
                let outcome = self.options.unknown_operator.outcome();
                tracing::debug!(
                    field = %field.id,
                    operator = %condition.operator,
                    outcome,
                    "unknown operator in visibility rule"
                );
                Check::Degraded(DegradeReason::UnknownOperator, outcome)
            }
        }
    }

    fn trace_condition(
        &self,
        field: &FieldDefinition,
        condition: &Condition,
        answers: &AnswerMap,
    ) -> ConditionTrace {
        match self.check(field, condition, answers) {
            Check::Compared(outcome) => {
                // `Compared` only arises when the condition has a target.
                let field_id = condition.target().unwrap_or_default().to_string();
                ConditionTrace::Compared {
                    answer: answers.get(&field_id).clone(),
                    field_id,
                    operator: condition.operator.clone(),
                    literal: condition.value.clone(),
                    outcome,
                }
            }
            Check::Degraded(reason, outcome) => ConditionTrace::Degraded {
                field_id: condition.field_id.clone(),
                operator: condition.operator.clone(),
                reason,
                outcome,
            },
        }
    }
}

/// `Evaluator::is_visible` with default options.
pub fn is_visible(field: &FieldDefinition, answers: &AnswerMap) -> bool {
    Evaluator::new().is_visible(field, answers)
}

/// `Evaluator::visible_fields` with default options.
pub fn visible_fields<'t>(template: &'t FormTemplate, answers: &AnswerMap) -> Vec<&'t FieldDefinition> {
    Evaluator::new().visible_fields(template, answers)
}
