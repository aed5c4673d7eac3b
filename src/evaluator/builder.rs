use super::Evaluator;

/// What an unrecognised operator evaluates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownOperatorPolicy {
    /// The condition counts as satisfied.
    #[default]
    FailOpen,
    /// The condition counts as unsatisfied.
    FailClosed,
}

impl UnknownOperatorPolicy {
    pub(crate) fn outcome(self) -> bool {
        matches!(self, UnknownOperatorPolicy::FailOpen)
    }
}

/// Options shared by every evaluation an `Evaluator` performs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluatorOptions {
    pub unknown_operator: UnknownOperatorPolicy,
}

pub struct EvaluatorBuilder {
    options: EvaluatorOptions,
}

impl EvaluatorBuilder {
    pub fn new() -> Self {
        Self {
            options: EvaluatorOptions::default(),
        }
    }

    pub fn unknown_operator_policy(mut self, policy: UnknownOperatorPolicy) -> Self {
        self.options.unknown_operator = policy;
        self
    }

    pub fn build(self) -> Evaluator {
        Evaluator {
            options: self.options,
        }
    }
}

impl Default for EvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
