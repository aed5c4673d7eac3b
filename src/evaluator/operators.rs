use crate::template::Operator;
use crate::value::Value;

/// Applies a known operator to an answer and the condition's literal.
///
/// Returns `None` only for `Operator::Unknown`; every other combination of
/// inputs yields a definite boolean.
pub(crate) fn apply(op: &Operator, answer: &Value, literal: &Value) -> Option<bool> {
    let outcome = match op {
        Operator::Equals => answer.strict_eq(literal),
        Operator::NotEquals => !answer.strict_eq(literal),
        Operator::Contains => contains(answer, literal),
        // NaN on either side makes both comparisons false.
        Operator::GreaterThan => answer.to_number() > literal.to_number(),
        Operator::LessThan => answer.to_number() < literal.to_number(),
        Operator::IsEmpty => answer.is_empty(),
        Operator::IsNotEmpty => !answer.is_empty(),
        Operator::Unknown(_) => return None,
    };
    Some(outcome)
}

fn contains(answer: &Value, literal: &Value) -> bool {
    match answer {
        Value::Text(text) => text.contains(literal.to_text().as_str()),
        Value::List(items) => items.iter().any(|item| item.same_value_zero(literal)),
        _ => false,
    }
}
