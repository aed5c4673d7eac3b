//! Tests for visibility evaluation over whole templates.
mod common;
use common::*;
use oinstec_forms::prelude::*;
use serde_json::json;

#[test]
fn test_dependent_field_follows_controlling_answer() {
    let template = create_yes_no_template();

    assert_eq!(ids(&visible_fields(&template, &answers(json!({})))), ["f1"]);
    assert_eq!(
        ids(&visible_fields(&template, &answers(json!({"f1": "yes"})))),
        ["f1", "f2"]
    );
    assert_eq!(ids(&visible_fields(&template, &answers(json!({"f1": "no"})))), ["f1"]);
}

#[test]
fn test_or_rule_needs_one_condition() {
    let f3 = FieldDefinition::new("f3", FieldType::Text, 3).with_rule(VisibilityRule::any(vec![
        Condition::new("f1", Operator::Equals, "a"),
        Condition::new("f2", Operator::Equals, "b"),
    ]));

    assert!(is_visible(&f3, &answers(json!({"f1": "a", "f2": "x"}))));
    assert!(!is_visible(&f3, &answers(json!({"f1": "z", "f2": "x"}))));
}

#[test]
fn test_is_empty_on_checkbox_answers() {
    let f4 = FieldDefinition::new("f4", FieldType::Text, 4).with_rule(VisibilityRule::all(vec![
        Condition::new("f5", Operator::IsEmpty, Value::Null),
    ]));

    assert!(is_visible(&f4, &answers(json!({}))));
    assert!(is_visible(&f4, &answers(json!({"f5": []}))));
    assert!(!is_visible(&f4, &answers(json!({"f5": ["x"]}))));
}

#[test]
fn test_greater_than_on_non_numeric_answer_is_never_true() {
    let field = FieldDefinition::new("g", FieldType::Text, 0).with_rule(VisibilityRule::all(vec![
        Condition::new("n", Operator::GreaterThan, 10.0),
    ]));
    for literal in [json!(-1e300), json!(0), json!("abc"), json!(null)] {
        let mut rule_field = field.clone();
        rule_field.visibility_rule.as_mut().unwrap().conditions[0].value =
            serde_json::from_value(literal).unwrap();
        assert!(!is_visible(&rule_field, &answers(json!({"n": "abc"}))));
    }
}

#[test]
fn test_cylinder_form_progression() {
    let template = create_cylinder_template();

    let empty = visible_fields(&template, &AnswerMap::new());
    assert_eq!(ids(&empty), ["datos", "serie", "tipo", "fuga", "defectos", "fecha"]);

    let gnv = answers(json!({"tipo": "GNV", "presion_prueba": "250"}));
    assert_eq!(
        ids(&visible_fields(&template, &gnv)),
        ["datos", "serie", "tipo", "presion_prueba", "alerta_presion", "fuga", "defectos", "fecha"]
    );

    let glp = answers(json!({"tipo": "GLP", "presion_prueba": 250}));
    let glp_ids = ids(&visible_fields(&template, &glp));
    assert!(glp_ids.contains(&"presion_prueba".to_string()));
    assert!(!glp_ids.contains(&"alerta_presion".to_string()));
}

#[test]
fn test_order_ties_keep_declaration_order() {
    let template = create_cylinder_template();
    let defects = answers(json!({"defectos": ["otro"]}));

    let visible = ids(&visible_fields(&template, &defects));
    let foto = visible.iter().position(|id| id == "foto_defecto").unwrap();
    let obs = visible.iter().position(|id| id == "observaciones").unwrap();
    assert_eq!(obs, foto + 1);
}

#[test]
fn test_hidden_fields_still_drive_their_dependents() {
    // `b` reads the answer of `a` even while `a` itself is hidden.
    let template = FormTemplate::new(
        "chain",
        "Chain",
        vec![
            FieldDefinition::new("a", FieldType::Text, 1).with_rule(VisibilityRule::all(vec![
                Condition::new("gate", Operator::Equals, "open"),
            ])),
            FieldDefinition::new("b", FieldType::Text, 2).with_rule(VisibilityRule::all(vec![
                Condition::new("a", Operator::IsNotEmpty, Value::Null),
            ])),
        ],
    );
    let stale = answers(json!({"gate": "closed", "a": "left over"}));
    assert_eq!(ids(&visible_fields(&template, &stale)), ["b"]);
}

#[test]
fn test_unknown_operator_policy() {
    let field = FieldDefinition::new("x", FieldType::Text, 0).with_rule(VisibilityRule::all(vec![
        Condition::new("y", Operator::Unknown("startsWith".into()), "a"),
    ]));
    let none = AnswerMap::new();

    assert!(is_visible(&field, &none));
    let closed = Evaluator::builder()
        .unknown_operator_policy(UnknownOperatorPolicy::FailClosed)
        .build();
    assert!(!closed.is_visible(&field, &none));
}

#[test]
fn test_condition_without_field_degrades_to_true() {
    let rule: VisibilityRule = serde_json::from_value(json!({
        "conditions": [{"operator": "equals", "value": "a"}]
    }))
    .unwrap();
    let field = FieldDefinition::new("x", FieldType::Text, 0).with_rule(rule);

    assert!(is_visible(&field, &AnswerMap::new()));
}

#[test]
fn test_empty_rule_uses_vacuous_truth() {
    let and_field = FieldDefinition::new("a", FieldType::Text, 0).with_rule(VisibilityRule::all(vec![]));
    let or_field = FieldDefinition::new("o", FieldType::Text, 0).with_rule(VisibilityRule::any(vec![]));

    assert!(is_visible(&and_field, &AnswerMap::new()));
    assert!(!is_visible(&or_field, &AnswerMap::new()));
}

#[test]
fn test_explain_records_every_condition() {
    let template = create_cylinder_template();
    let field = template.field("alerta_presion").unwrap();
    let trace = Evaluator::new().explain(field, &answers(json!({"tipo": "GLP", "presion_prueba": 250})));

    assert!(!trace.outcome());
    let VisibilityTrace::Rule { conditions, .. } = &trace else {
        panic!("expected a rule trace");
    };
    assert_eq!(conditions.len(), 2);
    assert!(!conditions[0].outcome());
    assert!(conditions[1].outcome());
    assert_eq!(
        TraceFormatter::format_trace(&trace),
        "hidden: [x] $tipo (was \"GLP\") equals \"GNV\" AND $presion_prueba (was 250) greaterThan 200"
    );
}

#[test]
fn test_explain_unconditional_and_degraded() {
    let template = create_cylinder_template();
    let trace = Evaluator::new().explain(template.field("fecha").unwrap(), &AnswerMap::new());
    assert_eq!(TraceFormatter::format_trace(&trace), "visible: no visibility rule");

    let field = FieldDefinition::new("x", FieldType::Text, 0).with_rule(VisibilityRule::all(vec![
        Condition::new("y", Operator::Unknown("matches".into()), "a"),
    ]));
    let trace = Evaluator::new().explain(&field, &AnswerMap::new());
    assert_eq!(
        TraceFormatter::format_trace(&trace),
        "visible: $y <unknown operator 'matches'>"
    );
}
