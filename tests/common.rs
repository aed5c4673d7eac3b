//! Common test utilities for building templates and answers.
use oinstec_forms::prelude::*;
use serde_json::json;

/// Scenario A: `f2` is shown only when `f1` equals "yes".
#[allow(dead_code)]
pub fn create_yes_no_template() -> FormTemplate {
    FormTemplate::new(
        "yes-no",
        "Yes/No",
        vec![
            FieldDefinition::new("f1", FieldType::Radio, 1).with_options(["yes", "no"]),
            FieldDefinition::new("f2", FieldType::Text, 2).with_rule(VisibilityRule::all(vec![
                Condition::new("f1", Operator::Equals, "yes"),
            ])),
        ],
    )
}

/// A cylinder inspection form close to what the workshops use.
///
/// Logic:
/// - `detalle_fuga` when `fuga` equals "si"
/// - `presion_prueba` when `tipo` is "GNV" or "GLP"
/// - `alerta_presion` when `tipo` is "GNV" AND `presion_prueba` > 200
/// - `foto_defecto` when `defectos` is not empty
/// - `observaciones` when `defectos` contains "otro"
#[allow(dead_code)]
pub fn create_cylinder_template() -> FormTemplate {
    FormTemplate::from_json(
        &json!({
            "id": "revision-cilindro",
            "name": "Revision de cilindro",
            "description": "Inspeccion periodica de cilindros de gas vehicular",
            "version": "3",
            "active": true,
            "fields": [
                {"id": "datos", "type": "section-header", "label": "Datos del cilindro", "order": 0},
                {"id": "serie", "type": "text", "label": "Numero de serie", "required": true, "order": 1,
                 "validation": {"pattern": "[A-Z]{2}-[0-9]{4}", "message": "Formato AA-0000"}},
                {"id": "tipo", "type": "select", "label": "Tipo", "required": true, "order": 2,
                 "options": ["GNV", "GLP", "Otro"]},
                {"id": "presion_prueba", "type": "number", "label": "Presion de prueba", "order": 3,
                 "required": true, "validation": {"min": 0, "max": 300},
                 "visibilityRule": {"logicalOperator": "OR", "conditions": [
                    {"fieldId": "tipo", "operator": "equals", "value": "GNV"},
                    {"fieldId": "tipo", "operator": "equals", "value": "GLP"}
                 ]}},
                {"id": "alerta_presion", "type": "textarea", "label": "Motivo de sobrepresion", "order": 4,
                 "visibilityRule": {"conditions": [
                    {"fieldId": "tipo", "operator": "equals", "value": "GNV"},
                    {"fieldId": "presion_prueba", "operator": "greaterThan", "value": 200}
                 ]}},
                {"id": "fuga", "type": "radio", "label": "Presenta fuga", "order": 5,
                 "options": ["si", "no"]},
                {"id": "detalle_fuga", "type": "textarea", "label": "Detalle de la fuga", "order": 6,
                 "required": true,
                 "visibilityRule": {"conditions": [
                    {"fieldId": "fuga", "operator": "equals", "value": "si"}
                 ]}},
                {"id": "defectos", "type": "checkbox", "label": "Defectos", "order": 7,
                 "options": ["corrosion", "abolladura", "otro"]},
                {"id": "foto_defecto", "type": "file", "label": "Foto del defecto", "order": 8,
                 "visibilityRule": {"conditions": [
                    {"fieldId": "defectos", "operator": "isNotEmpty"}
                 ]}},
                {"id": "observaciones", "type": "textarea", "label": "Observaciones", "order": 8,
                 "visibilityRule": {"conditions": [
                    {"fieldId": "defectos", "operator": "contains", "value": "otro"}
                 ]}},
                {"id": "fecha", "type": "date", "label": "Fecha de inspeccion", "order": 9}
            ]
        })
        .to_string(),
    )
    .unwrap()
}

/// Builds answers from a JSON object literal.
#[allow(dead_code)]
pub fn answers(value: serde_json::Value) -> AnswerMap {
    AnswerMap::from_value(value).unwrap()
}

/// The ids of `fields`, in order.
#[allow(dead_code)]
pub fn ids(fields: &[&FieldDefinition]) -> Vec<String> {
    fields.iter().map(|f| f.id.clone()).collect()
}
