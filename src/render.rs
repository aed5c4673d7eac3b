//! Plain-text rendering of a form's visible fields.
//!
//! Each field is mapped once to a [`Widget`] by its type tag; the widget then
//! knows how to present the field's current answer.

use crate::answers::AnswerMap;
use crate::evaluator::Evaluator;
use crate::template::{FieldDefinition, FieldType, FormTemplate};
use crate::value::Value;

/// How a choice field lets the user pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMode {
    Dropdown,
    Single,
    Multiple,
}

/// Presentation strategy for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Widget<'f> {
    Heading(&'f FieldDefinition),
    TextInput { field: &'f FieldDefinition, multiline: bool },
    NumberInput(&'f FieldDefinition),
    DateInput(&'f FieldDefinition),
    Choice { field: &'f FieldDefinition, mode: ChoiceMode },
    FileUpload(&'f FieldDefinition),
}

impl<'f> Widget<'f> {
    pub fn for_field(field: &'f FieldDefinition) -> Self {
        match field.kind {
            FieldType::SectionHeader => Widget::Heading(field),
            FieldType::Text => Widget::TextInput { field, multiline: false },
            FieldType::Textarea => Widget::TextInput { field, multiline: true },
            FieldType::Number => Widget::NumberInput(field),
            FieldType::Date => Widget::DateInput(field),
            FieldType::Select => Widget::Choice { field, mode: ChoiceMode::Dropdown },
            FieldType::Radio => Widget::Choice { field, mode: ChoiceMode::Single },
            FieldType::Checkbox => Widget::Choice { field, mode: ChoiceMode::Multiple },
            FieldType::File => Widget::FileUpload(field),
        }
    }

    pub fn field(&self) -> &'f FieldDefinition {
        match *self {
            Widget::Heading(field)
            | Widget::NumberInput(field)
            | Widget::DateInput(field)
            | Widget::FileUpload(field)
            | Widget::TextInput { field, .. }
            | Widget::Choice { field, .. } => field,
        }
    }

    /// Render the field with its current answer as a single line.
    pub fn render(&self, answer: &Value) -> String {
        let field = self.field();
        if let Widget::Heading(_) = self {
            return format!("## {}", field.label);
        }
        let marker = if field.is_required() { "*" } else { "" };
        let body = match self {
            Widget::TextInput { multiline, .. } => {
                let text = filled_or_placeholder(field, answer);
                if *multiline {
                    text.replace('\n', " / ")
                } else {
                    text
                }
            }
            Widget::NumberInput(_) | Widget::DateInput(_) => filled_or_placeholder(field, answer),
            Widget::Choice { mode, .. } => render_choices(field, *mode, answer),
            Widget::FileUpload(_) => match answer {
                Value::File(file) => format!("<{} ({} bytes)>", file.name, file.size_bytes),
                _ => "<no file>".to_string(),
            },
            Widget::Heading(_) => String::new(),
        };
        format!("{}{}: {}", field.label, marker, body)
    }
}

fn filled_or_placeholder(field: &FieldDefinition, answer: &Value) -> String {
    if answer.is_empty() {
        format!("<{}>", field.placeholder.as_deref().unwrap_or(""))
    } else {
        answer.to_text()
    }
}

fn render_choices(field: &FieldDefinition, mode: ChoiceMode, answer: &Value) -> String {
    let picked = |option: &str| match answer {
        Value::List(items) => items.iter().any(|item| item.to_text() == option),
        Value::Null => false,
        other => other.to_text() == option,
    };
    match mode {
        ChoiceMode::Dropdown => {
            if answer.is_empty() {
                format!("[{}]", field.placeholder.as_deref().unwrap_or("select"))
            } else {
                format!("[{}]", answer.to_text())
            }
        }
        ChoiceMode::Single | ChoiceMode::Multiple => {
            let (on, off) = if mode == ChoiceMode::Single {
                ("(*)", "( )")
            } else {
                ("[x]", "[ ]")
            };
            field
                .options
                .iter()
                .map(|option| format!("{} {}", if picked(option) { on } else { off }, option))
                .collect::<Vec<_>>()
                .join("  ")
        }
    }
}

/// Render every visible field of `template`, one line per field, in order.
pub fn render_text(template: &FormTemplate, answers: &AnswerMap) -> String {
    render_with(&Evaluator::new(), template, answers)
}

pub fn render_with(evaluator: &Evaluator, template: &FormTemplate, answers: &AnswerMap) -> String {
    let mut out = format!("# {} (v{})\n", template.name, template.version);
    for field in evaluator.visible_fields(template, answers) {
        out.push_str(&Widget::for_field(field).render(answers.get(&field.id)));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_is_chosen_by_type_tag() {
        let radio = FieldDefinition::new("r", FieldType::Radio, 0);
        let area = FieldDefinition::new("t", FieldType::Textarea, 0);
        assert!(matches!(Widget::for_field(&radio), Widget::Choice { mode: ChoiceMode::Single, .. }));
        assert!(matches!(Widget::for_field(&area), Widget::TextInput { multiline: true, .. }));
    }

    #[test]
    fn checkbox_marks_selected_options() {
        let field = FieldDefinition::new("defectos", FieldType::Checkbox, 0)
            .with_label("Defectos")
            .with_options(["fuga", "corrosion"]);
        let line = Widget::for_field(&field).render(&Value::from(vec!["corrosion"]));
        assert_eq!(line, "Defectos: [ ] fuga  [x] corrosion");
    }
}
