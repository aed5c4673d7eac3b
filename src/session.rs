use crate::answers::AnswerMap;
use crate::error::SessionError;
use crate::evaluator::Evaluator;
use crate::template::{FieldDefinition, FormTemplate};
use crate::value::Value;
use std::fmt;

/// Emitted to subscribers after every answer update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityChange {
    /// The field whose answer changed.
    pub field_id: String,
    /// Fields that became visible, in display order.
    pub shown: Vec<String>,
    /// Fields that became hidden, in their previous display order.
    pub hidden: Vec<String>,
}

impl VisibilityChange {
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty() && self.hidden.is_empty()
    }
}

/// Handle returned by `FormSession::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn FnMut(&VisibilityChange)>;

/// One form being filled in: the template, its answer buffer and the
/// visible-field list derived from them.
///
/// The visible list is recomputed synchronously on every update, so readers
/// never observe a stale list.
pub struct FormSession {
    template: FormTemplate,
    answers: AnswerMap,
    evaluator: Evaluator,
    visible: Vec<String>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: usize,
}

impl FormSession {
    /// Start an empty session for `template`.
    pub fn new(template: FormTemplate) -> Self {
        Self::with_answers(template, AnswerMap::new())
    }

    /// Resume a session from previously saved answers.
    pub fn with_answers(template: FormTemplate, answers: AnswerMap) -> Self {
        Self::with_evaluator(template, answers, Evaluator::new())
    }

    pub fn with_evaluator(template: FormTemplate, answers: AnswerMap, evaluator: Evaluator) -> Self {
        let visible = evaluator.visible_ids(&template, &answers);
        Self {
            template,
            answers,
            evaluator,
            visible,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn template(&self) -> &FormTemplate {
        &self.template
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// Consume the session, handing back the answers for persistence.
    pub fn into_answers(self) -> AnswerMap {
        self.answers
    }

    /// Ids of the currently visible fields, in display order.
    pub fn visible_ids(&self) -> &[String] {
        &self.visible
    }

    /// The currently visible fields, in display order.
    pub fn visible_fields(&self) -> Vec<&FieldDefinition> {
        self.visible
            .iter()
            .filter_map(|id| self.template.field(id))
            .collect()
    }

    pub fn is_visible(&self, field_id: &str) -> bool {
        self.visible.iter().any(|id| id == field_id)
    }

    /// Register a callback run after every answer update.
    pub fn subscribe(&mut self, listener: impl FnMut(&VisibilityChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Record the answer for `field_id` and re-evaluate visibility.
    ///
    /// Answers of fields that become hidden are kept, so toggling a
    /// controlling answer back restores what the user typed.
    pub fn set_answer(
        &mut self,
        field_id: &str,
        value: impl Into<Value>,
    ) -> Result<VisibilityChange, SessionError> {
        self.ensure_answerable(field_id)?;
        self.answers.set(field_id, value);
        Ok(self.refresh(field_id))
    }

    /// Remove the answer for `field_id` and re-evaluate visibility.
    pub fn clear_answer(&mut self, field_id: &str) -> Result<VisibilityChange, SessionError> {
        self.ensure_answerable(field_id)?;
        self.answers.remove(field_id);
        Ok(self.refresh(field_id))
    }

    fn ensure_answerable(&self, field_id: &str) -> Result<(), SessionError> {
        let field = self.template.field(field_id).ok_or_else(|| {
            SessionError::UnknownField(field_id.to_string(), self.template.id.clone())
        })?;
        if !field.kind.accepts_answer() {
            return Err(SessionError::NotAnswerable(field_id.to_string()));
        }
        Ok(())
    }

    fn refresh(&mut self, field_id: &str) -> VisibilityChange {
        let visible = self.evaluator.visible_ids(&self.template, &self.answers);
        let shown = visible
            .iter()
            .filter(|id| !self.visible.contains(id))
            .cloned()
            .collect();
        let hidden = self
            .visible
            .iter()
            .filter(|id| !visible.contains(id))
            .cloned()
            .collect();
        self.visible = visible;

        let change = VisibilityChange {
            field_id: field_id.to_string(),
            shown,
            hidden,
        };
        tracing::debug!(
            template = %self.template.id,
            field = %field_id,
            shown = ?change.shown,
            hidden = ?change.hidden,
            "answer updated"
        );
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
        change
    }
}

impl fmt::Debug for FormSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormSession")
            .field("template", &self.template.id)
            .field("answers", &self.answers)
            .field("visible", &self.visible)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
