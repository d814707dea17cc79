use rand::Rng;
use tracing::debug;

use crate::answers::AnswerMap;
use crate::error::{InteractionFailure, SurveyError, ValidationError};
use crate::form::{FieldDescriptor, Form, assemble_form};
use crate::registry::FunctionRegistry;
use crate::resolve::join_selection;
use crate::spec::Question;

/// Where a driven form stands after the last event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    NeedInput,
    Complete,
    Cancelled,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::NeedInput => "need_input",
            FormStatus::Complete => "complete",
            FormStatus::Cancelled => "cancelled",
        }
    }
}

/// Steps through an assembled form one field at a time.
///
/// The caller pulls [`current_field`](Self::current_field), shows it, and
/// feeds the reply back through [`submit`](Self::submit),
/// [`submit_selection`](Self::submit_selection) or [`cancel`](Self::cancel).
/// A rejected submission leaves the same field current.
#[derive(Debug, Clone)]
pub struct FormDriver {
    form: Form,
    cursor: usize,
    cancelled: bool,
}

impl FormDriver {
    pub fn new<R: Rng + ?Sized>(
        questions: &[Question],
        registry: &FunctionRegistry,
        rng: &mut R,
    ) -> Result<Self, SurveyError> {
        Ok(Self::from_form(assemble_form(questions, registry, rng)?))
    }

    pub fn from_form(form: Form) -> Self {
        Self {
            form,
            cursor: 0,
            cancelled: false,
        }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.form.fields
    }

    pub fn current_field(&self) -> Option<&FieldDescriptor> {
        if self.cancelled {
            return None;
        }
        self.form.fields.get(self.cursor)
    }

    /// Live value bound to the current field.
    pub fn current_value(&self) -> Option<&str> {
        self.current_field()
            .map(|_| self.form.state.get(self.cursor))
    }

    pub fn status(&self) -> FormStatus {
        if self.cancelled {
            FormStatus::Cancelled
        } else if self.cursor >= self.form.fields.len() {
            FormStatus::Complete
        } else {
            FormStatus::NeedInput
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == FormStatus::Complete
    }

    /// `(answered, total)` field counts.
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor, self.form.fields.len())
    }

    pub fn submit(&mut self, value: impl Into<String>) -> Result<FormStatus, ValidationError> {
        let value = value.into();
        let Some(field) = self.current_field() else {
            return Ok(self.status());
        };
        field.validate(&value)?;
        Ok(self.accept(value))
    }

    pub fn submit_selection(&mut self, selection: Vec<String>) -> Result<FormStatus, ValidationError> {
        let Some(field) = self.current_field() else {
            return Ok(self.status());
        };
        field.validate_selection(&selection)?;
        Ok(self.accept(join_selection(&selection)))
    }

    pub fn cancel(&mut self) {
        debug!(answered = self.cursor, "form cancelled");
        self.cancelled = true;
    }

    fn accept(&mut self, value: String) -> FormStatus {
        if let Some(field) = self.form.fields.get(self.cursor) {
            debug!(field = %field.name, "field answered");
        }
        self.form.state.set(self.cursor, value);
        self.cursor += 1;
        self.status()
    }

    /// Answers collected so far, with unanswered fields at their resolved defaults.
    pub fn partial_answers(&self) -> AnswerMap {
        self.form.state.to_answers(&self.form.questions)
    }

    pub fn finish(self) -> Result<AnswerMap, SurveyError> {
        match self.status() {
            FormStatus::Complete => Ok(self.form.state.to_answers(&self.form.questions)),
            FormStatus::Cancelled => Err(InteractionFailure::Cancelled.into()),
            FormStatus::NeedInput => Err(SurveyError::Incomplete(
                self.form.fields.len() - self.cursor,
            )),
        }
    }
}
