use rand::Rng;

use crate::answers::{AnswerMap, ResolutionState, TypedValue};
use crate::coerce::coerce;
use crate::error::{SurveyError, ValidationError};
use crate::registry::FunctionRegistry;
use crate::resolve::{resolve_default, split_selection};
use crate::spec::{Question, QuestionKind};
use crate::validate::check_length;

/// Widget shape of a field, derived from the question kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, bounded by inclusive lengths (`0` = unbounded).
    Input { min_length: usize, max_length: usize },
    Select { options: Vec<String> },
    MultiSelect { options: Vec<String> },
}

/// Front-end-facing description of one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub title: String,
    pub kind: FieldKind,
    /// Value bound to the field when it is shown.
    pub default: String,
}

impl FieldDescriptor {
    fn for_question(question: &Question, default: String) -> Self {
        let kind = match question.kind {
            QuestionKind::Ask | QuestionKind::Function => FieldKind::Input {
                min_length: question.min_length,
                max_length: question.max_length,
            },
            QuestionKind::Select => FieldKind::Select {
                options: question.options.clone(),
            },
            QuestionKind::List => FieldKind::MultiSelect {
                options: question.options.clone(),
            },
        };
        Self {
            name: question.name.clone(),
            title: question.prompt.clone(),
            kind,
            default,
        }
    }

    pub fn options(&self) -> &[String] {
        match &self.kind {
            FieldKind::Select { options } | FieldKind::MultiSelect { options } => options,
            FieldKind::Input { .. } => &[],
        }
    }

    /// Initial selection for a multi-select, split from the bound default.
    pub fn default_selection(&self) -> Vec<String> {
        split_selection(&self.default)
    }

    /// Validates a single submitted value.
    pub fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match &self.kind {
            FieldKind::Input {
                min_length,
                max_length,
            } => check_length(input, *min_length, *max_length),
            FieldKind::Select { options } => {
                if options.iter().any(|option| option == input) {
                    Ok(())
                } else {
                    Err(ValidationError::UnknownOption(input.to_string()))
                }
            }
            FieldKind::MultiSelect { .. } => self.validate_selection(&split_selection(input)),
        }
    }

    /// Validates a multi-value submission.
    pub fn validate_selection(&self, selection: &[String]) -> Result<(), ValidationError> {
        match &self.kind {
            FieldKind::MultiSelect { options } => {
                match selection.iter().find(|item| !options.contains(item)) {
                    Some(unknown) => Err(ValidationError::UnknownOption(unknown.clone())),
                    None => Ok(()),
                }
            }
            _ if selection.len() == 1 => self.validate(&selection[0]),
            _ => Err(ValidationError::NotSingleChoice(selection.len())),
        }
    }
}

/// Assembled interactive form: ordered fields plus the working values they bind to.
#[derive(Debug, Clone)]
pub struct Form {
    pub questions: Vec<Question>,
    pub fields: Vec<FieldDescriptor>,
    pub state: ResolutionState,
}

impl Form {
    /// Answers as they stand before any live input.
    ///
    /// Free-text fields still waiting for input hold an empty string placeholder.
    pub fn initial_answers(&self) -> AnswerMap {
        let mut answers = AnswerMap::new();
        for (index, question) in self.questions.iter().enumerate() {
            let value = self.state.get(index);
            let typed = if question.kind == QuestionKind::Ask && value.is_empty() {
                TypedValue::String(String::new())
            } else {
                coerce(value, question.value_type)
            };
            answers.insert(question.name.clone(), typed);
        }
        answers
    }

    /// Names of fields that have no value yet.
    pub fn placeholders(&self) -> Vec<&str> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(index, _)| self.state.is_empty_at(*index))
            .map(|(_, field)| field.name.as_str())
            .collect()
    }
}

/// Builds one field per question, resolving defaults on the way.
///
/// All-or-nothing: a missing default function aborts the whole form.
pub fn assemble_form<R: Rng + ?Sized>(
    questions: &[Question],
    registry: &FunctionRegistry,
    rng: &mut R,
) -> Result<Form, SurveyError> {
    let mut state = ResolutionState::seeded(questions);
    let mut fields = Vec::with_capacity(questions.len());

    for (index, question) in questions.iter().enumerate() {
        let default = resolve_default(index, question, &mut state, registry, rng)?;
        fields.push(FieldDescriptor::for_question(question, default));
    }

    Ok(Form {
        questions: questions.to_vec(),
        fields,
        state,
    })
}
