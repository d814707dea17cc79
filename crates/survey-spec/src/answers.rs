use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::coerce::coerce;
use crate::spec::Question;

/// A resolved answer after type coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    String(String),
    Int(i64),
    Bool(bool),
}

impl TypedValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TypedValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::String(text) => f.write_str(text),
            TypedValue::Int(value) => write!(f, "{value}"),
            TypedValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// Final answers keyed by question name.
pub type AnswerMap = BTreeMap<String, TypedValue>;

/// Working string values for one resolution pass, one slot per question position.
///
/// Questions stay immutable; resolvers and front ends write here instead. Questions
/// that share a name keep separate slots and only collapse in [`to_answers`](Self::to_answers).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionState {
    values: Vec<String>,
}

impl ResolutionState {
    /// Seeds each slot with its question's caller-supplied default.
    pub fn seeded(questions: &[Question]) -> Self {
        Self {
            values: questions
                .iter()
                .map(|question| question.default.clone())
                .collect(),
        }
    }

    /// Value of slot `index`; empty when out of range.
    pub fn get(&self, index: usize) -> &str {
        self.values
            .get(index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Overwrites slot `index`; out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index).is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coerces every slot by name; later duplicates overwrite earlier ones.
    pub fn to_answers(&self, questions: &[Question]) -> AnswerMap {
        questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                (
                    question.name.clone(),
                    coerce(self.get(index), question.value_type),
                )
            })
            .collect()
    }
}
