use std::path::PathBuf;

use thiserror::Error;

/// Structural problems with a question set, detected before any resolution.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read question file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid question document: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("key '{0}' not found in question document")]
    KeyNotFound(String),
    #[error("question document must be a list of questions or a map of named lists")]
    UnexpectedShape,
    #[error("question #{index} has an empty prompt")]
    EmptyPrompt { index: usize },
    #[error("question #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("question '{name}' is a {kind} question without options")]
    MissingOptions { name: String, kind: &'static str },
}

/// A submitted value rejected by a field; the field stays open for another attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input too short, minimum length is {min}")]
    TooShort { min: usize, actual: usize },
    #[error("input too long, maximum length is {max}")]
    TooLong { max: usize, actual: usize },
    #[error("'{0}' is not one of the available options")]
    UnknownOption(String),
    #[error("expected a single choice, got {0}")]
    NotSingleChoice(usize),
}

/// Terminal signal reported by a front end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionFailure {
    #[error("interaction cancelled")]
    Cancelled,
    #[error("frontend failure: {0}")]
    Failed(String),
}

/// Errors that abort a resolution pass.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("default function '{0}' not found")]
    FunctionNotFound(String),
    #[error(transparent)]
    Interaction(#[from] InteractionFailure),
    #[error("form finished with {0} unanswered field(s)")]
    Incomplete(usize),
}

impl SurveyError {
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            SurveyError::Interaction(InteractionFailure::Cancelled)
        )
    }
}
