use std::collections::BTreeSet;

use tracing::warn;

use crate::error::{SchemaError, ValidationError};
use crate::spec::Question;

/// Structural checks applied to a freshly loaded question set.
///
/// Duplicate names are allowed (the last one wins in the answer map) but logged.
pub fn validate_questions(questions: &[Question]) -> Result<(), SchemaError> {
    let mut seen = BTreeSet::new();
    for (index, question) in questions.iter().enumerate() {
        if question.prompt.trim().is_empty() {
            return Err(SchemaError::EmptyPrompt { index });
        }
        if question.name.trim().is_empty() {
            return Err(SchemaError::EmptyName { index });
        }
        if question.kind.uses_options() && question.options.is_empty() {
            return Err(SchemaError::MissingOptions {
                name: question.name.clone(),
                kind: question.kind.as_str(),
            });
        }
        if !seen.insert(question.name.as_str()) {
            warn!(name = %question.name, index, "duplicate question name; later answer wins");
        }
    }
    Ok(())
}

/// Checks free text against inclusive length bounds; `0` disables a bound.
pub fn check_length(
    input: &str,
    min_length: usize,
    max_length: usize,
) -> Result<(), ValidationError> {
    let actual = input.chars().count();
    if actual < min_length {
        return Err(ValidationError::TooShort {
            min: min_length,
            actual,
        });
    }
    if max_length > 0 && actual > max_length {
        return Err(ValidationError::TooLong {
            max: max_length,
            actual,
        });
    }
    Ok(())
}
