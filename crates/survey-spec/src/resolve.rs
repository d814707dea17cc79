use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::answers::ResolutionState;
use crate::error::SurveyError;
use crate::registry::FunctionRegistry;
use crate::spec::{Question, QuestionKind};

/// Computes the default for the question at position `index` and stores it in its slot.
///
/// - `select`/`list`: a random option when no value is present yet.
/// - `ask`: left untouched for live input or synthesis.
/// - `function`: the registered function's output, always replacing the seed.
pub fn resolve_default<R: Rng + ?Sized>(
    index: usize,
    question: &Question,
    state: &mut ResolutionState,
    registry: &FunctionRegistry,
    rng: &mut R,
) -> Result<String, SurveyError> {
    match question.kind {
        QuestionKind::Select | QuestionKind::List => {
            if state.is_empty_at(index)
                && let Some(option) = question.options.choose(rng)
            {
                debug!(question = %question.name, option = %option, "picked random option default");
                state.set(index, option.clone());
            }
        }
        QuestionKind::Ask => {}
        QuestionKind::Function => {
            if let Some(function_name) = question
                .default_function
                .as_deref()
                .filter(|name| !name.is_empty())
            {
                let value = call_default_function(function_name, question, registry)?;
                state.set(index, value);
            }
        }
    }
    Ok(state.get(index).to_string())
}

fn call_default_function(
    function_name: &str,
    question: &Question,
    registry: &FunctionRegistry,
) -> Result<String, SurveyError> {
    let function = registry
        .lookup(function_name)
        .ok_or_else(|| SurveyError::FunctionNotFound(function_name.to_string()))?;
    let value = function(&question.default_params);
    debug!(
        question = %question.name,
        function = function_name,
        "resolved default from registered function"
    );
    Ok(value)
}

/// Splits a comma-separated default into a multi-select's initial selection.
pub fn split_selection(default: &str) -> Vec<String> {
    default
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Inverse of [`split_selection`].
pub fn join_selection(selection: &[String]) -> String {
    selection.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_split_trims_and_drops_blanks() {
        assert_eq!(split_selection("a, b,,c "), vec!["a", "b", "c"]);
        assert!(split_selection("").is_empty());
    }

    #[test]
    fn selection_round_trip_keeps_order() {
        let selection = vec!["x".to_string(), "y".to_string()];
        assert_eq!(split_selection(&join_selection(&selection)), selection);
    }
}
