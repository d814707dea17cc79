use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::answers::{AnswerMap, ResolutionState};
use crate::driver::FormDriver;
use crate::error::SurveyError;
use crate::frontend::{Frontend, Reply};
use crate::random::synthesize;
use crate::registry::FunctionRegistry;
use crate::resolve::resolve_default;
use crate::spec::{Question, QuestionKind};

/// Resolves every question without user interaction.
///
/// Select questions always draw a random option; ask and function questions
/// fall back to random synthesis when no default is available. A missing
/// registered function aborts the pass.
pub fn run_headless<R: Rng + ?Sized>(
    questions: &[Question],
    registry: &FunctionRegistry,
    rng: &mut R,
) -> Result<AnswerMap, SurveyError> {
    let mut state = ResolutionState::seeded(questions);

    for (index, question) in questions.iter().enumerate() {
        match question.kind {
            QuestionKind::Select => {
                if let Some(option) = question.options.choose(rng) {
                    state.set(index, option.clone());
                }
            }
            QuestionKind::List => {
                resolve_default(index, question, &mut state, registry, rng)?;
            }
            QuestionKind::Ask | QuestionKind::Function => {
                resolve_default(index, question, &mut state, registry, rng)?;
                if state.is_empty_at(index) {
                    let value = synthesize(question, rng);
                    debug!(question = %question.name, "synthesized random value");
                    state.set(index, value);
                }
            }
        }
    }

    let answers = state.to_answers(questions);
    info!(questions = questions.len(), answers = answers.len(), "headless resolution finished");
    Ok(answers)
}

/// Runs the form through `frontend` until every field is answered.
///
/// Rejected submissions are re-prompted with the validation error. A cancel
/// reply or a front-end failure ends the run with [`SurveyError::Interaction`].
pub fn run_interactive<F, R>(
    questions: &[Question],
    registry: &FunctionRegistry,
    frontend: &mut F,
    rng: &mut R,
) -> Result<AnswerMap, SurveyError>
where
    F: Frontend + ?Sized,
    R: Rng + ?Sized,
{
    let mut driver = FormDriver::new(questions, registry, rng)?;
    drive(&mut driver, frontend)?;
    driver.finish()
}

/// Feeds front-end replies into `driver` until it completes or is cancelled.
pub fn drive<F: Frontend + ?Sized>(
    driver: &mut FormDriver,
    frontend: &mut F,
) -> Result<(), SurveyError> {
    let mut rejected = None;

    while let Some(field) = driver.current_field() {
        let field = field.clone();
        let reply = frontend.prompt(&field, rejected.as_ref())?;
        let outcome = match reply {
            Reply::Text(value) => driver.submit(value),
            Reply::Selection(selection) => driver.submit_selection(selection),
            Reply::Cancel => {
                driver.cancel();
                break;
            }
        };
        rejected = outcome.err();
        if let Some(error) = &rejected {
            debug!(field = %field.name, %error, "submission rejected");
        }
    }

    Ok(())
}
