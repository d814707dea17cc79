#![allow(missing_docs)]

pub mod answers;
pub mod coerce;
pub mod driver;
pub mod error;
pub mod form;
pub mod frontend;
pub mod list_editor;
pub mod load;
pub mod random;
pub mod registry;
pub mod resolve;
pub mod runner;
pub mod spec;
pub mod validate;

pub use answers::{AnswerMap, ResolutionState, TypedValue};
pub use coerce::coerce;
pub use driver::{FormDriver, FormStatus};
pub use error::{InteractionFailure, SchemaError, SurveyError, ValidationError};
pub use form::{FieldDescriptor, FieldKind, Form, assemble_form};
pub use frontend::{Frontend, Reply, ScriptedFrontend};
pub use list_editor::{ListEditor, ListKey, ListMode, ListOutcome};
pub use load::{load_questions, parse_questions, read_document, validate_document};
pub use random::synthesize;
pub use registry::{DefaultFn, FunctionRegistry};
pub use resolve::{join_selection, resolve_default, split_selection};
pub use runner::{drive, run_headless, run_interactive};
pub use spec::{DefaultParams, Question, QuestionKind, ValueType};
pub use validate::{check_length, validate_questions};
