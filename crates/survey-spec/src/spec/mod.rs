pub mod question;

pub use question::{DefaultParams, Question, QuestionKind, ValueType};
