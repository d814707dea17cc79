use std::fs;
use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::error::SchemaError;
use crate::spec::Question;
use crate::validate::validate_questions;

/// Reads a question file and extracts the set stored under `key`.
pub fn load_questions(path: impl AsRef<Path>, key: &str) -> Result<Vec<Question>, SchemaError> {
    let path = path.as_ref();
    let text = read_document(path)?;
    let questions = parse_questions(&text, key)?;
    debug!(path = %path.display(), key, count = questions.len(), "loaded question set");
    Ok(questions)
}

/// Parses a YAML document holding either a bare question list or a map of
/// named lists; `key` selects the list in the second form. An empty document
/// holds no questions.
pub fn parse_questions(text: &str, key: &str) -> Result<Vec<Question>, SchemaError> {
    let document: Value = serde_yaml::from_str(text)?;
    let questions: Vec<Question> = match document {
        Value::Null => Vec::new(),
        Value::Sequence(_) => serde_yaml::from_value(document)?,
        Value::Mapping(mut sections) => {
            let section = sections
                .remove(key)
                .ok_or_else(|| SchemaError::KeyNotFound(key.to_string()))?;
            serde_yaml::from_value(section)?
        }
        _ => return Err(SchemaError::UnexpectedShape),
    };
    validate_questions(&questions)?;
    Ok(questions)
}

/// Reads a file into memory.
pub fn read_document(path: impl AsRef<Path>) -> Result<String, SchemaError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks that `text` is well-formed YAML; empty input is accepted.
pub fn validate_document(text: &str) -> Result<(), SchemaError> {
    serde_yaml::from_str::<Value>(text)?;
    Ok(())
}
