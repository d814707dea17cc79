use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Parameter bag handed to registered default functions.
pub type DefaultParams = BTreeMap<String, Value>;

/// Interaction style of a question.
///
/// Absent or unrecognized labels fall back to single-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionKind {
    #[default]
    Select,
    Ask,
    Function,
    List,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Select => "select",
            QuestionKind::Ask => "ask",
            QuestionKind::Function => "function",
            QuestionKind::List => "list",
        }
    }

    /// Kinds whose answers come from `options`.
    pub fn uses_options(&self) -> bool {
        matches!(self, QuestionKind::Select | QuestionKind::List)
    }
}

impl From<String> for QuestionKind {
    fn from(label: String) -> Self {
        match label.as_str() {
            "ask" => QuestionKind::Ask,
            "function" => QuestionKind::Function,
            "list" => QuestionKind::List,
            _ => QuestionKind::Select,
        }
    }
}

impl From<QuestionKind> for String {
    fn from(kind: QuestionKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Target type of the resolved answer.
///
/// Absent or unrecognized labels fall back to string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueType {
    #[default]
    String,
    Int,
    Boolean,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Int => "int",
            ValueType::Boolean => "boolean",
        }
    }
}

impl From<String> for ValueType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "int" => ValueType::Int,
            "boolean" => ValueType::Boolean,
            _ => ValueType::String,
        }
    }
}

impl From<ValueType> for String {
    fn from(value_type: ValueType) -> Self {
        value_type.as_str().to_string()
    }
}

/// Definition of a single prompt inside a question set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub name: String,
    #[serde(default)]
    pub kind: QuestionKind,
    #[serde(
        default,
        deserialize_with = "scalar_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub options: Vec<String>,
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub default: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_function: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default_params: DefaultParams,
    #[serde(rename = "minLength", default)]
    pub min_length: usize,
    #[serde(rename = "maxLength", default)]
    pub max_length: usize,
    #[serde(rename = "type", default)]
    pub value_type: ValueType,
}

impl Question {
    /// Creates a question with no options, constraints or default.
    pub fn new(name: impl Into<String>, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            prompt: prompt.into(),
            name: name.into(),
            kind,
            options: Vec::new(),
            default: String::new(),
            default_function: None,
            default_params: DefaultParams::new(),
            min_length: 0,
            max_length: 0,
            value_type: ValueType::String,
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_function(mut self, name: impl Into<String>, params: DefaultParams) -> Self {
        self.default_function = Some(name.into());
        self.default_params = params;
        self
    }

    pub fn with_length(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    pub fn with_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }
}

/// YAML scalars accepted where text is expected (`default: 25`, `options: [1, 2]`).
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => text,
            Scalar::Int(value) => value.to_string(),
            Scalar::Float(value) => value.to_string(),
            Scalar::Bool(value) => value.to_string(),
        }
    }
}

fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(String::from).unwrap_or_default())
}

fn scalar_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Scalar>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .map(String::from)
        .collect())
}
