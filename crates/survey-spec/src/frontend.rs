use crate::error::{InteractionFailure, ValidationError};
use crate::form::FieldDescriptor;

/// What a front end hands back for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Selection(Vec<String>),
    Cancel,
}

/// Abstraction over anything that can show a field and capture the user's reply.
pub trait Frontend {
    /// Shows `field`; `rejected` carries the reason the previous attempt failed.
    fn prompt(
        &mut self,
        field: &FieldDescriptor,
        rejected: Option<&ValidationError>,
    ) -> Result<Reply, InteractionFailure>;
}

/// Front end that replays a fixed list of replies, then cancels.
#[derive(Debug, Default, Clone)]
pub struct ScriptedFrontend {
    replies: std::collections::VecDeque<Reply>,
    rejections: Vec<ValidationError>,
}

impl ScriptedFrontend {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            rejections: Vec::new(),
        }
    }

    /// Validation errors observed while replaying.
    pub fn rejections(&self) -> &[ValidationError] {
        &self.rejections
    }
}

impl Frontend for ScriptedFrontend {
    fn prompt(
        &mut self,
        _field: &FieldDescriptor,
        rejected: Option<&ValidationError>,
    ) -> Result<Reply, InteractionFailure> {
        if let Some(error) = rejected {
            self.rejections.push(error.clone());
        }
        Ok(self.replies.pop_front().unwrap_or(Reply::Cancel))
    }
}
