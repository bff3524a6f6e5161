use crate::models::QuestionId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to read quiz file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse quiz file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("quiz contains no questions")]
    Empty,

    #[error("question id {0} appears more than once")]
    DuplicateId(QuestionId),

    #[error("question {id}: {reason}")]
    Invalid { id: QuestionId, reason: String },
}

impl QuizError {
    pub fn invalid(id: QuestionId, reason: impl Into<String>) -> Self {
        QuizError::Invalid {
            id,
            reason: reason.into(),
        }
    }
}
