use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum QuizError {
    /// Recoverable, user-facing. The store is never touched when raised.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Question not found: {0}")]
    QuestionNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but cannot be read as the expected format.
    /// Fatal for the session; there is no partial recovery.
    #[error("Question file error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, QuizError>;
