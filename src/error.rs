use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Please fill in both title and content.")]
    IncompleteDraft,
}

pub type Result<T> = std::result::Result<T, FormError>;
