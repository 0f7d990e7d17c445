use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormSpecError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Decode error: {0}")]
    DecodeError(String),
}

pub type Result<T> = std::result::Result<T, FormSpecError>;
