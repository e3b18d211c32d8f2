use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamError {
    #[error("Model not trained: at least one spam and one ham message are required")]
    NotTrained,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpamError>;
