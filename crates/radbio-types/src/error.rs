use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadbioError {
    #[error("Unknown tissue reference: {0}")]
    UnknownTissue(String),

    #[error("Reference data error: {0}")]
    ReferenceData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RadbioResult<T> = Result<T, RadbioError>;
