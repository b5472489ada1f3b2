use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
