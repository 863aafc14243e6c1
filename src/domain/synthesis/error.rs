use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SynthesisServiceError {
    #[error("{0}")]
    Provider(String),
    #[error("invalid input: {0}")]
    Invalid(String),
}

impl From<SynthesisServiceError> for AppError {
    fn from(err: SynthesisServiceError) -> Self {
        match err {
            SynthesisServiceError::Provider(msg) => AppError::Provider(msg),
            SynthesisServiceError::Invalid(msg) => AppError::BadRequest(msg),
        }
    }
}
