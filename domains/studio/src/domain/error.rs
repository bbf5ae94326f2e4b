use thiserror::Error;
use vibeforge_common::KvError;
use vibeforge_genai::GenAiError;

use super::entities::Tier;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Insufficient {} credits. Please top up to continue.", .0.label())]
    InsufficientCredits(Tier),

    #[error("Prompt must not be empty")]
    EmptyPrompt,

    #[error("Generation failed: {0}")]
    Generation(#[from] GenAiError),

    #[error("Credit storage error: {0}")]
    Storage(#[from] KvError),

    #[error("Stored credits are not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StudioError> for vibeforge_common::Error {
    fn from(err: StudioError) -> Self {
        use vibeforge_common::Error;
        match err {
            StudioError::InsufficientCredits(_) => Error::PaymentRequired(err.to_string()),
            StudioError::EmptyPrompt => Error::Validation(err.to_string()),
            StudioError::Generation(_) => Error::Upstream(err.to_string()),
            StudioError::Storage(e) => Error::Storage(e),
            StudioError::Serialization(e) => Error::Serialization(e),
        }
    }
}
