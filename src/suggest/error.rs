use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("vision API key is not configured")]
    MissingCredentials,

    #[error("vision endpoint URL is invalid: {0}")]
    InvalidEndpoint(String),

    #[error("vision endpoint request failed: {0}")]
    Network(String),

    #[error("vision endpoint returned malformed data: {0}")]
    BadResponse(String),
}

impl From<reqwest::Error> for SuggestError {
    fn from(err: reqwest::Error) -> Self {
        SuggestError::Network(err.to_string())
    }
}
