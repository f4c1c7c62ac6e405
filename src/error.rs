use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, LookupError>;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("invalid key expression: {0:?}")]
    InvalidKeyExpr(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("upstream returned an empty entry list")]
    EmptyResponse,

    #[error("nothing found for {term:?} (status {status})")]
    NotFound { term: String, status: StatusCode },
}

impl LookupError {
    /// Whether the caller sent a bad argument, as opposed to an upstream fault.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidKeyExpr(_))
    }
}
