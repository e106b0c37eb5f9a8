use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum LikeError {
    #[error("click target has no cafe id in its name attribute")]
    MissingCafeId,
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server responded {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("server refused request: {0}")]
    NotLoggedIn(String),
    #[error("unexpected response body: {0}")]
    UnexpectedBody(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("toggle task did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl LikeError {
    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}
