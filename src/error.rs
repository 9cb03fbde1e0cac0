#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FetchError {
    /// HTTP status code carried by the failure, if the upstream answered at all.
    pub fn code(&self) -> Option<u16> {
        match self {
            FetchError::UpstreamStatus { status, .. } => Some(*status),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw upstream response body for non-2xx answers.
    pub fn body(&self) -> Option<&str> {
        match self {
            FetchError::UpstreamStatus { body, .. } => Some(body),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
