use thiserror::Error;

pub type Result<T> = std::result::Result<T, HubError>;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parsing error: {0}")]
    Parse(String),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("API rate limit exceeded")]
    RateLimited,
    #[error("Gateway responded with {status}: {message}")]
    Gateway { status: u16, message: String },
    #[error("Authorization unavailable for premium model")]
    AuthorizationUnavailable,
    #[error("Badge id already in catalog: {0}")]
    DuplicateBadge(String),
    #[error("Unknown badge: {0}")]
    UnknownBadge(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HubError {
    /// Failures of an external service, as opposed to local misuse.
    pub fn is_gateway_failure(&self) -> bool {
        matches!(
            self,
            HubError::Network(_)
                | HubError::NotFound(_)
                | HubError::RateLimited
                | HubError::Gateway { .. }
                | HubError::AuthorizationUnavailable
        )
    }
}

impl From<serde_json::Error> for HubError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<url::ParseError> for HubError {
    fn from(e: url::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<base64::DecodeError> for HubError {
    fn from(e: base64::DecodeError) -> Self {
        Self::Parse(e.to_string())
    }
}
