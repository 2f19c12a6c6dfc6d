use reqwest::StatusCode;
use std::fmt;

/// Ways a call to the product API can fail to produce a usable body.
///
/// The gateway logs these and substitutes a fallback value; they never reach
/// route handlers.
#[derive(Debug)]
pub enum UpstreamError {
    UnusableId(String),
    Transport(reqwest::Error),
    Status(StatusCode),
    EmptyBody,
    MalformedBody(serde_json::Error),
}

impl UpstreamError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, UpstreamError::Status(StatusCode::NOT_FOUND))
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::UnusableId(id) => write!(f, "unusable product id {:?}", id),
            UpstreamError::Transport(e) => write!(f, "request failed: {}", e),
            UpstreamError::Status(status) => write!(f, "unexpected status {}", status),
            UpstreamError::EmptyBody => write!(f, "empty response body"),
            UpstreamError::MalformedBody(e) => write!(f, "invalid JSON body: {}", e),
        }
    }
}

impl std::error::Error for UpstreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpstreamError::Transport(e) => Some(e),
            UpstreamError::MalformedBody(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Transport(err)
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        UpstreamError::MalformedBody(err)
    }
}
