use thiserror::Error;

/// Failures talking to the remote contact service. Logged, never shown to
/// the user, never retried.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("Contact not found: {0}")]
    NotFound(String),
    #[error("Gateway closed")]
    Closed,
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GatewayError::Decode(e.to_string())
        } else {
            GatewayError::Transport(e.to_string())
        }
    }
}
