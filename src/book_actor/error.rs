use thiserror::Error;

/// Errors seen by callers of [`crate::clients::BookClient`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
