use thiserror::Error;

/// Shown when the backend gives us nothing better to say.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// A lookup request that did not produce a usable response.
///
/// `status_code` is `None` for transport-level failures (connection refused,
/// DNS, ...). `message` is whatever the backend put in the error body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct RequestFailure {
    pub status_code: Option<u16>,
    pub message: Option<String>,
}

impl RequestFailure {
    pub fn transport() -> Self {
        Self {
            status_code: None,
            message: None,
        }
    }

    pub fn status(status_code: u16, message: Option<String>) -> Self {
        Self {
            status_code: Some(status_code),
            message,
        }
    }

    /// Backend message verbatim, or the generic fallback
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Please enter a Solana address")]
    EmptyAddress,

    #[error(transparent)]
    Request(#[from] RequestFailure),
}
