use thiserror::Error;

/// Everything a request wrapper can fail with. None of these escape a
/// controller; each is converted to a notification (or a log line for the
/// best-effort paths) at the point of the call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caught before any network call is made.
    #[error("{0}")]
    Validation(String),
    /// Non-2xx response carrying the server-supplied message.
    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// Network failure or a body that would not parse.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// A 2xx body that parsed but violates the session invariants.
    #[error("malformed response: {0}")]
    Malformed(&'static str),
}

impl ApiError {
    /// Text for the user-facing notification: validation and rejection
    /// messages pass through verbatim, transport details are replaced by
    /// the caller's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(message) => message.clone(),
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Transport(_) | ApiError::Malformed(_) => fallback.to_string(),
        }
    }
}
