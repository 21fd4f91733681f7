use thiserror::Error;

/// Why acquiring the weather payload failed.
///
/// Every variant is terminal for the session; the `Display` text is what the
/// user sees.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No endpoint was configured, so no request was made.
    #[error("endpoint not configured")]
    Configuration,

    /// Non-success HTTP status, or the request could not complete.
    #[error("{0}")]
    Transport(String),

    /// The body was not a JSON weather payload.
    #[error("failed to parse weather payload: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub(crate) fn status(status: reqwest::StatusCode) -> Self {
        FetchError::Transport(format!("response not ok (status {status})"))
    }

    pub(crate) fn network(err: reqwest::Error) -> Self {
        FetchError::Transport(format!("request failed: {err}"))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, FetchError::Configuration)
    }
}
