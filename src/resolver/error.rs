use thiserror::Error;

/// Failure classes of a resolution attempt. All are recoverable at the
/// presentation boundary; a retry is a fresh, independent call.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The input did not look like a supported video link; no network call
    /// was made.
    #[error("not a valid video link for the supported platform")]
    InvalidInput,

    /// The resolution service was reachable but reported failure (bad or
    /// unsupported link, private video, deleted content).
    #[error("{message}")]
    ResolutionFailed { message: String },

    /// The service could not be reached or its response could not be read.
    #[error("could not reach the resolution service: {reason}")]
    Transport { reason: String },
}

impl ResolveError {
    pub fn resolution_failed(message: impl Into<String>) -> Self {
        Self::ResolutionFailed {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ResolveError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ResolveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport {
            reason: format!("malformed response: {err}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
