use thiserror::Error;

/// Errors surfaced by question API clients.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The service could not be reached at all. Raised by
    /// `InMemoryQuestionsApi` in offline mode; `HttpQuestionsApi` reports
    /// connect failures as `Transport`.
    #[error("connection error: {0}")]
    Connection(String),

    #[error("invalid base url {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
}

impl ApiError {
    /// Status code of a non-2xx response, if that is what failed.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::HttpStatus(status) => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}
