//! Fetch error type shared by both mechanisms.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Single failure of a fetch call. Nothing is retried internally.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered 404 or 410.
    #[error("not found: {url}")]
    NotFound { url: String },

    /// Server answered with any other status >= 400.
    #[error("Server returned HTTP response code: {status} for URL: {url}")]
    RequestFailed { status: u16, url: String },

    /// Final status was below 400 but not 200 (reqwest mechanism only).
    #[error("unexpected HTTP status {status} for URL: {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Connection, DNS, TLS, URL or body read failure.
    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The transfer was interrupted before it completed.
    #[error("request interrupted: {url}")]
    Interrupted { url: String },
}

impl FetchError {
    pub(crate) fn transport(url: &str, source: impl Into<BoxError>) -> Self {
        FetchError::Transport {
            url: url.to_string(),
            source: source.into(),
        }
    }

    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::RequestFailed { status, .. } | FetchError::UnexpectedStatus { status, .. } => {
                Some(*status)
            }
            FetchError::NotFound { .. } | FetchError::Transport { .. } | FetchError::Interrupted { .. } => {
                None
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

/// True if an `io::ErrorKind::Interrupted` appears anywhere in the source chain.
pub(crate) fn chain_is_interrupted(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(io) = e.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::Interrupted {
                return true;
            }
        }
        current = e.source();
    }
    false
}
