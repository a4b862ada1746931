use accord_core::Procedure;
use thiserror::Error;

/// Failure of a single remote procedure call.
///
/// Returned unchanged by every client operation. The backend `code` is opaque
/// to this crate and passed through for callers that want to branch on it.
#[derive(Debug, Error)]
pub enum RemoteCallError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{procedure} failed ({status}): {message}")]
    Backend {
        procedure: Procedure,
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("unexpected response from {procedure}: {source}")]
    Decode {
        procedure: Procedure,
        #[source]
        source: serde_json::Error,
    },
}

impl RemoteCallError {
    /// An error reported by the backend itself.
    pub fn backend(
        procedure: Procedure,
        status: u16,
        code: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        RemoteCallError::Backend {
            procedure,
            status,
            code,
            message: message.into(),
        }
    }

    /// Backend-specific error code, if the backend supplied one.
    pub fn code(&self) -> Option<&str> {
        match self {
            RemoteCallError::Backend { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}
