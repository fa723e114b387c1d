use thiserror::Error;

/// Errors produced while talking to the inference service.
///
/// These stay on the transport side: pages only ever see the generic
/// per-action message, the variant and its source go to the log.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The multipart body could not be assembled (e.g. bad media type).
    #[error("Invalid upload: {0}")]
    InvalidUpload(#[source] reqwest::Error),

    /// Connection refused, DNS failure, timeout, reset...
    #[error("Request to '{url}' failed: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status.
    #[error("Service returned HTTP {status}")]
    Status { status: u16 },

    /// The body was not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// The body was JSON but the result field had an unexpected type.
    #[error("Unexpected response shape: {0}")]
    Shape(String),

    /// The request never left the UI: the worker queue was full or gone.
    #[error("Could not dispatch request: {0}")]
    Dispatch(String),
}

impl ClientError {
    /// Short machine-readable tag, used in log records.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Build(_) => "build",
            ClientError::InvalidUpload(_) => "invalid_upload",
            ClientError::Connect { .. } => "connect",
            ClientError::Status { .. } => "status",
            ClientError::Decode(_) => "decode",
            ClientError::Shape(_) => "shape",
            ClientError::Dispatch(_) => "dispatch",
        }
    }
}
