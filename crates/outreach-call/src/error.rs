use thiserror::Error;

/// Errors returned by the call-automation client.
#[derive(Debug, Error)]
pub enum CallError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered `success: false` for a call submission.
    #[error("call submission rejected: {0}")]
    Rejected(String),

    /// The client was constructed with a malformed base URL.
    #[error("call API error: {0}")]
    ApiError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
