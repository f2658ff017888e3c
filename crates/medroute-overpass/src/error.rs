use thiserror::Error;

/// Errors returned by the Overpass API client.
///
/// None of these reach resolver callers; they select the fallback path and
/// are logged.
#[derive(Debug, Error)]
pub enum OverpassError {
    /// Network failure, timeout, or non-2xx status from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// An element parsed as JSON but cannot be turned into a hospital.
    #[error("invalid element {element}: {reason}")]
    InvalidElement { element: String, reason: String },
}
