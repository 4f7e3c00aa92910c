//! Feed error types.

/// Errors that can occur when reading a GBFS feed.
///
/// Every variant means the same thing to the rest of the app: the stations
/// are unavailable for this render pass.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed answered with a non-success status
    #[error("feed returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not a valid GBFS document
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Local fixture files could not be read
    #[error("fixture error: {message}")]
    Fixture { message: String },

    /// Client could not be built from its configuration
    #[error("invalid feed configuration: {message}")]
    Config { message: String },
}
