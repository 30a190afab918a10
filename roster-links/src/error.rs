//! Error types

/// Errors raised while preparing pagination links.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// The incoming request URL could not be parsed.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
