//! Error types

/// Errors raised by the timestamp-parsing collaborator.
///
/// The roster engine itself never produces this error: it only surfaces when
/// update timestamps arrive as text and fail to parse. Missing timestamps are
/// not an error (recency simply evaluates to false).
#[derive(Debug, thiserror::Error)]
pub enum TimestampError {
    /// The timestamp text could not be parsed as RFC 3339.
    #[error("Invalid timestamp {text:?}: {source}")]
    Parse {
        /// The offending input text.
        text: String,
        /// The underlying parse failure.
        source: chrono::ParseError,
    },
}

impl TimestampError {
    /// Creates a parse error carrying the offending input.
    pub fn parse(text: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::Parse {
            text: text.into(),
            source,
        }
    }
}
