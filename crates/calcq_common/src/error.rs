use thiserror::Error;

/// Failures of the JSON codec used on the calcq wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// A response body was not valid JSON or did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(String),
}
