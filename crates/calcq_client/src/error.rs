use calcq_common::WireError;
use thiserror::Error;

/// Errors that can occur when talking to the expression service.
///
/// The `Display` text of a submission error is what the user sees in the
/// blocking notification, so variants read as complete sentences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, CORS...).
    #[error("request to the expression service failed: {0}")]
    Transport(String),

    /// The service answered with a non-success HTTP status.
    #[error("expression service responded with status {status}")]
    Status {
        /// HTTP status code returned by the service
        status: u16,
    },

    /// A body could not be encoded or decoded.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// The client configuration is unusable.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Build a `Status` error from a raw status code.
    pub fn status(status: u16) -> Self {
        ClientError::Status { status }
    }
}
