//! Error types for the Lex slot update tool.

use aws_sdk_lexmodelsv2::error::{BuildError, DisplayErrorContext, SdkError};
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling or sending an UpdateSlot request.
#[derive(Error, Debug)]
pub enum Error {
    /// AWS SDK or service error
    #[error("AWS error: {0}")]
    Aws(String),

    /// The service endpoint could not be reached
    #[error("Unable to reach the Lex Models V2 endpoint: {0}")]
    Endpoint(String),

    /// Request construction error from the SDK builders
    #[error("Invalid request: {0}")]
    Build(#[from] BuildError),

    /// Parameter constraint violation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed parameter value
    #[error("Parameter error: {0}")]
    Parameter(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Classify an SDK failure into the local taxonomy.
///
/// Dispatch failures caused by connection or timeout problems are reported
/// as endpoint-resolution errors so a bad region or endpoint URL is visible
/// at a glance; everything else keeps the SDK's full error context.
pub fn classify_sdk_error<E, R>(err: SdkError<E, R>) -> Error
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    if let SdkError::DispatchFailure(failure) = &err {
        let unreachable = failure
            .as_connector_error()
            .map(|c| c.is_io() || c.is_timeout())
            .unwrap_or(false);
        if unreachable {
            return Error::Endpoint(format!(
                "check the configured region and endpoint URL, and that the endpoint hostname resolves: {}",
                DisplayErrorContext(&err)
            ));
        }
    }
    Error::Aws(format!("{}", DisplayErrorContext(&err)))
}
