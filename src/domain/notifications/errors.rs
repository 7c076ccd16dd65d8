//! Notification service errors.

use thiserror::Error;

/// Errors from the notification scheduler.
///
/// Confirmation delivery is best-effort: these are logged by the fan-out and
/// never surfaced to the purchaser or allowed to affect order state.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The scheduler returned a non-2xx response or unexpected body.
    #[error("unexpected response from notification scheduler: {0}")]
    UnexpectedResponse(String),
}
