//! Order service errors.

use thiserror::Error;

/// Errors from the remote order store.
#[derive(Debug, Error)]
pub enum OrderStoreError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store returned a non-2xx response or unexpected body.
    #[error("unexpected response from order store: {0}")]
    UnexpectedResponse(String),
}

/// Errors from placing an order.
#[derive(Debug, Error)]
pub enum PlaceOrderError {
    /// No authenticated session was presented; the store was not contacted.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The remote commit failed. Recoverable: the cart is untouched and the
    /// user may retry payment.
    #[error("order commit failed")]
    Commit(#[source] OrderStoreError),
}
