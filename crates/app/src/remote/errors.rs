//! Remote inventory errors.

use thiserror::Error;

/// Errors that can occur when communicating with the inventory service.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-2xx response or an unexpected body.
    #[error("unexpected response from inventory service: {0}")]
    UnexpectedResponse(String),

    /// The service accepted the request but declined the order.
    #[error("order was rejected by the inventory service")]
    OrderRejected,
}
