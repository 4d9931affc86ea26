//! Unified error types for the storefront client.
//!
//! Every fallible operation in the crate returns [`Result`]. Network and API
//! failures are surfaced to the caller and never retried; validation failures
//! block the action locally before any request is sent.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// The HTTP request itself failed (connection, TLS, body decode).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("API request failed with status {status}: {message}")]
    Api {
        /// HTTP status code returned by the backend
        status: u16,
        /// Response body, as far as it could be read
        message: String,
    },

    /// The requested resource does not exist on the backend.
    #[error("{resource} not found")]
    NotFound {
        /// Which resource was looked up
        resource: String,
    },

    /// An area-size input did not parse to a finite number greater than zero.
    #[error("Invalid area size: {input:?}")]
    InvalidSize {
        /// The rejected raw input
        input: String,
    },

    /// A review rating outside the 1-5 range.
    #[error("Invalid rating {rating}: must be between 1 and 5")]
    InvalidRating {
        /// The rejected rating value
        rating: u8,
    },

    /// Order submission was attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A review was attempted on an order that is not completed yet.
    #[error("Order {order_id} is not completed, review not allowed")]
    ReviewNotAllowed {
        /// The order the review was aimed at
        order_id: String,
    },

    /// A payment proof was already uploaded for this order.
    #[error("Payment proof already uploaded for order {order_id}")]
    ProofAlreadyUploaded {
        /// The order that already carries a proof
        order_id: String,
    },

    /// A payment proof upload was attempted on an order that is not pending.
    #[error("Order {order_id} is not awaiting payment")]
    OrderNotPayable {
        /// The order in the wrong status
        order_id: String,
    },

    /// Reading or writing a local store file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A local store file or payload could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
