//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// The rotation state could not be written to durable storage.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// The outbound message could not be delivered.
    #[error("delivery error: {0}")]
    Delivery(String),

    /// The messaging API answered with a non-success status.
    #[error("delivery rejected with status {status}: {body}")]
    DeliveryRejected {
        /// HTTP status returned by the messaging API.
        status: u16,
        /// Response body returned by the messaging API.
        body: String,
    },
}
