//! Error types for the Product actor.

use thiserror::Error;

/// Message published in the load status when the remote catalog cannot be read.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products";

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Input rejected before it reached the store.
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The remote catalog could not be read or decoded.
    #[error("Failed to load products: {0}")]
    RemoteLoad(String),

    /// The snapshot file could not be read or written.
    #[error("Product storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ProductError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        ProductError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
