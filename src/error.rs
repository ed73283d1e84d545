//! Error type shared by the optimizer and the request layer.
//!
//! Every variant maps to one of two public messages; see
//! [`Error::public_message`].

use thiserror::Error as ThisError;

/// Message returned to callers for any missing origin or empty destination list.
pub const INVALID_REQUEST_MESSAGE: &str =
    "Invalid request. Origin and at least one destination required.";

/// Message returned to callers for every failure that is not their fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Failures of an optimize call.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Origin missing or no destinations. Detected before any computation.
    #[error("{}", INVALID_REQUEST_MESSAGE)]
    InvalidInput,
    /// Non-finite distances, an invalid tour, or a panic inside the solver.
    #[error("computation failed: {0}")]
    Computation(String),
    /// A request or response body could not be (de)serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for [`Error::Computation`].
    pub fn computation(message: impl Into<String>) -> Self {
        Self::Computation(message.into())
    }

    /// Returns `true` when the caller supplied a request that can never succeed.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput)
    }

    /// Message safe to show outside the crate. Internal details never leak.
    pub fn public_message(&self) -> &'static str {
        if self.is_client_error() {
            INVALID_REQUEST_MESSAGE
        } else {
            INTERNAL_ERROR_MESSAGE
        }
    }
}
