use thiserror::Error;

use crate::llm_client::LlmError;

/// Message shown when the engine answered with a payload that does not match
/// the response schema.
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from AI engine";

/// Application-level error type shared by the recommendation client, the
/// controller and the persistence layer.
///
/// None of these are fatal: the controller always returns to a ready state.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("You can compare up to {limit} colleges at a time.")]
    ComparisonFull { limit: usize },

    #[error("A recommendation request is already in progress")]
    Busy,

    /// A submission finished after logout; its result was discarded.
    #[error("The session ended before recommendations arrived")]
    SessionEnded,

    /// The engine call itself failed (transport, auth, quota).
    #[error("AI service error: {0}")]
    Service(#[from] LlmError),

    /// The engine answered, but the payload broke the response contract.
    /// `detail` is for logs only.
    #[error("{}", INVALID_RESPONSE_MESSAGE)]
    InvalidResponse { detail: String },

    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl AppError {
    /// True for precondition failures that are surfaced as a local notice.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::ComparisonFull { .. } | AppError::Busy
        )
    }

    pub fn invalid_response(detail: impl Into<String>) -> Self {
        AppError::InvalidResponse {
            detail: detail.into(),
        }
    }
}
