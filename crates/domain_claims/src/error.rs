//! Claims domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur in the claims domain
///
/// Validation rejections and not-found lookups are ordinary business
/// outcomes carrying a message; storage failures after a passed validation
/// are system-level and propagate the underlying port error.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim validation failed: {0}")]
    ValidationRejected(String),

    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Storage error: {0}")]
    Storage(#[from] PortError),
}

impl ClaimError {
    /// Returns true for rejections produced by the validation chain
    pub fn is_validation_rejection(&self) -> bool {
        matches!(self, ClaimError::ValidationRejected(_))
    }

    /// Returns true when the claim number did not resolve to a claim
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClaimError::ClaimNotFound(_))
    }
}
