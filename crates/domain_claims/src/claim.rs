//! Claim aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, ClaimNumber, CustomerId, PolicyNumber};

use crate::error::ClaimError;
use crate::request::ClaimRequest;

/// Claim lifecycle status
///
/// Wire format matches the upstream services (SCREAMING_SNAKE_CASE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    /// Received but not yet accepted for processing
    Submitted,
    /// Accepted and awaiting assessment
    Pending,
    /// Under active investigation
    Investigating,
    /// Approved for payout
    Approved,
    /// Rejected
    Rejected,
    /// Paid out
    Paid,
    /// Closed
    Closed,
}

impl ClaimStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [ClaimStatus; 7] = [
        ClaimStatus::Submitted,
        ClaimStatus::Pending,
        ClaimStatus::Investigating,
        ClaimStatus::Approved,
        ClaimStatus::Rejected,
        ClaimStatus::Paid,
        ClaimStatus::Closed,
    ];
}

/// Type of auto claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimType {
    Collision,
    Comprehensive,
    Liability,
    PersonalInjury,
    Theft,
    Vandalism,
}

/// A persisted claim against a policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Opaque system identifier
    pub id: ClaimId,
    /// Unique claim number, immutable once persisted
    pub claim_number: ClaimNumber,
    /// Customer the claim belongs to
    pub customer_id: CustomerId,
    /// Policy the claim is made against
    pub policy_number: PolicyNumber,
    /// Lifecycle status
    pub status: ClaimStatus,
    /// Type of claim
    pub claim_type: ClaimType,
    /// Claimed amount, exact decimal
    pub amount: Decimal,
    /// Free-text description
    pub description: Option<String>,
    /// When the incident occurred
    pub incident_date: DateTime<Utc>,
    /// Where the incident occurred
    pub incident_location: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Creates a new claim from a validated request
    ///
    /// The constructor sets status `Submitted`; the submission service
    /// overrides it to `Pending` before persisting.
    pub fn new(claim_number: ClaimNumber, request: ClaimRequest) -> Self {
        let now = Utc::now();
        Self {
            id: ClaimId::new_v7(),
            claim_number,
            customer_id: request.customer_id,
            policy_number: request.policy_number,
            status: ClaimStatus::Submitted,
            claim_type: request.claim_type,
            amount: request.amount,
            description: request.description,
            incident_date: request.incident_date,
            incident_location: request.incident_location,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the status without checking transition legality
    ///
    /// This is the legacy-compatible behaviour: any status is accepted from
    /// any prior state. Refreshes the update timestamp.
    pub fn set_status(&mut self, status: ClaimStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Sets the status, enforcing the lifecycle transition table
    pub fn transition_to(&mut self, status: ClaimStatus) -> Result<(), ClaimError> {
        if !self.can_transition_to(status) {
            return Err(ClaimError::InvalidStatusTransition {
                from: format!("{:?}", self.status),
                to: format!("{:?}", status),
            });
        }
        self.set_status(status);
        Ok(())
    }

    /// Checks if transition is valid
    fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self.status, target),
            (Submitted, Pending)
                | (Pending, Investigating)
                | (Pending, Rejected)
                | (Investigating, Approved)
                | (Investigating, Rejected)
                | (Approved, Paid)
                | (Paid, Closed)
                | (Rejected, Closed)
        )
    }
}
