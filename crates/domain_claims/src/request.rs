//! Claim submission request

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, PolicyNumber};

use crate::claim::ClaimType;

/// A claim submission request
///
/// Transient value that exists only for the duration of one submission. The
/// validation chain consumes it by reference; on a pass verdict it is turned
/// into a [`crate::Claim`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRequest {
    /// Customer making the claim
    pub customer_id: CustomerId,
    /// Policy the claim is made against
    pub policy_number: PolicyNumber,
    /// Type of claim
    pub claim_type: ClaimType,
    /// Claimed amount, non-negative exact decimal
    pub amount: Decimal,
    /// Free-text description
    pub description: Option<String>,
    /// When the incident occurred
    pub incident_date: DateTime<Utc>,
    /// Where the incident occurred
    pub incident_location: String,
}
