//! Static business rules for claim requests
//!
//! Pure functions over a claim request; no I/O. The orchestrator runs these
//! last, after the external customer, policy, and duplicate checks have
//! passed, so upstream failures are reported before local rule failures.

use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::request::ClaimRequest;
use crate::validation::ValidationResult;

/// Maximum claimable amount in currency units
pub const MAX_CLAIM_AMOUNT: Decimal = dec!(100_000);

/// Number of months after which an incident is too old to claim
const INCIDENT_WINDOW_MONTHS: u32 = 12;

/// Evaluates the business rules against a claim request
///
/// Rules run in order and the first failure wins:
/// 1. the amount must not exceed [`MAX_CLAIM_AMOUNT`]
/// 2. the incident must not be in the future
/// 3. the incident must not be more than one year old
///
/// Comparisons use exact decimal semantics; the boundary values themselves
/// (amount exactly 100,000, incident exactly `now` or exactly one year ago)
/// are accepted.
pub fn evaluate(request: &ClaimRequest, now: DateTime<Utc>) -> ValidationResult {
    if request.amount > MAX_CLAIM_AMOUNT {
        return ValidationResult::failed("Claim amount exceeds maximum limit of 100,000");
    }

    if request.incident_date > now {
        return ValidationResult::failed("Incident date cannot be in the future");
    }

    if request.incident_date < now - Months::new(INCIDENT_WINDOW_MONTHS) {
        return ValidationResult::failed("Incident date cannot be more than 1 year old");
    }

    ValidationResult::passed("Business rules validation passed")
}
