//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so
//! tests specify only the fields they care about.

use chrono::{DateTime, Utc};
use core_kernel::{ClaimNumber, CustomerId, PolicyNumber};
use domain_claims::{Claim, ClaimRequest, ClaimType};
use rust_decimal::Decimal;

use crate::fixtures::{AmountFixtures, IdFixtures, TemporalFixtures};

/// Builder for claim submission requests
///
/// Defaults to the standard valid scenario: known customer `CUST001`,
/// active policy `POL001`, a collision claim for 5,000.00 from yesterday.
pub struct ClaimRequestBuilder {
    customer_id: CustomerId,
    policy_number: PolicyNumber,
    claim_type: ClaimType,
    amount: Decimal,
    description: Option<String>,
    incident_date: DateTime<Utc>,
    incident_location: String,
}

impl Default for ClaimRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRequestBuilder {
    /// Creates a builder with the standard valid defaults
    pub fn new() -> Self {
        Self {
            customer_id: IdFixtures::customer_id(),
            policy_number: IdFixtures::policy_number(),
            claim_type: ClaimType::Collision,
            amount: AmountFixtures::standard(),
            description: Some("Rear-end collision at low speed".to_string()),
            incident_date: TemporalFixtures::yesterday(),
            incident_location: "New Location".to_string(),
        }
    }

    /// Sets the customer id
    pub fn with_customer_id(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = customer_id;
        self
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, policy_number: PolicyNumber) -> Self {
        self.policy_number = policy_number;
        self
    }

    /// Sets the claim type
    pub fn with_claim_type(mut self, claim_type: ClaimType) -> Self {
        self.claim_type = claim_type;
        self
    }

    /// Sets the claimed amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the incident date
    pub fn with_incident_date(mut self, incident_date: DateTime<Utc>) -> Self {
        self.incident_date = incident_date;
        self
    }

    /// Sets the incident location
    pub fn with_incident_location(mut self, location: impl Into<String>) -> Self {
        self.incident_location = location.into();
        self
    }

    /// Builds the claim request
    pub fn build(self) -> ClaimRequest {
        ClaimRequest {
            customer_id: self.customer_id,
            policy_number: self.policy_number,
            claim_type: self.claim_type,
            amount: self.amount,
            description: self.description,
            incident_date: self.incident_date,
            incident_location: self.incident_location,
        }
    }
}

/// Builds a persisted-looking claim from the standard request defaults
///
/// Useful for store and status tests that do not go through the
/// submission pipeline.
pub fn test_claim() -> Claim {
    Claim::new(ClaimNumber::generate(), ClaimRequestBuilder::new().build())
}
