//! Claims DTOs
//!
//! Wire types for the claims endpoints. Field names are camelCase to match
//! the customer- and policy-service APIs this service sits alongside.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use core_kernel::{CustomerId, PolicyNumber};
use domain_claims::{Claim, ClaimRequest, ClaimStatus, ClaimType};

use crate::error::ApiError;

/// Request body for claim submission
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitClaimRequest {
    #[validate(length(min = 1, message = "customerId must not be blank"))]
    pub customer_id: String,

    #[validate(length(min = 1, message = "policyNumber must not be blank"))]
    pub policy_number: String,

    pub claim_type: ClaimType,

    #[validate(custom(function = non_negative))]
    pub claim_amount: Decimal,

    pub description: Option<String>,

    pub incident_date: DateTime<Utc>,

    #[validate(length(min = 1, message = "incidentLocation must not be blank"))]
    pub incident_location: String,
}

fn non_negative(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() {
        return Err(ValidationError::new("claimAmount must be non-negative"));
    }
    Ok(())
}

impl SubmitClaimRequest {
    /// Converts the wire request into a domain claim request
    pub fn into_domain(self) -> Result<ClaimRequest, ApiError> {
        Ok(ClaimRequest {
            customer_id: CustomerId::new(self.customer_id)
                .map_err(|e| ApiError::BadRequest(e.to_string()))?,
            policy_number: PolicyNumber::new(self.policy_number)
                .map_err(|e| ApiError::BadRequest(e.to_string()))?,
            claim_type: self.claim_type,
            amount: self.claim_amount,
            description: self.description,
            incident_date: self.incident_date,
            incident_location: self.incident_location,
        })
    }
}

/// Request body for a status update
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ClaimStatus,
}

/// Response body for a claim
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub claim_number: String,
    pub customer_id: String,
    pub policy_number: String,
    pub status: ClaimStatus,
    pub claim_type: ClaimType,
    pub claim_amount: Decimal,
    pub description: Option<String>,
    pub incident_date: DateTime<Utc>,
    pub incident_location: String,
    pub created_at: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            claim_number: claim.claim_number.to_string(),
            customer_id: claim.customer_id.to_string(),
            policy_number: claim.policy_number.to_string(),
            status: claim.status,
            claim_type: claim.claim_type,
            claim_amount: claim.amount,
            description: claim.description,
            incident_date: claim.incident_date,
            incident_location: claim.incident_location,
            created_at: claim.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn submit_json() -> &'static str {
        r#"{
            "customerId": "CUST001",
            "policyNumber": "POL001",
            "claimType": "COLLISION",
            "claimAmount": 5000.00,
            "description": "Rear-end collision",
            "incidentDate": "2026-08-26T10:30:00Z",
            "incidentLocation": "New Location"
        }"#
    }

    #[test]
    fn test_submit_request_wire_format() {
        let request: SubmitClaimRequest = serde_json::from_str(submit_json()).unwrap();

        assert_eq!(request.customer_id, "CUST001");
        assert_eq!(request.claim_type, ClaimType::Collision);
        assert_eq!(request.claim_amount, dec!(5000.00));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_blank_customer_fails_validation() {
        let json = submit_json().replace("CUST001", "");
        let request: SubmitClaimRequest = serde_json::from_str(&json).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_negative_amount_fails_validation() {
        let json = submit_json().replace("5000.00", "-1.00");
        let request: SubmitClaimRequest = serde_json::from_str(&json).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_wire_format() {
        let response = ClaimResponse::from(test_utils::test_claim());
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"claimNumber\":\"CLM-"));
        assert!(json.contains("\"status\":\"SUBMITTED\""));
        assert!(json.contains("\"claimType\":\"COLLISION\""));
    }
}
