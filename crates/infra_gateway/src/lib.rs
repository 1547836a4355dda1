//! HTTP Lookup Gateway
//!
//! Adapter implementing [`LookupGateway`] over the REST APIs of the external
//! customer and policy services. The adapter owns the degraded-result
//! contract: any transport or decode failure is logged and absorbed into the
//! same values the domain would see for a failed check, so the validation
//! chain never observes an infrastructure error.
//!
//! - customer existence and policy validity fail closed (`false` /
//!   "Service unavailable")
//! - duplicate checks fail open (not a duplicate)
//!
//! # Endpoints
//!
//! - `GET {customer}/api/customers/{id}/exists` -> `bool`
//! - `GET {policy}/api/policies/{number}/validate?customerId=` ->
//!   policy validation
//! - `GET {policy}/api/policies/{number}/claims/validate?customerId=&incidentLocation=&incidentDate=` ->
//!   duplicate check

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use core_kernel::{CustomerId, DomainPort, PolicyNumber};
use domain_claims::{DuplicateCheck, LookupGateway, PolicyValidation};

/// Errors raised while constructing the gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Configuration for the external service gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the customer service (e.g. `http://localhost:8081`)
    pub customer_service_url: String,
    /// Base URL of the policy service (e.g. `http://localhost:8082`)
    pub policy_service_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            customer_service_url: "http://localhost:8081".to_string(),
            policy_service_url: "http://localhost:8082".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Wire format of the policy service's validation endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PolicyValidationResponse {
    valid: bool,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    validation_message: Option<String>,
}

/// Wire format of the policy service's duplicate-claim endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClaimValidationResponse {
    #[serde(alias = "isDuplicate")]
    duplicate: bool,
    #[serde(default)]
    has_existing_claims: bool,
    #[serde(default)]
    validation_message: Option<String>,
}

/// HTTP adapter over the external customer and policy services
pub struct HttpLookupGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpLookupGateway {
    /// Creates a gateway with a pooled HTTP client
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, reqwest::Error> {
        self.client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

impl DomainPort for HttpLookupGateway {}

#[async_trait]
impl LookupGateway for HttpLookupGateway {
    async fn customer_exists(&self, customer_id: &CustomerId) -> bool {
        let url = format!(
            "{}/api/customers/{}/exists",
            self.config.customer_service_url, customer_id
        );
        match self.get_json::<bool>(&url, &[]).await {
            Ok(exists) => exists,
            Err(err) => {
                warn!(customer_id = %customer_id, error = %err, "customer lookup failed, treating as not found");
                false
            }
        }
    }

    async fn validate_policy(
        &self,
        policy_number: &PolicyNumber,
        customer_id: &CustomerId,
    ) -> PolicyValidation {
        let url = format!(
            "{}/api/policies/{}/validate",
            self.config.policy_service_url, policy_number
        );
        let query = [("customerId", customer_id.as_str())];
        match self
            .get_json::<PolicyValidationResponse>(&url, &query)
            .await
        {
            Ok(response) => PolicyValidation {
                valid: response.valid,
                active: response.active,
                message: response
                    .validation_message
                    .unwrap_or_else(|| "Policy validation completed".to_string()),
            },
            Err(err) => {
                warn!(policy_number = %policy_number, error = %err, "policy validation failed, failing closed");
                PolicyValidation::unavailable()
            }
        }
    }

    async fn check_duplicate(
        &self,
        policy_number: &PolicyNumber,
        customer_id: &CustomerId,
        incident_location: &str,
        incident_date: DateTime<Utc>,
    ) -> DuplicateCheck {
        let url = format!(
            "{}/api/policies/{}/claims/validate",
            self.config.policy_service_url, policy_number
        );
        let date = incident_date.to_rfc3339_opts(SecondsFormat::Secs, true);
        let query = [
            ("customerId", customer_id.as_str()),
            ("incidentLocation", incident_location),
            ("incidentDate", date.as_str()),
        ];
        match self
            .get_json::<ClaimValidationResponse>(&url, &query)
            .await
        {
            Ok(response) => DuplicateCheck {
                is_duplicate: response.duplicate,
                has_existing_claims: response.has_existing_claims,
                message: response
                    .validation_message
                    .unwrap_or_else(|| "Duplicate check completed".to_string()),
            },
            // Fail open: an unreachable policy service must not block
            // submission
            Err(err) => {
                warn!(policy_number = %policy_number, error = %err, "duplicate check failed, failing open");
                DuplicateCheck::unavailable()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn unreachable_gateway() -> HttpLookupGateway {
        // Port 1 is reserved and nothing listens there locally, so every
        // request fails fast with connection refused.
        HttpLookupGateway::new(GatewayConfig {
            customer_service_url: "http://127.0.0.1:1".to_string(),
            policy_service_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
        })
        .unwrap()
    }

    fn ids() -> (CustomerId, PolicyNumber) {
        (
            CustomerId::from_str("CUST001").unwrap(),
            PolicyNumber::from_str("POL001").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_unreachable_customer_service_fails_closed() {
        let gateway = unreachable_gateway();
        let (customer, _) = ids();

        assert!(!gateway.customer_exists(&customer).await);
    }

    #[tokio::test]
    async fn test_unreachable_policy_service_fails_closed() {
        let gateway = unreachable_gateway();
        let (customer, policy) = ids();

        let validation = gateway.validate_policy(&policy, &customer).await;

        assert!(!validation.valid);
        assert!(!validation.active);
        assert_eq!(validation.message, "Service unavailable");
    }

    #[tokio::test]
    async fn test_unreachable_duplicate_check_fails_open() {
        let gateway = unreachable_gateway();
        let (customer, policy) = ids();

        let check = gateway
            .check_duplicate(&policy, &customer, "New Location", Utc::now())
            .await;

        assert!(!check.is_duplicate);
        assert!(!check.has_existing_claims);
        assert_eq!(check.message, "Service unavailable");
    }

    #[test]
    fn test_policy_response_wire_format() {
        let json = r#"{
            "valid": true,
            "policyNumber": "POL001",
            "customerId": "CUST001",
            "active": true,
            "validationMessage": "Policy is valid"
        }"#;
        let response: PolicyValidationResponse = serde_json::from_str(json).unwrap();

        assert!(response.valid);
        assert!(response.active);
        assert_eq!(response.validation_message.as_deref(), Some("Policy is valid"));
    }

    #[test]
    fn test_claim_response_wire_format() {
        let json = r#"{
            "duplicate": true,
            "hasExistingClaims": true,
            "existingClaims": [],
            "validationMessage": "Duplicate claim found"
        }"#;
        let response: ClaimValidationResponse = serde_json::from_str(json).unwrap();

        assert!(response.duplicate);
        assert!(response.has_existing_claims);
    }

    #[test]
    fn test_config_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.customer_service_url, "http://localhost:8081");
        assert_eq!(config.policy_service_url, "http://localhost:8082");
        assert_eq!(config.timeout_secs, 10);
    }
}
