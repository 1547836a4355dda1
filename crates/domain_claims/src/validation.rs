//! Claim validation orchestrator
//!
//! Runs the ordered validation chain over a claim request: customer
//! existence, policy validity, duplicate detection, then business rules.
//! Each stage yields a [`ValidationResult`]; the first failure short-circuits
//! the chain and becomes the final verdict. Stages execute strictly
//! sequentially; stage N+1 never starts before stage N's result is known.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use core_kernel::{CustomerId, PolicyNumber};

use crate::ports::LookupGateway;
use crate::request::ClaimRequest;
use crate::rules;

/// Outcome of a single validation stage, or of the whole chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    message: String,
}

impl ValidationResult {
    /// A passing result
    pub fn passed(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    /// A failing result
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Whether the stage (or chain) passed
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The stage message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the result, returning the message
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Runs the four-stage validation chain against the lookup gateway
///
/// The stage order is fixed and must not be reordered: business rules run
/// last so that external-service failures are reported before local
/// validation failures.
#[derive(Clone)]
pub struct ClaimValidator {
    gateway: Arc<dyn LookupGateway>,
}

impl ClaimValidator {
    /// Creates a validator over the given lookup gateway
    pub fn new(gateway: Arc<dyn LookupGateway>) -> Self {
        Self { gateway }
    }

    /// Validates a claim request, short-circuiting on the first failure
    pub async fn validate(&self, request: &ClaimRequest) -> ValidationResult {
        let customer = self.validate_customer(&request.customer_id).await;
        if !customer.is_valid() {
            return customer;
        }

        let policy = self
            .validate_policy(&request.policy_number, &request.customer_id)
            .await;
        if !policy.is_valid() {
            return policy;
        }

        let details = self.validate_claim_details(request).await;
        if !details.is_valid() {
            return details;
        }

        rules::evaluate(request, Utc::now())
    }

    async fn validate_customer(&self, customer_id: &CustomerId) -> ValidationResult {
        if self.gateway.customer_exists(customer_id).await {
            ValidationResult::passed("Customer validation passed")
        } else {
            debug!(%customer_id, "customer check failed");
            ValidationResult::failed(format!("Customer not found: {customer_id}"))
        }
    }

    async fn validate_policy(
        &self,
        policy_number: &PolicyNumber,
        customer_id: &CustomerId,
    ) -> ValidationResult {
        let response = self.gateway.validate_policy(policy_number, customer_id).await;
        if response.valid {
            ValidationResult::passed("Policy validation passed")
        } else {
            debug!(%policy_number, message = %response.message, "policy check failed");
            ValidationResult::failed(format!("Policy validation failed: {}", response.message))
        }
    }

    async fn validate_claim_details(&self, request: &ClaimRequest) -> ValidationResult {
        let response = self
            .gateway
            .check_duplicate(
                &request.policy_number,
                &request.customer_id,
                &request.incident_location,
                request.incident_date,
            )
            .await;
        if response.is_duplicate {
            debug!(policy_number = %request.policy_number, "duplicate claim detected");
            ValidationResult::failed("Duplicate claim detected")
        } else {
            ValidationResult::passed("Claim details validation passed")
        }
    }
}
