//! Claims domain ports
//!
//! Port traits for the two collaborators the claims core depends on: the
//! claim store and the external lookup gateway over the customer and policy
//! services. Adapters live in `infra_db` (PostgreSQL) and `infra_gateway`
//! (HTTP); in-memory implementations in [`mock`] back the test suites and
//! local development.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimNumber, CustomerId, DomainPort, PolicyNumber, PortError};

use crate::claim::Claim;

/// Result of a policy validity lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyValidation {
    /// True only if the policy exists, belongs to the customer, and is
    /// active with an end date in the future
    pub valid: bool,
    /// Whether the policy is currently active
    pub active: bool,
    /// Human-readable detail from the policy service
    pub message: String,
}

impl PolicyValidation {
    /// Degraded result returned when the policy service cannot be reached
    pub fn unavailable() -> Self {
        Self {
            valid: false,
            active: false,
            message: "Service unavailable".to_string(),
        }
    }
}

/// Result of a duplicate-claim lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateCheck {
    /// True if an existing claim matches customer, policy, location, and
    /// incident date exactly
    pub is_duplicate: bool,
    /// Whether any claims exist against the policy for this customer
    pub has_existing_claims: bool,
    /// Human-readable detail from the policy service
    pub message: String,
}

impl DuplicateCheck {
    /// Degraded result returned when the policy service cannot be reached
    ///
    /// Duplicate checks fail open: an unreachable service does not block
    /// submission. This asymmetry with the customer and policy checks is
    /// preserved legacy behaviour.
    pub fn unavailable() -> Self {
        Self {
            is_duplicate: false,
            has_existing_claims: false,
            message: "Service unavailable".to_string(),
        }
    }
}

/// Remote lookups against the external customer and policy services
///
/// Implementations absorb transport failures rather than surfacing them:
/// each method returns a degraded value on any remote failure, so the
/// validation chain never sees an infrastructure error.
///
/// - `customer_exists` and `validate_policy` fail closed (treat the check
///   as failed)
/// - `check_duplicate` fails open (treat the check as passed)
#[async_trait]
pub trait LookupGateway: DomainPort {
    /// True only if the customer store confirms existence
    async fn customer_exists(&self, customer_id: &CustomerId) -> bool;

    /// Validates that a policy is active and owned by the customer
    async fn validate_policy(
        &self,
        policy_number: &PolicyNumber,
        customer_id: &CustomerId,
    ) -> PolicyValidation;

    /// Checks whether a matching claim already exists
    async fn check_duplicate(
        &self,
        policy_number: &PolicyNumber,
        customer_id: &CustomerId,
        incident_location: &str,
        incident_date: DateTime<Utc>,
    ) -> DuplicateCheck;
}

/// Persistence for claims
///
/// The store is the only shared state between concurrent submissions; it is
/// responsible for its own concurrency control, in particular enforcing
/// claim-number uniqueness on insert.
#[async_trait]
pub trait ClaimStore: DomainPort {
    /// Inserts a new claim
    ///
    /// Returns `PortError::Conflict` if the claim number is already taken.
    async fn save(&self, claim: &Claim) -> Result<Claim, PortError>;

    /// Persists a status mutation of an existing claim
    ///
    /// Returns `PortError::NotFound` if the claim number is unknown.
    async fn update(&self, claim: &Claim) -> Result<Claim, PortError>;

    /// Looks up a claim by its claim number
    async fn find_by_claim_number(
        &self,
        claim_number: &ClaimNumber,
    ) -> Result<Option<Claim>, PortError>;
}

/// In-memory port implementations for tests and local development
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use std::sync::Mutex;
    use tokio::sync::RwLock;

    /// A recorded gateway invocation, used to assert stage ordering
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum GatewayCall {
        CustomerExists,
        ValidatePolicy,
        CheckDuplicate,
    }

    /// In-memory lookup gateway
    ///
    /// Holds a set of known customers, active policies keyed to their
    /// owners, and existing claims for duplicate matching. When marked
    /// unavailable it reproduces the adapter's degraded results, including
    /// the fail-closed/fail-open asymmetry.
    #[derive(Debug, Default)]
    pub struct MockLookupGateway {
        customers: RwLock<HashSet<CustomerId>>,
        policies: RwLock<HashMap<PolicyNumber, CustomerId>>,
        existing_claims: RwLock<Vec<(PolicyNumber, CustomerId, String, DateTime<Utc>)>>,
        calls: Mutex<Vec<GatewayCall>>,
        unavailable: AtomicBool,
    }

    impl MockLookupGateway {
        /// Creates an empty gateway
        pub fn new() -> Self {
            Self::default()
        }

        /// Registers a known customer
        pub async fn with_customer(self, customer_id: CustomerId) -> Self {
            self.customers.write().await.insert(customer_id);
            self
        }

        /// Registers an active policy owned by the given customer
        pub async fn with_policy(self, policy_number: PolicyNumber, owner: CustomerId) -> Self {
            self.policies.write().await.insert(policy_number, owner);
            self
        }

        /// Registers an existing claim for duplicate matching
        pub async fn with_existing_claim(
            self,
            policy_number: PolicyNumber,
            customer_id: CustomerId,
            incident_location: impl Into<String>,
            incident_date: DateTime<Utc>,
        ) -> Self {
            self.existing_claims.write().await.push((
                policy_number,
                customer_id,
                incident_location.into(),
                incident_date,
            ));
            self
        }

        /// Simulates the upstream services being unreachable
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::Relaxed);
        }

        /// Returns the invocations recorded so far
        pub fn calls(&self) -> Vec<GatewayCall> {
            self.calls.lock().expect("calls lock poisoned").clone()
        }

        fn record(&self, call: GatewayCall) {
            self.calls.lock().expect("calls lock poisoned").push(call);
        }

        fn is_unavailable(&self) -> bool {
            self.unavailable.load(Ordering::Relaxed)
        }
    }

    impl DomainPort for MockLookupGateway {}

    #[async_trait]
    impl LookupGateway for MockLookupGateway {
        async fn customer_exists(&self, customer_id: &CustomerId) -> bool {
            self.record(GatewayCall::CustomerExists);
            if self.is_unavailable() {
                return false;
            }
            self.customers.read().await.contains(customer_id)
        }

        async fn validate_policy(
            &self,
            policy_number: &PolicyNumber,
            customer_id: &CustomerId,
        ) -> PolicyValidation {
            self.record(GatewayCall::ValidatePolicy);
            if self.is_unavailable() {
                return PolicyValidation::unavailable();
            }
            match self.policies.read().await.get(policy_number) {
                Some(owner) if owner == customer_id => PolicyValidation {
                    valid: true,
                    active: true,
                    message: "Policy is valid".to_string(),
                },
                Some(_) => PolicyValidation {
                    valid: false,
                    active: true,
                    message: "Policy does not belong to customer".to_string(),
                },
                None => PolicyValidation {
                    valid: false,
                    active: false,
                    message: "Policy not found".to_string(),
                },
            }
        }

        async fn check_duplicate(
            &self,
            policy_number: &PolicyNumber,
            customer_id: &CustomerId,
            incident_location: &str,
            incident_date: DateTime<Utc>,
        ) -> DuplicateCheck {
            self.record(GatewayCall::CheckDuplicate);
            if self.is_unavailable() {
                return DuplicateCheck::unavailable();
            }
            let claims = self.existing_claims.read().await;
            let is_duplicate = claims.iter().any(|(policy, customer, location, date)| {
                policy == policy_number
                    && customer == customer_id
                    && location == incident_location
                    && *date == incident_date
            });
            let has_existing_claims = claims
                .iter()
                .any(|(policy, customer, _, _)| policy == policy_number && customer == customer_id);
            DuplicateCheck {
                is_duplicate,
                has_existing_claims,
                message: if is_duplicate {
                    "Duplicate claim found".to_string()
                } else {
                    "No duplicate found".to_string()
                },
            }
        }
    }

    /// In-memory claim store
    ///
    /// Enforces claim-number uniqueness the way the database does, and can
    /// inject a configurable number of artificial uniqueness conflicts to
    /// exercise the submission service's regeneration retry.
    #[derive(Debug, Default)]
    pub struct MockClaimStore {
        claims: RwLock<HashMap<String, Claim>>,
        forced_conflicts: AtomicU32,
    }

    impl MockClaimStore {
        /// Creates an empty store
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes the next `count` saves fail with a uniqueness conflict
        pub fn force_conflicts(&self, count: u32) {
            self.forced_conflicts.store(count, Ordering::Relaxed);
        }

        /// Number of claims currently persisted
        pub async fn count(&self) -> usize {
            self.claims.read().await.len()
        }
    }

    impl DomainPort for MockClaimStore {}

    #[async_trait]
    impl ClaimStore for MockClaimStore {
        async fn save(&self, claim: &Claim) -> Result<Claim, PortError> {
            if self
                .forced_conflicts
                .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(PortError::conflict(format!(
                    "claim number {} already exists",
                    claim.claim_number
                )));
            }

            let mut claims = self.claims.write().await;
            let key = claim.claim_number.as_str().to_string();
            if claims.contains_key(&key) {
                return Err(PortError::conflict(format!(
                    "claim number {} already exists",
                    claim.claim_number
                )));
            }
            claims.insert(key, claim.clone());
            Ok(claim.clone())
        }

        async fn update(&self, claim: &Claim) -> Result<Claim, PortError> {
            let mut claims = self.claims.write().await;
            let key = claim.claim_number.as_str().to_string();
            if !claims.contains_key(&key) {
                return Err(PortError::not_found("Claim", &claim.claim_number));
            }
            claims.insert(key, claim.clone());
            Ok(claim.clone())
        }

        async fn find_by_claim_number(
            &self,
            claim_number: &ClaimNumber,
        ) -> Result<Option<Claim>, PortError> {
            Ok(self.claims.read().await.get(claim_number.as_str()).cloned())
        }
    }
}
