//! Claim submission and lifecycle service
//!
//! Coordinates the validation chain, claim-number assignment, and
//! persistence for new submissions, and owns status mutations of existing
//! claims. Collaborators are passed in at construction; the service holds no
//! global state.

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::{ClaimNumber, PortError};

use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;
use crate::ports::{ClaimStore, LookupGateway};
use crate::request::ClaimRequest;
use crate::validation::ClaimValidator;

/// Configuration for the claims service
#[derive(Debug, Clone)]
pub struct ClaimsServiceConfig {
    /// When true, status updates must follow the lifecycle transition
    /// table; when false (the legacy default) any status is accepted from
    /// any prior state.
    pub enforce_status_transitions: bool,
    /// How many claim numbers to try before giving up on a uniqueness
    /// conflict at the store.
    pub max_claim_number_attempts: u32,
}

impl Default for ClaimsServiceConfig {
    fn default() -> Self {
        Self {
            enforce_status_transitions: false,
            max_claim_number_attempts: 3,
        }
    }
}

/// The claim submission coordinator and status manager
pub struct ClaimsService {
    store: Arc<dyn ClaimStore>,
    validator: ClaimValidator,
    config: ClaimsServiceConfig,
}

impl ClaimsService {
    /// Creates a service over the given store and lookup gateway
    pub fn new(
        store: Arc<dyn ClaimStore>,
        gateway: Arc<dyn LookupGateway>,
        config: ClaimsServiceConfig,
    ) -> Self {
        Self {
            store,
            validator: ClaimValidator::new(gateway),
            config,
        }
    }

    /// Submits a claim request
    ///
    /// Runs the validation chain; a failed verdict is returned as
    /// [`ClaimError::ValidationRejected`] with the failing stage's message
    /// and nothing is persisted. On a pass, a claim is built with a fresh
    /// claim number, its status forced to `Pending`, and saved. A
    /// uniqueness conflict on the claim number triggers regeneration, up to
    /// the configured attempt budget.
    pub async fn submit_claim(&self, request: ClaimRequest) -> Result<Claim, ClaimError> {
        let verdict = self.validator.validate(&request).await;
        if !verdict.is_valid() {
            info!(
                customer_id = %request.customer_id,
                policy_number = %request.policy_number,
                reason = verdict.message(),
                "claim rejected"
            );
            return Err(ClaimError::ValidationRejected(verdict.into_message()));
        }

        let mut claim = Claim::new(ClaimNumber::generate(), request);
        // The constructor default is Submitted; accepted claims always
        // enter the lifecycle as Pending.
        claim.set_status(ClaimStatus::Pending);

        let mut attempts = 1;
        loop {
            match self.store.save(&claim).await {
                Ok(saved) => {
                    info!(
                        claim_number = %saved.claim_number,
                        customer_id = %saved.customer_id,
                        "claim submitted"
                    );
                    return Ok(saved);
                }
                Err(err) if err.is_conflict() && attempts < self.config.max_claim_number_attempts => {
                    warn!(
                        claim_number = %claim.claim_number,
                        attempt = attempts,
                        "claim number collision, regenerating"
                    );
                    claim.claim_number = ClaimNumber::generate();
                    attempts += 1;
                }
                Err(err) => return Err(ClaimError::Storage(err)),
            }
        }
    }

    /// Looks up a claim by its claim number
    ///
    /// A pure read; repeated calls return the same persisted fields.
    pub async fn get_claim(&self, claim_number: &ClaimNumber) -> Result<Option<Claim>, ClaimError> {
        Ok(self.store.find_by_claim_number(claim_number).await?)
    }

    /// Updates the status of an existing claim
    ///
    /// Fails with [`ClaimError::ClaimNotFound`] for unknown claim numbers;
    /// no mutation happens in that case. Transition legality is only
    /// checked when `enforce_status_transitions` is set.
    pub async fn update_status(
        &self,
        claim_number: &ClaimNumber,
        status: ClaimStatus,
    ) -> Result<Claim, ClaimError> {
        let mut claim = self
            .store
            .find_by_claim_number(claim_number)
            .await?
            .ok_or_else(|| ClaimError::ClaimNotFound(claim_number.to_string()))?;

        if self.config.enforce_status_transitions {
            claim.transition_to(status)?;
        } else {
            claim.set_status(status);
        }

        let updated = self.store.update(&claim).await.map_err(|err| match err {
            PortError::NotFound { .. } => ClaimError::ClaimNotFound(claim_number.to_string()),
            other => ClaimError::Storage(other),
        })?;

        info!(claim_number = %claim_number, status = ?status, "claim status updated");
        Ok(updated)
    }
}
