//! Tests for the claim aggregate

use core_kernel::ClaimNumber;
use rust_decimal_macros::dec;

use domain_claims::{Claim, ClaimError, ClaimStatus, ClaimType};
use test_utils::{ClaimRequestBuilder, IdFixtures};

fn collision_claim() -> Claim {
    Claim::new(ClaimNumber::generate(), ClaimRequestBuilder::new().build())
}

#[test]
fn test_new_claim_defaults() {
    let claim = collision_claim();

    assert_eq!(claim.status, ClaimStatus::Submitted);
    assert_eq!(claim.claim_type, ClaimType::Collision);
    assert_eq!(claim.customer_id, IdFixtures::customer_id());
    assert_eq!(claim.policy_number, IdFixtures::policy_number());
    assert_eq!(claim.amount, dec!(5000.00));
    assert!(claim.claim_number.as_str().starts_with("CLM-"));
    assert_eq!(claim.created_at, claim.updated_at);
}

#[test]
fn test_set_status_is_permissive() {
    let mut claim = collision_claim();

    // Legacy behaviour: any status from any prior state
    claim.set_status(ClaimStatus::Paid);
    assert_eq!(claim.status, ClaimStatus::Paid);
    claim.set_status(ClaimStatus::Submitted);
    assert_eq!(claim.status, ClaimStatus::Submitted);
}

#[test]
fn test_set_status_refreshes_updated_at() {
    let mut claim = collision_claim();
    let before = claim.updated_at;

    claim.set_status(ClaimStatus::Pending);

    assert!(claim.updated_at >= before);
    assert_eq!(claim.created_at, before);
}

#[test]
fn test_transition_happy_path() {
    let mut claim = collision_claim();

    claim.transition_to(ClaimStatus::Pending).unwrap();
    claim.transition_to(ClaimStatus::Investigating).unwrap();
    claim.transition_to(ClaimStatus::Approved).unwrap();
    claim.transition_to(ClaimStatus::Paid).unwrap();
    claim.transition_to(ClaimStatus::Closed).unwrap();
}

#[test]
fn test_transition_rejection_path() {
    let mut claim = collision_claim();

    claim.transition_to(ClaimStatus::Pending).unwrap();
    claim.transition_to(ClaimStatus::Rejected).unwrap();
    claim.transition_to(ClaimStatus::Closed).unwrap();
}

#[test]
fn test_transition_rejects_illegal_moves() {
    let mut claim = collision_claim();

    let err = claim.transition_to(ClaimStatus::Paid).unwrap_err();
    assert!(matches!(err, ClaimError::InvalidStatusTransition { .. }));
    // Status untouched on a rejected transition
    assert_eq!(claim.status, ClaimStatus::Submitted);
}

#[test]
fn test_transition_rejects_closed_reopening() {
    let mut claim = collision_claim();
    claim.set_status(ClaimStatus::Closed);

    assert!(claim.transition_to(ClaimStatus::Pending).is_err());
    assert!(claim.transition_to(ClaimStatus::Investigating).is_err());
}

#[test]
fn test_status_wire_format() {
    let json = serde_json::to_string(&ClaimStatus::Investigating).unwrap();
    assert_eq!(json, "\"INVESTIGATING\"");

    let json = serde_json::to_string(&ClaimType::PersonalInjury).unwrap();
    assert_eq!(json, "\"PERSONAL_INJURY\"");

    let parsed: ClaimStatus = serde_json::from_str("\"PENDING\"").unwrap();
    assert_eq!(parsed, ClaimStatus::Pending);
}

#[test]
fn test_all_statuses_serialize() {
    for status in ClaimStatus::ALL {
        let json = serde_json::to_string(&status).unwrap();
        let back: ClaimStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, back);
    }
}
