//! Integration tests for identifier types

use std::collections::HashSet;
use std::str::FromStr;

use core_kernel::{ClaimId, ClaimNumber, CustomerId, IdentifierError, PolicyNumber};

#[test]
fn test_claim_number_matches_documented_format() {
    for _ in 0..100 {
        let number = ClaimNumber::generate();
        let value = number.as_str();
        assert!(value.starts_with("CLM-"), "missing prefix: {value}");
        let suffix = &value["CLM-".len()..];
        assert_eq!(suffix.len(), 8);
        assert!(
            suffix.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
            "suffix not uppercase base-36: {value}"
        );
    }
}

#[test]
fn test_claim_numbers_are_distinct_in_practice() {
    let numbers: HashSet<String> = (0..1000)
        .map(|_| ClaimNumber::generate().as_str().to_string())
        .collect();
    // 36^8 possible values; 1000 draws colliding would indicate a broken RNG
    assert_eq!(numbers.len(), 1000);
}

#[test]
fn test_claim_number_parsing() {
    let parsed = ClaimNumber::from_str("CLM-A1B2C3D4").unwrap();
    assert_eq!(parsed.as_str(), "CLM-A1B2C3D4");

    let err = ClaimNumber::from_str("CLM-a1b2c3d4").unwrap_err();
    assert!(matches!(err, IdentifierError::InvalidClaimNumber(_)));
}

#[test]
fn test_business_codes_round_trip_serde() {
    let customer = CustomerId::new("CUST001").unwrap();
    let json = serde_json::to_string(&customer).unwrap();
    assert_eq!(json, "\"CUST001\"");
    let back: CustomerId = serde_json::from_str(&json).unwrap();
    assert_eq!(customer, back);

    let policy = PolicyNumber::new("POL001").unwrap();
    assert_eq!(policy.to_string(), "POL001");
}

#[test]
fn test_claim_id_uuid_conversion() {
    let id = ClaimId::new_v7();
    let uuid: uuid::Uuid = id.into();
    assert_eq!(ClaimId::from_uuid(uuid), id);
}
