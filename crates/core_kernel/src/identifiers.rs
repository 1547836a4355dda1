//! Strongly-typed identifiers for domain entities
//!
//! Customer and policy identifiers are opaque business codes issued by the
//! upstream customer and policy systems; claim numbers are generated locally.
//! Newtype wrappers prevent accidental mixing of the different identifier
//! kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised when parsing identifiers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Identifier cannot be empty")]
    Empty,

    #[error("Invalid claim number '{0}': expected CLM- followed by 8 uppercase alphanumerics")]
    InvalidClaimNumber(String),
}

macro_rules! define_code {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from a non-empty code
            pub fn new(code: impl Into<String>) -> Result<Self, IdentifierError> {
                let code = code.into();
                if code.trim().is_empty() {
                    return Err(IdentifierError::Empty);
                }
                Ok(Self(code))
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

define_code!(CustomerId, "Customer code issued by the customer system (e.g. `CUST001`)");
define_code!(PolicyNumber, "Policy number issued by the policy system (e.g. `POL001`)");

/// Prefix carried by every claim number
const CLAIM_NUMBER_PREFIX: &str = "CLM-";
/// Length of the random suffix
const CLAIM_NUMBER_SUFFIX_LEN: usize = 8;
/// Uppercase base-36 alphabet used for the suffix
const CLAIM_NUMBER_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A claim number in the format `CLM-` + 8 uppercase base-36 characters
///
/// Claim numbers are generated at submission time. Uniqueness is enforced by
/// the claim store; the submission service regenerates on a conflict rather
/// than assuming collision-freedom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimNumber(String);

impl ClaimNumber {
    /// Generates a fresh random claim number
    pub fn generate() -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let mut value = String::with_capacity(CLAIM_NUMBER_PREFIX.len() + CLAIM_NUMBER_SUFFIX_LEN);
        value.push_str(CLAIM_NUMBER_PREFIX);
        for _ in 0..CLAIM_NUMBER_SUFFIX_LEN {
            let idx = rng.gen_range(0..CLAIM_NUMBER_ALPHABET.len());
            value.push(CLAIM_NUMBER_ALPHABET[idx] as char);
        }
        Self(value)
    }

    /// Returns the claim number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(value: &str) -> bool {
        let Some(suffix) = value.strip_prefix(CLAIM_NUMBER_PREFIX) else {
            return false;
        };
        suffix.len() == CLAIM_NUMBER_SUFFIX_LEN
            && suffix
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    }
}

impl fmt::Display for ClaimNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ClaimNumber {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(IdentifierError::InvalidClaimNumber(s.to_string()))
        }
    }
}

/// Opaque system identifier for a persisted claim row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(Uuid);

impl ClaimId {
    /// Creates a new time-ordered identifier (v7)
    pub fn new_v7() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ClaimId {
    fn default() -> Self {
        Self::new_v7()
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ClaimId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ClaimId> for Uuid {
    fn from(id: ClaimId) -> Uuid {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_rejects_empty() {
        assert_eq!(CustomerId::new("  "), Err(IdentifierError::Empty));
        assert!(CustomerId::new("CUST001").is_ok());
    }

    #[test]
    fn test_claim_number_generate_format() {
        let number = ClaimNumber::generate();
        assert!(ClaimNumber::is_valid(number.as_str()));
        assert_eq!(number.as_str().len(), 12);
    }

    #[test]
    fn test_claim_number_parse_round_trip() {
        let number = ClaimNumber::generate();
        let parsed: ClaimNumber = number.as_str().parse().unwrap();
        assert_eq!(number, parsed);
    }

    #[test]
    fn test_claim_number_rejects_malformed() {
        assert!("CLM-abc12345".parse::<ClaimNumber>().is_err());
        assert!("CLM-1234567".parse::<ClaimNumber>().is_err());
        assert!("CLM-123456789".parse::<ClaimNumber>().is_err());
        assert!("XYZ-12345678".parse::<ClaimNumber>().is_err());
    }
}
