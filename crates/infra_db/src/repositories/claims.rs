//! Claims repository implementation
//!
//! PostgreSQL adapter for the [`ClaimStore`] port. Claim-number uniqueness
//! is enforced by a unique index; the resulting `23505` violation surfaces
//! as `PortError::Conflict` so the submission service can regenerate.
//!
//! Status and claim type are stored as text in the same SCREAMING_SNAKE_CASE
//! format they travel over the wire in.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{ClaimId, ClaimNumber, CustomerId, DomainPort, PolicyNumber, PortError};
use domain_claims::{Claim, ClaimStatus, ClaimStore, ClaimType};

use crate::error::DatabaseError;

const CLAIM_COLUMNS: &str = "id, claim_number, customer_id, policy_number, status, claim_type, \
     amount, description, incident_date, incident_location, created_at, updated_at";

/// PostgreSQL-backed claim store
#[derive(Debug, Clone)]
pub struct PostgresClaimStore {
    pool: PgPool,
}

impl PostgresClaimStore {
    /// Creates a store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PostgresClaimStore {}

#[async_trait]
impl ClaimStore for PostgresClaimStore {
    async fn save(&self, claim: &Claim) -> Result<Claim, PortError> {
        let sql = format!(
            "INSERT INTO claims ({CLAIM_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {CLAIM_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(claim.id.as_uuid())
            .bind(claim.claim_number.as_str())
            .bind(claim.customer_id.as_str())
            .bind(claim.policy_number.as_str())
            .bind(encode_enum(&claim.status)?)
            .bind(encode_enum(&claim.claim_type)?)
            .bind(claim.amount)
            .bind(claim.description.as_deref())
            .bind(claim.incident_date)
            .bind(claim.incident_location.as_str())
            .bind(claim.created_at)
            .bind(claim.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::from)?;

        Ok(row.into_claim()?)
    }

    async fn update(&self, claim: &Claim) -> Result<Claim, PortError> {
        let sql = format!(
            "UPDATE claims SET status = $2, updated_at = $3 \
             WHERE claim_number = $1 \
             RETURNING {CLAIM_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(claim.claim_number.as_str())
            .bind(encode_enum(&claim.status)?)
            .bind(claim.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::from)?
            .ok_or_else(|| PortError::not_found("Claim", &claim.claim_number))?;

        Ok(row.into_claim()?)
    }

    async fn find_by_claim_number(
        &self,
        claim_number: &ClaimNumber,
    ) -> Result<Option<Claim>, PortError> {
        let sql = format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE claim_number = $1");
        let row = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(claim_number.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::from)?;

        match row {
            Some(row) => Ok(Some(row.into_claim()?)),
            None => Ok(None),
        }
    }
}

/// Database row for a claim
#[derive(Debug, Clone, sqlx::FromRow)]
struct ClaimRow {
    id: Uuid,
    claim_number: String,
    customer_id: String,
    policy_number: String,
    status: String,
    claim_type: String,
    amount: Decimal,
    description: Option<String>,
    incident_date: DateTime<Utc>,
    incident_location: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ClaimRow {
    fn into_claim(self) -> Result<Claim, DatabaseError> {
        Ok(Claim {
            id: ClaimId::from_uuid(self.id),
            claim_number: ClaimNumber::from_str(&self.claim_number)
                .map_err(|e| DatabaseError::SerializationError(e.to_string()))?,
            customer_id: CustomerId::new(self.customer_id)
                .map_err(|e| DatabaseError::SerializationError(e.to_string()))?,
            policy_number: PolicyNumber::new(self.policy_number)
                .map_err(|e| DatabaseError::SerializationError(e.to_string()))?,
            status: decode_enum::<ClaimStatus>(&self.status)?,
            claim_type: decode_enum::<ClaimType>(&self.claim_type)?,
            amount: self.amount,
            description: self.description,
            incident_date: self.incident_date,
            incident_location: self.incident_location,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Renders a domain enum into its stored text form
fn encode_enum<T: Serialize>(value: &T) -> Result<String, DatabaseError> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => Ok(s),
        Ok(other) => Err(DatabaseError::SerializationError(format!(
            "expected string encoding, got {other}"
        ))),
        Err(e) => Err(DatabaseError::SerializationError(e.to_string())),
    }
}

/// Parses a stored text value back into a domain enum
fn decode_enum<T: DeserializeOwned>(value: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|e| DatabaseError::SerializationError(format!("'{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_utils::test_claim;

    #[test]
    fn test_enum_storage_format() {
        assert_eq!(encode_enum(&ClaimStatus::Pending).unwrap(), "PENDING");
        assert_eq!(
            encode_enum(&ClaimType::PersonalInjury).unwrap(),
            "PERSONAL_INJURY"
        );

        let status: ClaimStatus = decode_enum("INVESTIGATING").unwrap();
        assert_eq!(status, ClaimStatus::Investigating);
    }

    #[test]
    fn test_decode_rejects_unknown_value() {
        assert!(decode_enum::<ClaimStatus>("NOT_A_STATUS").is_err());
    }

    #[test]
    fn test_row_round_trips_claim() {
        let claim = test_claim();
        let row = ClaimRow {
            id: *claim.id.as_uuid(),
            claim_number: claim.claim_number.as_str().to_string(),
            customer_id: claim.customer_id.as_str().to_string(),
            policy_number: claim.policy_number.as_str().to_string(),
            status: encode_enum(&claim.status).unwrap(),
            claim_type: encode_enum(&claim.claim_type).unwrap(),
            amount: dec!(5000.00),
            description: claim.description.clone(),
            incident_date: claim.incident_date,
            incident_location: claim.incident_location.clone(),
            created_at: claim.created_at,
            updated_at: claim.updated_at,
        };

        let restored = row.into_claim().unwrap();
        assert_eq!(restored, claim);
    }

    #[test]
    fn test_row_rejects_malformed_claim_number() {
        let claim = test_claim();
        let row = ClaimRow {
            id: *claim.id.as_uuid(),
            claim_number: "not-a-claim-number".to_string(),
            customer_id: claim.customer_id.as_str().to_string(),
            policy_number: claim.policy_number.as_str().to_string(),
            status: "PENDING".to_string(),
            claim_type: "COLLISION".to_string(),
            amount: dec!(5000.00),
            description: None,
            incident_date: claim.incident_date,
            incident_location: claim.incident_location.clone(),
            created_at: claim.created_at,
            updated_at: claim.updated_at,
        };

        assert!(row.into_claim().is_err());
    }
}
