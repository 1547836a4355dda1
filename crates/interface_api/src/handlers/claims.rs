//! Claims handlers

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::ClaimNumber;

use crate::dto::claims::{ClaimResponse, SubmitClaimRequest, UpdateStatusRequest};
use crate::error::ApiError;
use crate::AppState;

/// Submits a new claim
///
/// Returns 201 with the persisted claim on success, 422 with the failing
/// stage's message when validation rejects the request.
pub async fn submit_claim(
    State(state): State<AppState>,
    Json(request): Json<SubmitClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let claim = state.service.submit_claim(request.into_domain()?).await?;
    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// Gets a claim by its claim number
pub async fn get_claim(
    State(state): State<AppState>,
    Path(claim_number): Path<String>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim_number = parse_claim_number(&claim_number)?;
    let claim = state
        .service
        .get_claim(&claim_number)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Claim not found: {claim_number}")))?;

    Ok(Json(claim.into()))
}

/// Updates a claim's status
pub async fn update_status(
    State(state): State<AppState>,
    Path(claim_number): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim_number = parse_claim_number(&claim_number)?;
    let claim = state
        .service
        .update_status(&claim_number, request.status)
        .await?;

    Ok(Json(claim.into()))
}

/// A malformed claim number can never resolve to a claim
fn parse_claim_number(value: &str) -> Result<ClaimNumber, ApiError> {
    ClaimNumber::from_str(value).map_err(|_| ApiError::NotFound(format!("Claim not found: {value}")))
}
