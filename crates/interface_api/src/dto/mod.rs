//! Request/Response data transfer objects

pub mod claims;

pub use claims::{ClaimResponse, SubmitClaimRequest, UpdateStatusRequest};
