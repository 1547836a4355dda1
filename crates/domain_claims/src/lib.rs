//! Auto Claims Domain
//!
//! This crate implements the claim validation and submission pipeline: an
//! ordered, short-circuiting chain of checks (customer existence, policy
//! validity, duplicate detection, business rules) that a claim request must
//! pass before it is persisted with a generated claim number.
//!
//! # Submission Flow
//!
//! ```text
//! ClaimRequest -> customer -> policy -> duplicate -> business rules -> Claim (pending)
//!                    |           |          |              |
//!                    +-----------+----------+--------------+--> rejection (first failure wins)
//! ```
//!
//! External collaborators are reached through the port traits in [`ports`];
//! services take their ports as constructor parameters, so wiring is explicit.

pub mod claim;
pub mod request;
pub mod rules;
pub mod validation;
pub mod service;
pub mod ports;
pub mod error;

pub use claim::{Claim, ClaimStatus, ClaimType};
pub use request::ClaimRequest;
pub use validation::{ClaimValidator, ValidationResult};
pub use service::{ClaimsService, ClaimsServiceConfig};
pub use ports::{ClaimStore, DuplicateCheck, LookupGateway, PolicyValidation};
pub use error::ClaimError;
