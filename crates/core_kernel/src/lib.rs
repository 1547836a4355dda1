//! Core Kernel - Foundational types for the auto claims system
//!
//! This crate provides the building blocks shared by every domain module:
//! - Strongly-typed business identifiers (claim numbers, customer and policy codes)
//! - Common error types
//! - Port abstractions for swappable storage and lookup adapters

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::{ClaimId, ClaimNumber, CustomerId, PolicyNumber, IdentifierError};
pub use error::CoreError;
pub use ports::{DomainPort, PortError};
