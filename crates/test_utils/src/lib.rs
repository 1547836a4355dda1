//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the auto claims test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction

pub mod fixtures;
pub mod builders;

pub use fixtures::*;
pub use builders::*;
