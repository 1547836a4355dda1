//! Repository implementations

pub mod claims;

pub use claims::PostgresClaimStore;
