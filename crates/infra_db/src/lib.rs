//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for the claims pipeline, implementing the
//! `ClaimStore` port over SQLx. The crate owns pool construction, embedded
//! migrations, and the mapping from database failures to port errors.

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool};
pub use repositories::PostgresClaimStore;
