//! # scorecard-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `scorecard-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `scorecard-app` (for port traits) and `scorecard-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod assignment_repo;
pub mod error;
pub mod kpi_repo;
pub mod pool;

pub use assignment_repo::SqliteAssignmentRepository;
pub use error::StorageError;
pub use kpi_repo::SqliteKpiRepository;
pub use pool::{Config, Database};
