//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ScorecardError`] via `#[from]`. The HTTP adapter maps the four
//! variants onto status codes: validation and conflict failures are the
//! caller's fault, missing rows are 404, and anything from the storage
//! layer is an opaque 500.

/// Top-level error for all use-case and adapter failures.
#[derive(Debug, thiserror::Error)]
pub enum ScorecardError {
    /// The request payload failed validation before any storage access.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No row exists for the requested identifier.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The operation is blocked by another record.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// An unexpected failure in the persistence layer.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Malformed or missing request input.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The request body was not parseable as JSON at all.
    #[error("Invalid JSON in request body")]
    InvalidJson,

    /// The `elements` field was missing or not a JSON array.
    #[error("elements must be an array")]
    ElementsNotArray,

    /// The optional `updatedAt` field was not an ISO-8601 timestamp.
    #[error("updatedAt must be an ISO-8601 timestamp")]
    InvalidTimestamp,

    /// A KPI name must be a non-empty string.
    #[error("kpi_name must not be empty")]
    EmptyName,

    /// The `kpi_name` field was present but not a JSON string.
    #[error("kpi_name must be a string")]
    NameNotString,
}

/// A lookup by identifier matched no row.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Human-readable entity name (e.g. `"KPI"`).
    pub entity: &'static str,
    /// The identifier that failed to match.
    pub id: String,
}

/// The operation conflicts with existing data.
#[derive(Debug, thiserror::Error)]
pub enum ConflictError {
    /// At least one assignment still references the KPI by name.
    #[error("KPI '{name}' is currently assigned and cannot be deleted")]
    KpiInUse {
        /// Name of the KPI that is still referenced.
        name: String,
    },

    /// Another KPI already carries this name.
    #[error("a KPI named '{name}' already exists")]
    DuplicateName {
        /// The name that collided.
        name: String,
    },
}
