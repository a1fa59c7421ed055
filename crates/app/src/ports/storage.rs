//! Storage port — repository traits for persistence.
//!
//! Trait methods return `impl Future + Send` rather than using `async fn`
//! so that the `Send` bound is explicit; implementations are free to use
//! plain `async fn`.

use std::future::Future;

use scorecard_domain::assignment::AssignedKpi;
use scorecard_domain::error::ScorecardError;
use scorecard_domain::id::KpiId;
use scorecard_domain::kpi::{Kpi, NewKpi};

/// Persistence operations for KPI records.
pub trait KpiRepository {
    /// Insert a new record and return it with its assigned id.
    fn create(&self, new: NewKpi) -> impl Future<Output = Result<Kpi, ScorecardError>> + Send;

    /// Look up a record by primary key.
    fn get_by_id(
        &self,
        id: KpiId,
    ) -> impl Future<Output = Result<Option<Kpi>, ScorecardError>> + Send;

    /// Look up a record by its unique name.
    fn get_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Kpi>, ScorecardError>> + Send;

    /// List all records.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Kpi>, ScorecardError>> + Send;

    /// Persist changed fields of an existing record.
    fn update(&self, kpi: Kpi) -> impl Future<Output = Result<Kpi, ScorecardError>> + Send;

    /// Delete a record by primary key.
    fn delete(&self, id: KpiId) -> impl Future<Output = Result<(), ScorecardError>> + Send;
}

/// Read-only access to KPI assignments.
pub trait AssignmentRepository {
    /// Fetch assignments referencing `kpi_name`, up to `limit` rows.
    ///
    /// Callers probing for existence pass `limit = 1`.
    fn find_by_kpi_name(
        &self,
        kpi_name: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<AssignedKpi>, ScorecardError>> + Send;
}
