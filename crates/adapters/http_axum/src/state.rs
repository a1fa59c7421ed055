//! Shared application state for axum handlers.

use std::sync::Arc;

use scorecard_app::ports::{AssignmentRepository, KpiRepository};
use scorecard_app::services::kpi_service::KpiService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<KR, AR> {
    /// KPI use-case service.
    pub kpi_service: Arc<KpiService<KR, AR>>,
}

impl<KR, AR> Clone for AppState<KR, AR> {
    fn clone(&self) -> Self {
        Self {
            kpi_service: Arc::clone(&self.kpi_service),
        }
    }
}

impl<KR, AR> AppState<KR, AR>
where
    KR: KpiRepository + Send + Sync + 'static,
    AR: AssignmentRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(kpi_service: KpiService<KR, AR>) -> Self {
        Self {
            kpi_service: Arc::new(kpi_service),
        }
    }
}
