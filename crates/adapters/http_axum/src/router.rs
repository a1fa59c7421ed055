//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use scorecard_app::ports::{AssignmentRepository, KpiRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the KPI API at the root alongside a `/health` probe. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG`
/// level using the `tracing` ecosystem.
pub fn build<KR, AR>(state: AppState<KR, AR>) -> Router
where
    KR: KpiRepository + Send + Sync + 'static,
    AR: AssignmentRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
