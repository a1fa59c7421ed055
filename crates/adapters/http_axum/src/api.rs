//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod kpis;

use axum::Router;
use axum::routing::{get, post};

use scorecard_app::ports::{AssignmentRepository, KpiRepository};

use crate::state::AppState;

/// Build the API sub-router.
pub fn routes<KR, AR>() -> Router<AppState<KR, AR>>
where
    KR: KpiRepository + Send + Sync + 'static,
    AR: AssignmentRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/kpi", post(kpis::create::<KR, AR>))
        .route("/kpis", get(kpis::list::<KR, AR>))
        .route(
            "/kpi/{id}",
            get(kpis::get::<KR, AR>)
                .put(kpis::update::<KR, AR>)
                .delete(kpis::delete::<KR, AR>),
        )
}
