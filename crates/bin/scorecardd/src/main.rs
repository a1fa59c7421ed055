//! # scorecardd — scorecard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct the application service, injecting repositories via port traits
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tracing_subscriber::EnvFilter;

use scorecard_adapter_http_axum::state::AppState;
use scorecard_adapter_storage_sqlite_sqlx::{
    Config as DbConfig, SqliteAssignmentRepository, SqliteKpiRepository,
};
use scorecard_app::services::kpi_service::KpiService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let kpi_repo = SqliteKpiRepository::new(pool.clone());
    let assignment_repo = SqliteAssignmentRepository::new(pool);

    // Services
    let kpi_service = KpiService::new(kpi_repo, assignment_repo);

    // HTTP
    let state = AppState::new(kpi_service);
    let app = scorecard_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "scorecardd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
