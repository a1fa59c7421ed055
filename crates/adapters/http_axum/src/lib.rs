//! # scorecard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API for KPI records (`/kpi/{id}`, `/kpi`, `/kpis`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into the uniform `{success, ...}` envelope
//!
//! ## Dependency rule
//! Depends on `scorecard-app` (for port traits and services) and
//! `scorecard-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod document;
pub mod error;
pub mod router;
pub mod state;
