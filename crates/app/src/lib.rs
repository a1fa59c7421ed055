//! # scorecard-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `KpiRepository` — CRUD for KPI records
//!   - `AssignmentRepository` — read-only probe for assignments
//! - Define **driving/inbound ports** as use-case structs:
//!   - `KpiService` — get, list, create, update elements, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `scorecard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
