//! # scorecard-domain
//!
//! Pure domain model for the scorecard KPI service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **KPIs** (named form definitions plus metadata)
//! - Define **Assignments** (records that a KPI is in active use elsewhere;
//!   an assignment blocks deletion of the KPI it references)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod assignment;
pub mod kpi;
