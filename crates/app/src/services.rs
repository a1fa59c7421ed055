//! Application services — one struct per use-case group.

pub mod kpi_service;
