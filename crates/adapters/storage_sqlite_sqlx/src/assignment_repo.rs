//! `SQLite` implementation of [`AssignmentRepository`].
//!
//! Assignments are written by another part of the system; this adapter
//! only reads them to answer the deletion guard.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use scorecard_app::ports::AssignmentRepository;
use scorecard_domain::assignment::AssignedKpi;
use scorecard_domain::error::ScorecardError;
use scorecard_domain::id::AssignmentId;

use crate::error::StorageError;

struct Wrapper(AssignedKpi);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("assigned_kpi_id")?;
        let kpi_name: String = row.try_get("kpi_name")?;
        let assignee: String = row.try_get("assignee")?;
        let assigned_at_str: String = row.try_get("assigned_at")?;

        let assigned_at = chrono::DateTime::parse_from_rfc3339(&assigned_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(AssignedKpi {
            id: AssignmentId::from_i64(id),
            kpi_name,
            assignee,
            assigned_at,
        }))
    }
}

const SELECT_BY_KPI_NAME: &str = "SELECT * FROM assigned_kpis WHERE kpi_name = ? LIMIT ?";

/// `SQLite`-backed assignment repository.
pub struct SqliteAssignmentRepository {
    pool: SqlitePool,
}

impl SqliteAssignmentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AssignmentRepository for SqliteAssignmentRepository {
    async fn find_by_kpi_name(
        &self,
        kpi_name: &str,
        limit: usize,
    ) -> Result<Vec<AssignedKpi>, ScorecardError> {
        let limit = i32::try_from(limit).unwrap_or(i32::MAX);
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_KPI_NAME)
            .bind(kpi_name)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
