//! `SQLite` implementation of [`KpiRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use scorecard_app::ports::KpiRepository;
use scorecard_domain::error::ScorecardError;
use scorecard_domain::id::KpiId;
use scorecard_domain::kpi::{Kpi, NewKpi};
use scorecard_domain::time::now;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Kpi);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Kpi> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let kpi_id: i64 = row.try_get("kpi_id")?;
        let kpi_name: String = row.try_get("kpi_name")?;
        let form_data_json: String = row.try_get("form_data")?;
        let created_at_str: String = row.try_get("kpi_created_at")?;
        let updated_at_str: String = row.try_get("kpi_updated_at")?;

        let elements: Vec<serde_json::Value> = serde_json::from_str(&form_data_json)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();
        let updated_at = chrono::DateTime::parse_from_rfc3339(&updated_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Kpi {
            id: KpiId::from_i64(kpi_id),
            name: kpi_name,
            elements,
            created_at,
            updated_at,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO kpis (kpi_name, form_data, kpi_created_at, kpi_updated_at)
    VALUES (?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM kpis WHERE kpi_id = ?";
const SELECT_BY_NAME: &str = "SELECT * FROM kpis WHERE kpi_name = ?";
const SELECT_ALL: &str = "SELECT * FROM kpis ORDER BY kpi_id";

// Only the form definition and the update timestamp are mutable.
const UPDATE: &str = r"
    UPDATE kpis
    SET form_data = ?, kpi_updated_at = ?
    WHERE kpi_id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM kpis WHERE kpi_id = ?";

/// `SQLite`-backed KPI repository.
pub struct SqliteKpiRepository {
    pool: SqlitePool,
}

impl SqliteKpiRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl KpiRepository for SqliteKpiRepository {
    async fn create(&self, new: NewKpi) -> Result<Kpi, ScorecardError> {
        let form_data = serde_json::to_string(&new.elements).map_err(StorageError::from)?;
        let ts = now();

        let result = sqlx::query(INSERT)
            .bind(&new.name)
            .bind(&form_data)
            .bind(ts.to_rfc3339())
            .bind(ts.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Kpi {
            id: KpiId::from_i64(result.last_insert_rowid()),
            name: new.name,
            elements: new.elements,
            created_at: ts,
            updated_at: ts,
        })
    }

    async fn get_by_id(&self, id: KpiId) -> Result<Option<Kpi>, ScorecardError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Kpi>, ScorecardError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_NAME)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Kpi>, ScorecardError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, kpi: Kpi) -> Result<Kpi, ScorecardError> {
        let form_data = serde_json::to_string(&kpi.elements).map_err(StorageError::from)?;

        sqlx::query(UPDATE)
            .bind(&form_data)
            .bind(kpi.updated_at.to_rfc3339())
            .bind(kpi.id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(kpi)
    }

    async fn delete(&self, id: KpiId) -> Result<(), ScorecardError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
