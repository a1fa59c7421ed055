//! Pure mapping from the persisted KPI record to its response document.
//!
//! The wire shape differs from the stored record in two deliberate ways:
//! the `form_data` column is exposed as `elements` (and never under its
//! stored name), and `kpi_name` is duplicated into a generic `id` field
//! for frontend convenience. Keeping this mapping free of IO lets the
//! round-trip (`elements` in a PUT body → `form_data` in storage →
//! `elements` in the next GET) be verified in isolation.

use serde::Serialize;
use serde_json::Value;

use scorecard_domain::id::KpiId;
use scorecard_domain::kpi::Kpi;
use scorecard_domain::time::Timestamp;

/// Response document for a single KPI.
#[derive(Debug, Clone, Serialize)]
pub struct KpiDocument {
    pub kpi_id: KpiId,
    pub kpi_name: String,
    pub kpi_created_at: Timestamp,
    pub kpi_updated_at: Timestamp,
    /// Duplicate of `kpi_name`, kept under a generic key for the frontend.
    pub id: String,
    /// The stored `form_data` column under its response name.
    pub elements: Vec<Value>,
}

impl From<Kpi> for KpiDocument {
    fn from(kpi: Kpi) -> Self {
        Self {
            kpi_id: kpi.id,
            id: kpi.name.clone(),
            kpi_name: kpi.name,
            kpi_created_at: kpi.created_at,
            kpi_updated_at: kpi.updated_at,
            elements: kpi.elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard_domain::time::now;
    use serde_json::json;

    fn sample_kpi() -> Kpi {
        Kpi {
            id: KpiId::from_i64(7),
            name: "revenue".to_string(),
            elements: vec![json!({"field": "amount"}), json!({"field": "period"})],
            created_at: now(),
            updated_at: now(),
        }
    }

    #[test]
    fn should_duplicate_name_into_id_field() {
        let doc = KpiDocument::from(sample_kpi());
        assert_eq!(doc.kpi_name, "revenue");
        assert_eq!(doc.id, "revenue");
    }

    #[test]
    fn should_expose_form_data_only_as_elements() {
        let doc = KpiDocument::from(sample_kpi());
        let value = serde_json::to_value(&doc).unwrap();

        assert!(value.get("form_data").is_none());
        assert_eq!(value["elements"][0]["field"], "amount");
        assert_eq!(value["elements"][1]["field"], "period");
    }

    #[test]
    fn should_pass_identity_fields_through_verbatim() {
        let kpi = sample_kpi();
        let created_at = kpi.created_at;
        let updated_at = kpi.updated_at;

        let doc = KpiDocument::from(kpi);

        assert_eq!(doc.kpi_id, KpiId::from_i64(7));
        assert_eq!(doc.kpi_created_at, created_at);
        assert_eq!(doc.kpi_updated_at, updated_at);
    }
}
