//! Assignment — a record that a KPI is in active use elsewhere.
//!
//! Assignments reference their KPI by name rather than id. This module
//! never creates or mutates them; their existence is only probed to block
//! deletion of a KPI that is still in use.

use serde::{Deserialize, Serialize};

use crate::id::AssignmentId;
use crate::time::Timestamp;

/// A KPI assigned to someone, read-only from this service's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignedKpi {
    pub id: AssignmentId,
    /// Name of the referenced [`Kpi`](crate::kpi::Kpi).
    pub kpi_name: String,
    /// Who the KPI is assigned to.
    pub assignee: String,
    pub assigned_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_serde_json() {
        let assignment = AssignedKpi {
            id: AssignmentId::from_i64(5),
            kpi_name: "revenue".to_string(),
            assignee: "alice".to_string(),
            assigned_at: crate::time::now(),
        };
        let json = serde_json::to_string(&assignment).unwrap();
        let parsed: AssignedKpi = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, assignment.id);
        assert_eq!(parsed.kpi_name, assignment.kpi_name);
    }
}
