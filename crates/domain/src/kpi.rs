//! KPI — a named form definition plus metadata.
//!
//! The form definition itself is an ordered sequence of opaque `elements`;
//! the domain never inspects individual elements beyond "it is an array".

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ScorecardError, ValidationError};
use crate::id::KpiId;
use crate::time::Timestamp;

/// A persisted KPI record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kpi {
    pub id: KpiId,
    /// Unique name, referenced by assignments.
    pub name: String,
    /// Ordered form elements (stored in the `form_data` column).
    pub elements: Vec<Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Kpi {
    /// Replace the form elements and bump the update timestamp.
    pub fn update_elements(&mut self, elements: Vec<Value>, updated_at: Timestamp) {
        self.elements = elements;
        self.updated_at = updated_at;
    }
}

/// A KPI that has not been persisted yet — no id, no timestamps.
#[derive(Debug, Clone)]
pub struct NewKpi {
    pub name: String,
    pub elements: Vec<Value>,
}

impl NewKpi {
    /// Create a builder for constructing a [`NewKpi`].
    #[must_use]
    pub fn builder() -> NewKpiBuilder {
        NewKpiBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ScorecardError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), ScorecardError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewKpi`].
#[derive(Debug, Default)]
pub struct NewKpiBuilder {
    name: Option<String>,
    elements: Vec<Value>,
}

impl NewKpiBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn elements(mut self, elements: Vec<Value>) -> Self {
        self.elements = elements;
        self
    }

    /// Consume the builder, validate, and return a [`NewKpi`].
    ///
    /// # Errors
    ///
    /// Returns [`ScorecardError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<NewKpi, ScorecardError> {
        let kpi = NewKpi {
            name: self.name.unwrap_or_default(),
            elements: self.elements,
        };
        kpi.validate()?;
        Ok(kpi)
    }
}
