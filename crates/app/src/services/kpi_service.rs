//! KPI service — use-cases for reading, updating, and deleting KPIs.

use serde_json::Value;

use scorecard_domain::error::{ConflictError, NotFoundError, ScorecardError};
use scorecard_domain::id::KpiId;
use scorecard_domain::kpi::{Kpi, NewKpi};
use scorecard_domain::time::{Timestamp, now};

use crate::ports::{AssignmentRepository, KpiRepository};

/// Application service for KPI operations.
pub struct KpiService<KR, AR> {
    kpis: KR,
    assignments: AR,
}

impl<KR: KpiRepository, AR: AssignmentRepository> KpiService<KR, AR> {
    /// Create a new service backed by the given repositories.
    pub fn new(kpis: KR, assignments: AR) -> Self {
        Self { kpis, assignments }
    }

    /// Look up a KPI by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ScorecardError::NotFound`] when no KPI with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_kpi(&self, id: KpiId) -> Result<Kpi, ScorecardError> {
        self.kpis.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "KPI",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all KPIs.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_kpis(&self) -> Result<Vec<Kpi>, ScorecardError> {
        self.kpis.get_all().await
    }

    /// Create a new KPI after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ScorecardError::Validation`] if invariants fail,
    /// [`ScorecardError::Conflict`] if the name is already taken, or a
    /// storage error propagated from the repository.
    pub async fn create_kpi(&self, new: NewKpi) -> Result<Kpi, ScorecardError> {
        new.validate()?;
        if self.kpis.get_by_name(&new.name).await?.is_some() {
            return Err(ConflictError::DuplicateName { name: new.name }.into());
        }
        self.kpis.create(new).await
    }

    /// Replace the form elements of an existing KPI.
    ///
    /// `updated_at` overrides the update timestamp when supplied; otherwise
    /// the current time is used. The existence check and the write are two
    /// separate repository calls — a row deleted in between is an accepted
    /// race window.
    ///
    /// # Errors
    ///
    /// Returns [`ScorecardError::NotFound`] if the KPI does not exist,
    /// or a storage error from the repository.
    pub async fn update_elements(
        &self,
        id: KpiId,
        elements: Vec<Value>,
        updated_at: Option<Timestamp>,
    ) -> Result<Kpi, ScorecardError> {
        let mut kpi = self.get_kpi(id).await?;
        kpi.update_elements(elements, updated_at.unwrap_or_else(now));
        self.kpis.update(kpi).await
    }

    /// Delete a KPI by id, refusing while any assignment references it.
    ///
    /// The guard probe and the delete are not atomic; an assignment created
    /// in between is an accepted race window.
    ///
    /// # Errors
    ///
    /// Returns [`ScorecardError::NotFound`] if the KPI does not exist,
    /// [`ScorecardError::Conflict`] if it is still assigned, or a storage
    /// error from the repository.
    pub async fn delete_kpi(&self, id: KpiId) -> Result<(), ScorecardError> {
        let kpi = self.get_kpi(id).await?;

        let references = self.assignments.find_by_kpi_name(&kpi.name, 1).await?;
        if !references.is_empty() {
            return Err(ConflictError::KpiInUse { name: kpi.name }.into());
        }

        self.kpis.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard_domain::assignment::AssignedKpi;
    use scorecard_domain::error::ValidationError;
    use scorecard_domain::id::AssignmentId;
    use serde_json::json;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryKpiRepo {
        store: Mutex<HashMap<KpiId, Kpi>>,
        next_id: Mutex<i64>,
    }

    impl KpiRepository for InMemoryKpiRepo {
        fn create(&self, new: NewKpi) -> impl Future<Output = Result<Kpi, ScorecardError>> + Send {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let ts = now();
            let kpi = Kpi {
                id: KpiId::from_i64(*next_id),
                name: new.name,
                elements: new.elements,
                created_at: ts,
                updated_at: ts,
            };
            let mut store = self.store.lock().unwrap();
            store.insert(kpi.id, kpi.clone());
            async { Ok(kpi) }
        }

        fn get_by_id(
            &self,
            id: KpiId,
        ) -> impl Future<Output = Result<Option<Kpi>, ScorecardError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_by_name(
            &self,
            name: &str,
        ) -> impl Future<Output = Result<Option<Kpi>, ScorecardError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.values().find(|k| k.name == name).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Kpi>, ScorecardError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Kpi> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(&self, kpi: Kpi) -> impl Future<Output = Result<Kpi, ScorecardError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(kpi.id, kpi.clone());
            async { Ok(kpi) }
        }

        fn delete(&self, id: KpiId) -> impl Future<Output = Result<(), ScorecardError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.remove(&id);
            async { Ok(()) }
        }
    }

    #[derive(Default)]
    struct InMemoryAssignmentRepo {
        assignments: Mutex<Vec<AssignedKpi>>,
    }

    impl InMemoryAssignmentRepo {
        fn assign(&self, kpi_name: &str, assignee: &str) {
            let mut assignments = self.assignments.lock().unwrap();
            let id = assignments.len() as i64 + 1;
            assignments.push(AssignedKpi {
                id: AssignmentId::from_i64(id),
                kpi_name: kpi_name.to_string(),
                assignee: assignee.to_string(),
                assigned_at: now(),
            });
        }
    }

    impl AssignmentRepository for InMemoryAssignmentRepo {
        fn find_by_kpi_name(
            &self,
            kpi_name: &str,
            limit: usize,
        ) -> impl Future<Output = Result<Vec<AssignedKpi>, ScorecardError>> + Send {
            let assignments = self.assignments.lock().unwrap();
            let result: Vec<AssignedKpi> = assignments
                .iter()
                .filter(|a| a.kpi_name == kpi_name)
                .take(limit)
                .cloned()
                .collect();
            async { Ok(result) }
        }
    }

    fn make_service() -> KpiService<InMemoryKpiRepo, InMemoryAssignmentRepo> {
        KpiService::new(
            InMemoryKpiRepo::default(),
            InMemoryAssignmentRepo::default(),
        )
    }

    fn valid_new_kpi() -> NewKpi {
        NewKpi::builder()
            .name("revenue")
            .elements(vec![json!({"field": "amount"})])
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_kpi_when_valid() {
        let svc = make_service();

        let created = svc.create_kpi(valid_new_kpi()).await.unwrap();

        let fetched = svc.get_kpi(created.id).await.unwrap();
        assert_eq!(fetched.name, "revenue");
        assert_eq!(fetched.elements, vec![json!({"field": "amount"})]);
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let svc = make_service();
        let mut new = valid_new_kpi();
        new.name = String::new();

        let result = svc.create_kpi(new).await;
        assert!(matches!(
            result,
            Err(ScorecardError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn should_reject_create_when_name_already_taken() {
        let svc = make_service();
        svc.create_kpi(valid_new_kpi()).await.unwrap();

        let result = svc.create_kpi(valid_new_kpi()).await;
        assert!(matches!(
            result,
            Err(ScorecardError::Conflict(ConflictError::DuplicateName { .. }))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_kpi_missing() {
        let svc = make_service();
        let result = svc.get_kpi(KpiId::from_i64(999_999)).await;
        assert!(matches!(result, Err(ScorecardError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_kpis() {
        let svc = make_service();
        svc.create_kpi(valid_new_kpi()).await.unwrap();
        svc.create_kpi(NewKpi::builder().name("churn").build().unwrap())
            .await
            .unwrap();

        let all = svc.list_kpis().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_replace_elements_and_default_timestamp_to_now() {
        let svc = make_service();
        let created = svc.create_kpi(valid_new_kpi()).await.unwrap();
        let before = now();

        let updated = svc
            .update_elements(created.id, vec![json!({"a": 1})], None)
            .await
            .unwrap();

        assert_eq!(updated.elements, vec![json!({"a": 1})]);
        assert!(updated.updated_at >= before);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn should_use_supplied_timestamp_when_given() {
        let svc = make_service();
        let created = svc.create_kpi(valid_new_kpi()).await.unwrap();
        let ts = "2024-06-01T12:00:00Z".parse::<Timestamp>().unwrap();

        let updated = svc
            .update_elements(created.id, vec![], Some(ts))
            .await
            .unwrap();

        assert_eq!(updated.updated_at, ts);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_kpi() {
        let svc = make_service();
        let result = svc
            .update_elements(KpiId::from_i64(1), vec![json!({"a": 1})], None)
            .await;
        assert!(matches!(result, Err(ScorecardError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_kpi_when_unassigned() {
        let svc = make_service();
        let created = svc.create_kpi(valid_new_kpi()).await.unwrap();

        svc.delete_kpi(created.id).await.unwrap();

        let result = svc.get_kpi(created.id).await;
        assert!(matches!(result, Err(ScorecardError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_refuse_delete_when_kpi_is_assigned() {
        let svc = make_service();
        let created = svc.create_kpi(valid_new_kpi()).await.unwrap();
        svc.assignments.assign("revenue", "alice");

        let result = svc.delete_kpi(created.id).await;
        assert!(matches!(
            result,
            Err(ScorecardError::Conflict(ConflictError::KpiInUse { .. }))
        ));

        // The row must survive the refused delete.
        assert!(svc.get_kpi(created.id).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_twice() {
        let svc = make_service();
        let created = svc.create_kpi(valid_new_kpi()).await.unwrap();

        svc.delete_kpi(created.id).await.unwrap();
        let result = svc.delete_kpi(created.id).await;

        assert!(matches!(result, Err(ScorecardError::NotFound(_))));
    }
}
