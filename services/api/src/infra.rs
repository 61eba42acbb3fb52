use axum::http::HeaderValue;
use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use mortgage_risk::config::CorsConfig;
use mortgage_risk::loans::{LoanId, LoanRecord, LoanRepository, RepositoryError, StoredLoan};
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local loan storage with auto-incrementing ids.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLoanRepository {
    inner: Arc<Mutex<LoanTable>>,
}

#[derive(Default)]
struct LoanTable {
    last_id: u64,
    rows: BTreeMap<LoanId, StoredLoan>,
}

impl LoanRepository for InMemoryLoanRepository {
    fn insert(&self, record: LoanRecord) -> Result<StoredLoan, RepositoryError> {
        let mut guard = self.inner.lock().expect("repository mutex poisoned");
        guard.last_id += 1;
        let stored = StoredLoan {
            id: LoanId(guard.last_id),
            record,
            created_at: Utc::now(),
        };
        guard.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn update(&self, id: LoanId, record: LoanRecord) -> Result<StoredLoan, RepositoryError> {
        let mut guard = self.inner.lock().expect("repository mutex poisoned");
        match guard.rows.get_mut(&id) {
            Some(stored) => {
                stored.record = record;
                Ok(stored.clone())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: LoanId) -> Result<Option<StoredLoan>, RepositoryError> {
        let guard = self.inner.lock().expect("repository mutex poisoned");
        Ok(guard.rows.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<StoredLoan>, RepositoryError> {
        let guard = self.inner.lock().expect("repository mutex poisoned");
        Ok(guard.rows.values().cloned().collect())
    }

    fn delete(&self, id: LoanId) -> Result<(), RepositoryError> {
        let mut guard = self.inner.lock().expect("repository mutex poisoned");
        match guard.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound),
        }
    }
}

pub(crate) fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "skipping CORS origin that is not a valid header value");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortgage_risk::loans::{LoanSubmission, LoanType, PropertyType};

    fn record(credit_score: i64) -> LoanRecord {
        LoanRecord::try_from(LoanSubmission {
            credit_score,
            loan_amount: 200_000.0,
            property_value: 250_000.0,
            annual_income: 60_000.0,
            debt_amount: 10_000.0,
            loan_type: LoanType::Fixed,
            property_type: PropertyType::SingleFamily,
        })
        .expect("valid loan")
    }

    #[test]
    fn ids_keep_increasing_after_deletes() {
        let repository = InMemoryLoanRepository::default();
        let first = repository.insert(record(700)).expect("insert");
        repository.delete(first.id).expect("delete");
        let second = repository.insert(record(710)).expect("insert");

        assert_eq!(first.id, LoanId(1));
        assert_eq!(second.id, LoanId(2));
        assert_eq!(repository.list().expect("list").len(), 1);
    }

    #[test]
    fn update_keeps_creation_metadata() {
        let repository = InMemoryLoanRepository::default();
        let stored = repository.insert(record(700)).expect("insert");

        let updated = repository.update(stored.id, record(640)).expect("update");

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.created_at, stored.created_at);
        assert_eq!(updated.record.credit_score(), 640);
        assert!(matches!(
            repository.update(LoanId(9), record(640)),
            Err(RepositoryError::NotFound)
        ));
    }
}
