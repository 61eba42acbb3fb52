use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::loans::domain::{LoanId, LoanRecord, LoanSubmission, LoanType, PropertyType};
use crate::loans::repository::{LoanRepository, RepositoryError, StoredLoan};
use crate::loans::{loan_router, LoanService};

/// Low-risk fixed-rate single family loan: ltv 0.8, dti 0.167, credit 750.
pub(super) fn prime_submission() -> LoanSubmission {
    LoanSubmission {
        credit_score: 750,
        loan_amount: 200_000.0,
        property_value: 250_000.0,
        annual_income: 60_000.0,
        debt_amount: 10_000.0,
        loan_type: LoanType::Fixed,
        property_type: PropertyType::SingleFamily,
    }
}

/// Underwater adjustable condo loan with heavy debt and weak credit.
pub(super) fn distressed_submission() -> LoanSubmission {
    LoanSubmission {
        credit_score: 600,
        loan_amount: 300_000.0,
        property_value: 250_000.0,
        annual_income: 40_000.0,
        debt_amount: 50_000.0,
        loan_type: LoanType::Adjustable,
        property_type: PropertyType::Condo,
    }
}

/// Structurally valid loan with a very low credit score.
pub(super) fn subprime_submission() -> LoanSubmission {
    LoanSubmission {
        credit_score: 300,
        loan_amount: 100_000.0,
        property_value: 120_000.0,
        annual_income: 30_000.0,
        debt_amount: 5_000.0,
        loan_type: LoanType::Fixed,
        property_type: PropertyType::SingleFamily,
    }
}

/// Neutral baseline: every factor contributes zero except the loan type.
pub(super) fn neutral_submission() -> LoanSubmission {
    LoanSubmission {
        credit_score: 680,
        loan_amount: 150_000.0,
        property_value: 250_000.0,
        annual_income: 100_000.0,
        debt_amount: 20_000.0,
        loan_type: LoanType::Fixed,
        property_type: PropertyType::SingleFamily,
    }
}

pub(super) fn record(submission: LoanSubmission) -> LoanRecord {
    LoanRecord::try_from(submission).expect("fixture is valid")
}

pub(super) fn build_service() -> (LoanService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = LoanService::new(repository.clone());
    (service, repository)
}

pub(super) fn router_with_service(service: LoanService<MemoryRepository>) -> axum::Router {
    loan_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    next_id: u64,
    loans: BTreeMap<LoanId, StoredLoan>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.state.lock().expect("repository mutex poisoned").loans.len()
    }
}

impl LoanRepository for MemoryRepository {
    fn insert(&self, record: LoanRecord) -> Result<StoredLoan, RepositoryError> {
        let mut guard = self.state.lock().expect("repository mutex poisoned");
        guard.next_id += 1;
        let stored = StoredLoan {
            id: LoanId(guard.next_id),
            record,
            created_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
        };
        guard.loans.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn update(&self, id: LoanId, record: LoanRecord) -> Result<StoredLoan, RepositoryError> {
        let mut guard = self.state.lock().expect("repository mutex poisoned");
        let stored = guard.loans.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        stored.record = record;
        Ok(stored.clone())
    }

    fn fetch(&self, id: LoanId) -> Result<Option<StoredLoan>, RepositoryError> {
        let guard = self.state.lock().expect("repository mutex poisoned");
        Ok(guard.loans.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<StoredLoan>, RepositoryError> {
        let guard = self.state.lock().expect("repository mutex poisoned");
        Ok(guard.loans.values().cloned().collect())
    }

    fn delete(&self, id: LoanId) -> Result<(), RepositoryError> {
        let mut guard = self.state.lock().expect("repository mutex poisoned");
        guard
            .loans
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

pub(super) struct UnavailableRepository;

impl LoanRepository for UnavailableRepository {
    fn insert(&self, _record: LoanRecord) -> Result<StoredLoan, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _id: LoanId, _record: LoanRecord) -> Result<StoredLoan, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: LoanId) -> Result<Option<StoredLoan>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<StoredLoan>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _id: LoanId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
