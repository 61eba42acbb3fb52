use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{LoanId, LoanRecord};
use super::pool::PoolSummary;
use super::rating::RatingGrade;
use super::scoring::{assess, RiskAssessment, ScoreComponent};

/// Repository row: the validated loan plus storage metadata.
///
/// Scores are not stored; every view recomputes them from `record`.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredLoan {
    pub id: LoanId,
    pub record: LoanRecord,
    pub created_at: DateTime<Utc>,
}

impl StoredLoan {
    pub fn rating_view(&self) -> LoanRatingView {
        self.rating_view_with(assess(&self.record))
    }

    /// Builds the view from an assessment already computed for `record`.
    pub fn rating_view_with(&self, assessment: RiskAssessment) -> LoanRatingView {
        LoanRatingView {
            id: self.id,
            loan: self.record.clone(),
            created_at: self.created_at,
            individual_risk_score: assessment.score,
            credit_rating: assessment.grade,
            loan_to_value: assessment.loan_to_value,
            debt_to_income: assessment.debt_to_income,
            components: assessment.components,
        }
    }
}

/// Storage abstraction so the service can be exercised without a database.
pub trait LoanRepository: Send + Sync {
    /// Persist a new loan, assigning its id and creation timestamp.
    fn insert(&self, record: LoanRecord) -> Result<StoredLoan, RepositoryError>;
    /// Replace the loan attributes, keeping id and creation timestamp.
    fn update(&self, id: LoanId, record: LoanRecord) -> Result<StoredLoan, RepositoryError>;
    fn fetch(&self, id: LoanId) -> Result<Option<StoredLoan>, RepositoryError>;
    /// All stored loans ordered by id.
    fn list(&self) -> Result<Vec<StoredLoan>, RepositoryError>;
    fn delete(&self, id: LoanId) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("mortgage not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Loan attributes with a freshly computed score and grade.
#[derive(Debug, Clone, Serialize)]
pub struct LoanRatingView {
    pub id: LoanId,
    #[serde(flatten)]
    pub loan: LoanRecord,
    pub created_at: DateTime<Utc>,
    pub individual_risk_score: i32,
    pub credit_rating: RatingGrade,
    pub loan_to_value: f64,
    pub debt_to_income: f64,
    pub components: Vec<ScoreComponent>,
}

/// Every stored loan with its rating plus the pooled summary.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioView {
    pub mortgages: Vec<LoanRatingView>,
    pub pool: PoolSummary,
}

impl PortfolioView {
    pub fn from_loans(loans: &[StoredLoan]) -> Self {
        let assessments: Vec<_> = loans.iter().map(|loan| assess(&loan.record)).collect();
        let pool = PoolSummary::from_assessments(&assessments);
        let mortgages = loans
            .iter()
            .zip(assessments)
            .map(|(loan, assessment)| loan.rating_view_with(assessment))
            .collect();

        Self { mortgages, pool }
    }
}
