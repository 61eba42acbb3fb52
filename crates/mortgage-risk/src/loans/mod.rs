//! Mortgage intake, risk scoring, and RMBS-style rating.
//!
//! `scoring::assess` and `rating::classify` are pure and hold no state; the
//! service, repository, and router are the plumbing that feeds them validated
//! `LoanRecord`s and returns their output.

pub mod domain;
pub mod import;
pub mod pool;
pub mod rating;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{LoanId, LoanRecord, LoanSubmission, LoanType, PropertyType};
pub use import::{LoanCsvImporter, LoanImportError};
pub use pool::{GradeCounts, PoolSummary};
pub use rating::{classify, RatingGrade};
pub use repository::{
    LoanRatingView, LoanRepository, PortfolioView, RepositoryError, StoredLoan,
};
pub use router::{loan_router, LoanMutationResponse};
pub use scoring::{assess, score, RiskAssessment, RiskFactor, ScoreComponent};
pub use service::{LoanService, LoanServiceError};
pub use validation::{AmountField, InvalidInputError};
