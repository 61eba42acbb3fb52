use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{LoanId, LoanRecord, LoanSubmission};
use super::repository::{LoanRatingView, LoanRepository, PortfolioView, RepositoryError};
use super::validation::InvalidInputError;

/// Service composing validation, storage, and the risk scorer.
pub struct LoanService<R> {
    repository: Arc<R>,
}

impl<R> LoanService<R>
where
    R: LoanRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and store a new loan, returning its freshly computed rating.
    pub fn create(&self, submission: LoanSubmission) -> Result<LoanRatingView, LoanServiceError> {
        debug!(?submission, "received mortgage submission");
        let record = validate(submission)?;

        let stored = self.repository.insert(record)?;
        let view = stored.rating_view();
        info!(
            mortgage_id = %view.id,
            risk_score = view.individual_risk_score,
            credit_rating = %view.credit_rating,
            "mortgage created"
        );
        Ok(view)
    }

    /// Replace a loan's attributes and rescore it.
    pub fn update(
        &self,
        id: LoanId,
        submission: LoanSubmission,
    ) -> Result<LoanRatingView, LoanServiceError> {
        debug!(mortgage_id = %id, ?submission, "received mortgage update");
        let record = validate(submission)?;

        let stored = self.repository.update(id, record)?;
        let view = stored.rating_view();
        info!(
            mortgage_id = %view.id,
            risk_score = view.individual_risk_score,
            credit_rating = %view.credit_rating,
            "mortgage updated"
        );
        Ok(view)
    }

    pub fn get(&self, id: LoanId) -> Result<LoanRatingView, LoanServiceError> {
        let stored = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(stored.rating_view())
    }

    /// Rate every stored loan and summarize the pool.
    pub fn list(&self) -> Result<PortfolioView, LoanServiceError> {
        let loans = self.repository.list()?;
        if loans.is_empty() {
            warn!("no mortgages found in the repository");
        }

        let portfolio = PortfolioView::from_loans(&loans);
        debug!(
            loan_count = portfolio.pool.loan_count,
            pool_rating = portfolio.pool.rating_label(),
            "portfolio rated"
        );
        Ok(portfolio)
    }

    pub fn delete(&self, id: LoanId) -> Result<(), LoanServiceError> {
        self.repository.delete(id)?;
        info!(mortgage_id = %id, "mortgage deleted");
        Ok(())
    }
}

fn validate(submission: LoanSubmission) -> Result<LoanRecord, LoanServiceError> {
    LoanRecord::try_from(submission).map_err(|error| {
        warn!(%error, "rejected mortgage submission");
        LoanServiceError::InvalidInput(error)
    })
}

/// Error raised by the loan service.
#[derive(Debug, thiserror::Error)]
pub enum LoanServiceError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
