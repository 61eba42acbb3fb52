use std::fmt;

use super::domain::{LoanRecord, LoanSubmission};

pub const MIN_CREDIT_SCORE: i64 = 0;
pub const MAX_CREDIT_SCORE: i64 = 850;

/// Monetary fields checked during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    LoanAmount,
    PropertyValue,
    AnnualIncome,
    DebtAmount,
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AmountField::LoanAmount => "loan amount",
            AmountField::PropertyValue => "property value",
            AmountField::AnnualIncome => "annual income",
            AmountField::DebtAmount => "debt amount",
        };
        f.write_str(label)
    }
}

/// Raised when a submission violates a loan field invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("credit score must be between 0 and 850 (found {found})")]
    CreditScoreOutOfRange { found: i64 },
    #[error("{field} must be greater than 0 (found {found})")]
    NonPositiveAmount { field: AmountField, found: f64 },
    #[error("debt amount must not be negative (found {found})")]
    NegativeDebt { found: f64 },
    #[error("{field} must be a finite number")]
    NonFinite { field: AmountField },
}

impl TryFrom<LoanSubmission> for LoanRecord {
    type Error = InvalidInputError;

    fn try_from(submission: LoanSubmission) -> Result<Self, Self::Error> {
        let credit_score = validate_credit_score(submission.credit_score)?;
        let loan_amount = positive(AmountField::LoanAmount, submission.loan_amount)?;
        let property_value = positive(AmountField::PropertyValue, submission.property_value)?;
        let annual_income = positive(AmountField::AnnualIncome, submission.annual_income)?;
        let debt_amount = non_negative_debt(submission.debt_amount)?;

        Ok(LoanRecord {
            credit_score,
            loan_amount,
            property_value,
            annual_income,
            debt_amount,
            loan_type: submission.loan_type,
            property_type: submission.property_type,
        })
    }
}

fn validate_credit_score(value: i64) -> Result<u16, InvalidInputError> {
    if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&value) {
        return Err(InvalidInputError::CreditScoreOutOfRange { found: value });
    }
    u16::try_from(value).map_err(|_| InvalidInputError::CreditScoreOutOfRange { found: value })
}

fn positive(field: AmountField, value: f64) -> Result<f64, InvalidInputError> {
    if !value.is_finite() {
        return Err(InvalidInputError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(InvalidInputError::NonPositiveAmount {
            field,
            found: value,
        });
    }
    Ok(value)
}

fn non_negative_debt(value: f64) -> Result<f64, InvalidInputError> {
    if !value.is_finite() {
        return Err(InvalidInputError::NonFinite {
            field: AmountField::DebtAmount,
        });
    }
    if value < 0.0 {
        return Err(InvalidInputError::NegativeDebt { found: value });
    }
    Ok(value)
}
