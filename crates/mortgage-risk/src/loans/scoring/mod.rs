mod rules;

use serde::{Deserialize, Serialize};

use super::domain::LoanRecord;
use super::rating::{classify, RatingGrade};

/// Loan attribute contributing to the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    LoanToValue,
    DebtToIncome,
    CreditScore,
    LoanType,
    PropertyType,
}

/// Discrete contribution to a risk score, kept for audit trails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: RiskFactor,
    pub contribution: i32,
    pub notes: String,
}

/// Score, grade and the per-factor trail behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: i32,
    pub grade: RatingGrade,
    pub loan_to_value: f64,
    pub debt_to_income: f64,
    pub components: Vec<ScoreComponent>,
}

/// Sum the five independent factor contributions for a validated loan.
///
/// Each factor is evaluated against the untouched record, so the order of
/// the components has no effect on the total.
pub fn assess(loan: &LoanRecord) -> RiskAssessment {
    let loan_to_value = loan.loan_to_value();
    let debt_to_income = loan.debt_to_income();

    let components = vec![
        rules::loan_to_value(loan_to_value),
        rules::debt_to_income(debt_to_income),
        rules::credit_score(loan.credit_score()),
        rules::loan_type(loan.loan_type()),
        rules::property_type(loan.property_type()),
    ];

    let score = components
        .iter()
        .map(|component| component.contribution)
        .sum();

    RiskAssessment {
        score,
        grade: classify(score),
        loan_to_value,
        debt_to_income,
        components,
    }
}

pub fn score(loan: &LoanRecord) -> i32 {
    assess(loan).score
}
