use super::super::domain::{LoanType, PropertyType};
use super::{RiskFactor, ScoreComponent};

pub(crate) const LTV_HIGH: f64 = 0.9;
pub(crate) const LTV_ELEVATED: f64 = 0.8;
pub(crate) const DTI_HIGH: f64 = 0.5;
pub(crate) const DTI_ELEVATED: f64 = 0.4;
pub(crate) const CREDIT_STRONG: u16 = 700;
pub(crate) const CREDIT_WEAK: u16 = 650;

pub(crate) fn loan_to_value(ltv: f64) -> ScoreComponent {
    let (contribution, notes) = if ltv > LTV_HIGH {
        (2, format!("loan-to-value {ltv:.3} above {LTV_HIGH:.2}"))
    } else if ltv > LTV_ELEVATED {
        (
            1,
            format!("loan-to-value {ltv:.3} above {LTV_ELEVATED:.2} up to {LTV_HIGH:.2}"),
        )
    } else {
        (0, format!("loan-to-value {ltv:.3} at or below {LTV_ELEVATED:.2}"))
    };

    ScoreComponent {
        factor: RiskFactor::LoanToValue,
        contribution,
        notes,
    }
}

pub(crate) fn debt_to_income(dti: f64) -> ScoreComponent {
    let (contribution, notes) = if dti > DTI_HIGH {
        (2, format!("debt-to-income {dti:.3} above {DTI_HIGH:.2}"))
    } else if dti > DTI_ELEVATED {
        (
            1,
            format!("debt-to-income {dti:.3} above {DTI_ELEVATED:.2} up to {DTI_HIGH:.2}"),
        )
    } else {
        (0, format!("debt-to-income {dti:.3} at or below {DTI_ELEVATED:.2}"))
    };

    ScoreComponent {
        factor: RiskFactor::DebtToIncome,
        contribution,
        notes,
    }
}

pub(crate) fn credit_score(score: u16) -> ScoreComponent {
    let (contribution, notes) = if score >= CREDIT_STRONG {
        (-1, format!("credit score {score} at or above {CREDIT_STRONG}"))
    } else if score < CREDIT_WEAK {
        (1, format!("credit score {score} below {CREDIT_WEAK}"))
    } else {
        (
            0,
            format!("credit score {score} between {CREDIT_WEAK} and {CREDIT_STRONG}"),
        )
    };

    ScoreComponent {
        factor: RiskFactor::CreditScore,
        contribution,
        notes,
    }
}

pub(crate) fn loan_type(loan_type: LoanType) -> ScoreComponent {
    let contribution = match loan_type {
        LoanType::Fixed => -1,
        LoanType::Adjustable => 1,
    };

    ScoreComponent {
        factor: RiskFactor::LoanType,
        contribution,
        notes: format!("{} rate loan", loan_type.label()),
    }
}

pub(crate) fn property_type(property_type: PropertyType) -> ScoreComponent {
    let contribution = match property_type {
        PropertyType::SingleFamily => 0,
        PropertyType::Condo => 1,
    };

    ScoreComponent {
        factor: RiskFactor::PropertyType,
        contribution,
        notes: format!("{} collateral", property_type.label()),
    }
}
