use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the repository when a loan is first stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoanId(pub u64);

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interest rate structure of the mortgage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    Fixed,
    Adjustable,
}

impl LoanType {
    pub fn label(&self) -> &'static str {
        match self {
            LoanType::Fixed => "fixed",
            LoanType::Adjustable => "adjustable",
        }
    }
}

impl FromStr for LoanType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "adjustable" | "arm" => Ok(Self::Adjustable),
            other => Err(format!(
                "unknown loan type '{other}' (expected fixed or adjustable)"
            )),
        }
    }
}

/// Collateral category backing the mortgage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    SingleFamily,
    Condo,
}

impl PropertyType {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "single_family",
            PropertyType::Condo => "condo",
        }
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "single_family" => Ok(Self::SingleFamily),
            "condo" => Ok(Self::Condo),
            other => Err(format!(
                "unknown property type '{other}' (expected single_family or condo)"
            )),
        }
    }
}

/// Raw loan payload as received from the API, CLI, or a CSV import.
///
/// Numeric fields are wider than on `LoanRecord`; range checks happen in
/// validation, not during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSubmission {
    pub credit_score: i64,
    pub loan_amount: f64,
    pub property_value: f64,
    pub annual_income: f64,
    pub debt_amount: f64,
    pub loan_type: LoanType,
    pub property_type: PropertyType,
}

/// Validated loan attributes consumed by the risk scorer.
///
/// Only obtainable through `LoanRecord::try_from(LoanSubmission)`, so every
/// instance has a credit score in `0..=850`, strictly positive loan amount,
/// property value and income, and a non-negative debt amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanRecord {
    pub(crate) credit_score: u16,
    pub(crate) loan_amount: f64,
    pub(crate) property_value: f64,
    pub(crate) annual_income: f64,
    pub(crate) debt_amount: f64,
    pub(crate) loan_type: LoanType,
    pub(crate) property_type: PropertyType,
}

impl LoanRecord {
    pub fn credit_score(&self) -> u16 {
        self.credit_score
    }

    pub fn loan_amount(&self) -> f64 {
        self.loan_amount
    }

    pub fn property_value(&self) -> f64 {
        self.property_value
    }

    pub fn annual_income(&self) -> f64 {
        self.annual_income
    }

    pub fn debt_amount(&self) -> f64 {
        self.debt_amount
    }

    pub fn loan_type(&self) -> LoanType {
        self.loan_type
    }

    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    /// Loan-to-value ratio. `property_value` is strictly positive.
    pub fn loan_to_value(&self) -> f64 {
        self.loan_amount / self.property_value
    }

    /// Debt-to-income ratio. `annual_income` is strictly positive.
    pub fn debt_to_income(&self) -> f64 {
        self.debt_amount / self.annual_income
    }
}
