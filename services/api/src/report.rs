use clap::Args;
use mortgage_risk::error::AppError;
use mortgage_risk::loans::{
    assess, LoanCsvImporter, LoanRecord, LoanSubmission, LoanType, PoolSummary, PropertyType,
    RatingGrade, RiskAssessment,
};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Borrower credit score (0-850)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) credit_score: i64,
    /// Requested loan amount
    #[arg(long)]
    pub(crate) loan_amount: f64,
    /// Appraised property value
    #[arg(long)]
    pub(crate) property_value: f64,
    /// Gross annual income
    #[arg(long)]
    pub(crate) annual_income: f64,
    /// Outstanding debt
    #[arg(long, default_value_t = 0.0)]
    pub(crate) debt_amount: f64,
    /// fixed or adjustable
    #[arg(long)]
    pub(crate) loan_type: LoanType,
    /// single_family or condo
    #[arg(long)]
    pub(crate) property_type: PropertyType,
}

impl From<ScoreArgs> for LoanSubmission {
    fn from(args: ScoreArgs) -> Self {
        Self {
            credit_score: args.credit_score,
            loan_amount: args.loan_amount,
            property_value: args.property_value,
            annual_income: args.annual_income,
            debt_amount: args.debt_amount,
            loan_type: args.loan_type,
            property_type: args.property_type,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct PortfolioArgs {
    /// CSV file with one loan per row
    pub(crate) csv: PathBuf,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let submission = LoanSubmission::from(args);
    let record = LoanRecord::try_from(submission)?;

    let assessment = assess(&record);
    let mut stdout = io::stdout().lock();
    render_assessment(&mut stdout, &record, &assessment)?;
    Ok(())
}

pub(crate) fn run_portfolio(args: PortfolioArgs) -> Result<(), AppError> {
    let records = LoanCsvImporter::from_path(&args.csv)?;
    let assessments: Vec<RiskAssessment> = records.iter().map(assess).collect();
    let summary = PoolSummary::from_assessments(&assessments);

    let mut stdout = io::stdout().lock();
    render_portfolio(&mut stdout, &assessments, &summary)?;
    Ok(())
}

pub(crate) fn render_assessment<W: Write>(
    out: &mut W,
    record: &LoanRecord,
    assessment: &RiskAssessment,
) -> io::Result<()> {
    writeln!(out, "Mortgage risk assessment")?;
    writeln!(
        out,
        "Loan {:.2} against property {:.2} ({} / {})",
        record.loan_amount(),
        record.property_value(),
        record.loan_type().label(),
        record.property_type().label()
    )?;

    writeln!(out, "\nFactor breakdown")?;
    for component in &assessment.components {
        writeln!(
            out,
            "- {:+} {}",
            component.contribution, component.notes
        )?;
    }

    writeln!(
        out,
        "\nRisk score: {} -> rating {}",
        assessment.score, assessment.grade
    )
}

pub(crate) fn render_portfolio<W: Write>(
    out: &mut W,
    assessments: &[RiskAssessment],
    summary: &PoolSummary,
) -> io::Result<()> {
    writeln!(out, "Portfolio rating")?;

    if assessments.is_empty() {
        writeln!(out, "Loans: none")?;
    } else {
        writeln!(out, "\nLoans")?;
        for (index, assessment) in assessments.iter().enumerate() {
            writeln!(
                out,
                "- #{}: score {:+}, ltv {:.3}, dti {:.3}, rating {}",
                index + 1,
                assessment.score,
                assessment.loan_to_value,
                assessment.debt_to_income,
                assessment.grade
            )?;
        }
    }

    writeln!(out, "\nGrade distribution")?;
    for grade in RatingGrade::ALL {
        writeln!(out, "- {}: {}", grade, summary.grade_counts.get(grade))?;
    }

    if let Some(average) = summary.average_score {
        writeln!(out, "\nAverage score: {average:.2}")?;
    }
    writeln!(out, "Pool rating: {}", summary.rating_label())
}
