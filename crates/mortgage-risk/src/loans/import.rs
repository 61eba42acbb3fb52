use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::domain::{LoanRecord, LoanSubmission};
use super::validation::InvalidInputError;

/// Loads a loan portfolio from CSV.
///
/// Expected headers: `credit_score,loan_amount,property_value,annual_income,
/// debt_amount,loan_type,property_type`. Rows are numbered from 1, excluding
/// the header.
pub struct LoanCsvImporter;

impl LoanCsvImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<LoanRecord>, LoanImportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoanImportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<LoanRecord>, LoanImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (index, row) in csv_reader.deserialize::<LoanSubmission>().enumerate() {
            let row_number = index + 1;
            let submission = row.map_err(|source| LoanImportError::Parse {
                row: row_number,
                source,
            })?;
            let record = LoanRecord::try_from(submission).map_err(|source| {
                LoanImportError::InvalidRow {
                    row: row_number,
                    source,
                }
            })?;
            records.push(record);
        }

        Ok(records)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoanImportError {
    #[error("unable to open portfolio file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("row {row}: malformed loan data")]
    Parse {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: InvalidInputError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loans::domain::{LoanType, PropertyType};
    use std::io::Cursor;

    const HEADER: &str =
        "credit_score,loan_amount,property_value,annual_income,debt_amount,loan_type,property_type\n";

    #[test]
    fn parses_rows_into_validated_records() {
        let csv = format!(
            "{HEADER}750,200000,250000,60000,10000,fixed,single_family\n 600 , 300000 , 250000 , 40000 , 50000 , adjustable , condo \n"
        );

        let records = LoanCsvImporter::from_reader(Cursor::new(csv)).expect("portfolio parses");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].credit_score(), 750);
        assert_eq!(records[1].loan_type(), LoanType::Adjustable);
        assert_eq!(records[1].property_type(), PropertyType::Condo);
    }

    #[test]
    fn reports_row_number_for_invalid_values() {
        let csv = format!(
            "{HEADER}750,200000,250000,60000,10000,fixed,single_family\n1000,150000,180000,50000,20000,fixed,single_family\n"
        );

        match LoanCsvImporter::from_reader(Cursor::new(csv)) {
            Err(LoanImportError::InvalidRow { row, source }) => {
                assert_eq!(row, 2);
                assert_eq!(
                    source,
                    InvalidInputError::CreditScoreOutOfRange { found: 1000 }
                );
            }
            other => panic!("expected invalid row, got {other:?}"),
        }
    }

    #[test]
    fn reports_unknown_categories_as_parse_errors() {
        let csv = format!("{HEADER}720,100000,150000,50000,0,balloon,condo\n");

        assert!(matches!(
            LoanCsvImporter::from_reader(Cursor::new(csv)),
            Err(LoanImportError::Parse { row: 1, .. })
        ));
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        match LoanCsvImporter::from_path("/nonexistent/portfolio.csv") {
            Err(LoanImportError::Open { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/portfolio.csv"))
            }
            other => panic!("expected open error, got {other:?}"),
        }
    }
}
