use std::io::Read;

use ngtax_core::PitRegime;
use ngtax_core::calculations::PersonalIncomeInput;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::loader::deserialize_optional_decimal;

const REQUIRED_COLUMNS: [&str; 2] = ["employee", "gross_income"];

/// Errors that can occur when reading payroll rows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayrollLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Payroll file has no '{0}' column")]
    MissingColumn(&'static str),

    #[error("row {row}: {message}")]
    Row { row: usize, message: String },
}

impl From<csv::Error> for PayrollLoadError {
    fn from(err: csv::Error) -> Self {
        PayrollLoadError::CsvParse(err.to_string())
    }
}

/// One employee from a payroll CSV file.
///
/// Optional cells may be left empty. An empty `relief_allowance` means the
/// consolidated relief allowance is computed under the legacy regime.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PayrollRecord {
    pub employee: String,
    #[serde(deserialize_with = "deserialize_required_decimal")]
    pub gross_income: Decimal,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub relief_allowance: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub deductions: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub annual_rent: Option<Decimal>,
}

impl PayrollRecord {
    /// Builds the personal income tax input for this employee.
    pub fn to_input(
        &self,
        regime: PitRegime,
    ) -> PersonalIncomeInput {
        PersonalIncomeInput {
            gross_income: self.gross_income,
            regime,
            relief_allowance: self.relief_allowance,
            deductions: self.deductions.unwrap_or_default(),
            annual_rent: self.annual_rent.unwrap_or_default(),
        }
    }
}

fn deserialize_required_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserialize_optional_decimal(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("value is required"))
}

/// A parsed payroll row, or the reason it could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollRow {
    /// 1-based position among the data rows; the header is not counted.
    pub row: usize,
    pub record: Result<PayrollRecord, PayrollLoadError>,
}

/// Loader for payroll rows from CSV files.
pub struct PayrollLoader;

impl PayrollLoader {
    /// Parse payroll rows from a CSV reader.
    ///
    /// A malformed row is returned as an error in its [`PayrollRow`] and does
    /// not stop the remaining rows from being read. Only an unreadable header
    /// or a missing required column fails the whole file.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<PayrollRow>, PayrollLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(PayrollLoadError::MissingColumn(column));
            }
        }

        let rows: Vec<PayrollRow> = csv_reader
            .deserialize::<PayrollRecord>()
            .enumerate()
            .map(|(index, result)| {
                let row = index + 1;
                let record = result.map_err(|err| {
                    warn!(row, error = %err, "skipping unreadable payroll row");
                    PayrollLoadError::Row {
                        row,
                        message: err.to_string(),
                    }
                });
                PayrollRow { row, record }
            })
            .collect();

        debug!(rows = rows.len(), "parsed payroll rows");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const HEADER: &str = "employee,gross_income,relief_allowance,deductions,annual_rent\n";

    #[test]
    fn test_parse_full_row() {
        let csv = format!("{HEADER}Chidi Obi,\"5,000,000\",,400000,1200000\n");

        let rows = PayrollLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(
            rows,
            vec![PayrollRow {
                row: 1,
                record: Ok(PayrollRecord {
                    employee: "Chidi Obi".to_string(),
                    gross_income: dec!(5000000),
                    relief_allowance: None,
                    deductions: Some(dec!(400000)),
                    annual_rent: Some(dec!(1200000)),
                }),
            }]
        );
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let csv = "employee,gross_income\nAisha Bello,2400000\n";

        let rows = PayrollLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        let record = rows[0].record.as_ref().unwrap();
        assert_eq!(record.deductions, None);
        assert_eq!(record.annual_rent, None);
    }

    #[test]
    fn test_bad_row_does_not_stop_later_rows() {
        let csv = format!("{HEADER}A,abc,,,\nB,,,,\nC,3000000,,,\n");

        let rows = PayrollLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(rows.len(), 3);
        assert!(matches!(rows[0].record, Err(PayrollLoadError::Row { row: 1, .. })));
        assert!(matches!(rows[1].record, Err(PayrollLoadError::Row { row: 2, .. })));
        assert_eq!(rows[2].record.as_ref().unwrap().gross_income, dec!(3000000));
    }

    #[test]
    fn test_missing_required_column_fails_file() {
        let csv = "name,gross_income\nA,100\n";

        let result = PayrollLoader::parse(csv.as_bytes());

        assert_eq!(result, Err(PayrollLoadError::MissingColumn("employee")));
    }

    #[test]
    fn test_to_input_defaults_empty_cells_to_zero() {
        let record = PayrollRecord {
            employee: "A".to_string(),
            gross_income: dec!(1000000),
            relief_allowance: Some(dec!(250000)),
            deductions: None,
            annual_rent: None,
        };

        let input = record.to_input(PitRegime::Legacy);

        assert_eq!(input.regime, PitRegime::Legacy);
        assert_eq!(input.relief_allowance, Some(dec!(250000)));
        assert_eq!(input.deductions, dec!(0));
        assert_eq!(input.annual_rent, dec!(0));
    }
}
