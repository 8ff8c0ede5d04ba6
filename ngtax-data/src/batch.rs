use ngtax_core::calculations::{PersonalIncomeCalculator, PersonalIncomeResult};
use ngtax_core::report::{format_naira, format_percent};
use ngtax_core::{InvalidInput, PitRegime, ReportSections, Section, ToReport};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use crate::payroll::PayrollRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    pub row: usize,
    pub employee: String,
    pub result: PersonalIncomeResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    pub row: usize,
    pub employee: Option<String>,
    pub reason: String,
}

/// Personal income tax for every readable payroll row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub regime: PitRegime,
    pub entries: Vec<BatchEntry>,
    pub failures: Vec<BatchFailure>,
    pub total_gross: Decimal,
    pub total_tax: Decimal,
}

/// Runs `calculator` over each row.
///
/// Unreadable rows and rows the calculator rejects are collected as
/// failures; the run always continues to the end.
pub fn run_batch(
    rows: &[PayrollRow],
    calculator: &PersonalIncomeCalculator<'_>,
    regime: PitRegime,
) -> BatchReport {
    let mut report = BatchReport {
        regime,
        entries: Vec::new(),
        failures: Vec::new(),
        total_gross: Decimal::ZERO,
        total_tax: Decimal::ZERO,
    };

    for row in rows {
        let record = match &row.record {
            Ok(record) => record,
            Err(err) => {
                report.failures.push(BatchFailure {
                    row: row.row,
                    employee: None,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let computed = calculator.calculate(&record.to_input(regime)).and_then(|result| {
            let total_gross = report.total_gross.checked_add(result.gross_income);
            let total_tax = report.total_tax.checked_add(result.total_tax());
            match total_gross.zip(total_tax) {
                Some(totals) => Ok((result, totals)),
                None => Err(InvalidInput::OutOfRange {
                    field: "payroll totals",
                }),
            }
        });

        match computed {
            Ok((result, (total_gross, total_tax))) => {
                report.total_gross = total_gross;
                report.total_tax = total_tax;
                report.entries.push(BatchEntry {
                    row: row.row,
                    employee: record.employee.clone(),
                    result,
                });
            }
            Err(err) => {
                warn!(row = row.row, employee = %record.employee, error = %err, "payroll row rejected");
                report.failures.push(BatchFailure {
                    row: row.row,
                    employee: Some(record.employee.clone()),
                    reason: format!("row {}: {err}", row.row),
                });
            }
        }
    }

    info!(
        computed = report.entries.len(),
        failed = report.failures.len(),
        "payroll batch finished"
    );
    report
}

impl ToReport for BatchReport {
    fn to_report(&self) -> ReportSections {
        let employees = self.entries.iter().fold(Section::new("Employees"), |section, entry| {
            section.line(format!(
                "{}: tax {} on gross {} ({} effective), monthly {}",
                entry.employee,
                format_naira(entry.result.total_tax()),
                format_naira(entry.result.gross_income),
                format_percent(entry.result.effective_rate_percent),
                format_naira(entry.result.monthly_tax),
            ))
        });

        let mut sections = vec![
            employees,
            Section::new("Totals")
                .entry("Employees computed", self.entries.len().to_string())
                .entry("Total gross income", format_naira(self.total_gross))
                .entry("Total tax", format_naira(self.total_tax)),
        ];
        if !self.failures.is_empty() {
            sections.push(Section {
                heading: "Rows Not Computed".to_string(),
                lines: self.failures.iter().map(|failure| failure.reason.clone()).collect(),
            });
        }

        ReportSections {
            title: "Payroll Personal Income Tax".to_string(),
            subtitle: Some(self.regime.label().to_string()),
            sections,
            filename: "payroll-income-tax.pdf".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::payroll::{PayrollLoadError, PayrollRecord};

    fn record(
        employee: &str,
        gross_income: Decimal,
    ) -> PayrollRecord {
        PayrollRecord {
            employee: employee.to_string(),
            gross_income,
            relief_allowance: None,
            deductions: None,
            annual_rent: None,
        }
    }

    #[test]
    fn computes_valid_rows_and_collects_failures() {
        let rows = vec![
            PayrollRow {
                row: 1,
                record: Ok(record("Ngozi", dec!(5000000))),
            },
            PayrollRow {
                row: 2,
                record: Err(PayrollLoadError::Row {
                    row: 2,
                    message: "bad decimal".to_string(),
                }),
            },
            PayrollRow {
                row: 3,
                record: Ok(record("Tunde", dec!(0))),
            },
            PayrollRow {
                row: 4,
                record: Ok(record("Emeka", dec!(3000000))),
            },
        ];
        let calculator = PersonalIncomeCalculator::for_regime(PitRegime::Reform);

        let report = run_batch(&rows, &calculator, PitRegime::Reform);

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].reason, "row 2: bad decimal");
        assert_eq!(report.failures[1].employee.as_deref(), Some("Tunde"));
        assert_eq!(report.total_gross, dec!(8000000));
        // 690,000 + 330,000
        assert_eq!(report.total_tax, dec!(1020000));
    }

    #[test]
    fn row_that_overflows_the_totals_is_a_failure() {
        let rows = vec![
            PayrollRow {
                row: 1,
                record: Ok(record("Ngozi", Decimal::MAX)),
            },
            PayrollRow {
                row: 2,
                record: Ok(record("Emeka", Decimal::MAX)),
            },
        ];
        let calculator = PersonalIncomeCalculator::for_regime(PitRegime::Reform);

        let report = run_batch(&rows, &calculator, PitRegime::Reform);

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.total_gross, Decimal::MAX);
        assert_eq!(
            report.failures[0].reason,
            "row 2: payroll totals is outside the range that can be calculated"
        );
    }

    #[test]
    fn report_lists_failures_only_when_present() {
        let rows = vec![PayrollRow {
            row: 1,
            record: Ok(record("Ngozi", dec!(5000000))),
        }];
        let calculator = PersonalIncomeCalculator::for_regime(PitRegime::Reform);

        let report = run_batch(&rows, &calculator, PitRegime::Reform).to_report();

        assert!(report.section("Rows Not Computed").is_none());
        assert_eq!(
            report.section("Totals").unwrap().lines,
            vec![
                "Employees computed: 1",
                "Total gross income: ₦5,000,000",
                "Total tax: ₦690,000",
            ]
        );
    }
}
