//! Progressive band calculator.
//!
//! Applies an ordered band table to an income figure and reports the total
//! tax together with the share of income and tax falling in each band. The
//! personal income tax calculator and the tax-savings planner both delegate
//! here.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use ngtax_core::BracketTable;
//! use ngtax_core::calculations::compute_progressive_tax;
//!
//! let result = compute_progressive_tax(dec!(3000000), BracketTable::reform_2026().brackets());
//!
//! // (3,000,000 - 800,000) x 15%
//! assert_eq!(result.total, dec!(330000));
//! assert_eq!(result.breakdown.len(), 2);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::TaxBracket;
use crate::report::{format_naira, format_percent};

/// The part of an income that fell inside one band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandShare {
    /// e.g. `₦800,000 – ₦3,000,000` or `Above ₦50,000,000`.
    pub range_label: String,
    /// e.g. `15%`.
    pub rate_percent_label: String,
    pub tax_rate: Decimal,
    pub taxable_amount: Decimal,
    pub tax: Decimal,
}

/// Total tax and per-band breakdown for one income figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressiveTax {
    pub income: Decimal,
    pub total: Decimal,
    /// Bands with a strictly positive slice, lowest first.
    pub breakdown: Vec<BandShare>,
}

impl ProgressiveTax {
    /// Rate of the highest band the income reached, zero for no income.
    pub fn marginal_rate(&self) -> Decimal {
        self.breakdown
            .last()
            .map(|share| share.tax_rate)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Applies `brackets` to `income`.
///
/// # Preconditions
///
/// `income` is non-negative and `brackets` is ascending, contiguous and
/// non-overlapping with an unbounded last band. The function does not
/// re-check the table; build it through [`crate::BracketTable::new`] when it
/// comes from outside the crate.
///
/// No rounding is applied. With every rate in `[0, 1]` the band slices
/// partition `income`, so neither the slices nor `total` can exceed it.
pub fn compute_progressive_tax(
    income: Decimal,
    brackets: &[TaxBracket],
) -> ProgressiveTax {
    let mut total = Decimal::ZERO;
    let mut breakdown = Vec::new();

    for bracket in brackets {
        if income <= bracket.min_income {
            break;
        }

        let upper = bracket
            .max_income
            .map_or(income, |max_income| income.min(max_income));
        let slice = upper - bracket.min_income;

        if slice > Decimal::ZERO {
            let tax = slice * bracket.tax_rate;
            total += tax;
            breakdown.push(BandShare {
                range_label: range_label(bracket),
                rate_percent_label: format_percent(bracket.tax_rate * Decimal::ONE_HUNDRED),
                tax_rate: bracket.tax_rate,
                taxable_amount: slice,
                tax,
            });
        }

        if bracket.max_income.is_none_or(|max_income| income <= max_income) {
            break;
        }
    }

    debug!(
        income = %income,
        total = %total,
        bands = breakdown.len(),
        "progressive tax computed"
    );

    ProgressiveTax {
        income,
        total,
        breakdown,
    }
}

pub(crate) fn range_label(bracket: &TaxBracket) -> String {
    match bracket.max_income {
        Some(max_income) => format!(
            "{} – {}",
            format_naira(bracket.min_income),
            format_naira(max_income)
        ),
        None => format!("Above {}", format_naira(bracket.min_income)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::BracketTable;

    fn reform() -> &'static [TaxBracket] {
        BracketTable::reform_2026().brackets()
    }

    fn legacy() -> &'static [TaxBracket] {
        BracketTable::legacy_pita().brackets()
    }

    fn assert_coverage(result: &ProgressiveTax, brackets: &[TaxBracket]) {
        let tax_sum: Decimal = result.breakdown.iter().map(|s| s.tax).sum();
        let slice_sum: Decimal = result.breakdown.iter().map(|s| s.taxable_amount).sum();
        let floor = brackets[0].min_income;
        let expected_slices = if result.income > floor {
            result.income - floor
        } else {
            Decimal::ZERO
        };

        assert_eq!(result.total, tax_sum);
        assert_eq!(slice_sum, expected_slices);
    }

    // =========================================================================
    // reform bands
    // =========================================================================

    #[test]
    fn exempt_threshold_yields_no_tax() {
        let result = compute_progressive_tax(dec!(800000), reform());

        assert_eq!(result.total, dec!(0));
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].taxable_amount, dec!(800000));
    }

    #[test]
    fn one_naira_above_threshold_is_taxed_at_fifteen_percent() {
        let result = compute_progressive_tax(dec!(800001), reform());

        assert_eq!(result.total, dec!(0.15));
        assert_eq!(result.breakdown[1].taxable_amount, dec!(1));
        assert_eq!(result.breakdown[1].rate_percent_label, "15%");
        assert_eq!(result.marginal_rate(), dec!(0.15));
    }

    #[test]
    fn top_band_income_walks_every_band() {
        let result = compute_progressive_tax(dec!(60000000), reform());

        // 2.2m x 15% + 9m x 18% + 13m x 21% + 25m x 23% + 10m x 25%
        assert_eq!(result.total, dec!(12930000));
        assert_eq!(result.breakdown.len(), 6);
        assert_eq!(result.breakdown[5].range_label, "Above ₦50,000,000");
        assert_eq!(result.breakdown[1].range_label, "₦800,000 – ₦3,000,000");
        assert_coverage(&result, reform());
    }

    #[test]
    fn income_on_band_edge_stops_at_that_band() {
        let result = compute_progressive_tax(dec!(3000000), reform());

        assert_eq!(result.breakdown.len(), 2);
        assert_eq!(result.total, dec!(330000));
    }

    // =========================================================================
    // legacy bands
    // =========================================================================

    #[test]
    fn legacy_bands_accumulate_each_slice() {
        let result = compute_progressive_tax(dec!(2000000), legacy());

        // 21,000 + 33,000 + 75,000 + 95,000 + 400,000 x 21%
        assert_eq!(result.total, dec!(308000));
        assert_eq!(result.breakdown.len(), 5);
        assert_coverage(&result, legacy());
    }

    #[test]
    fn zero_income_has_empty_breakdown() {
        let result = compute_progressive_tax(dec!(0), legacy());

        assert_eq!(result.total, dec!(0));
        assert!(result.breakdown.is_empty());
        assert_eq!(result.marginal_rate(), dec!(0));
        assert_coverage(&result, legacy());
    }

    // =========================================================================
    // properties
    // =========================================================================

    #[test]
    fn breakdown_always_sums_to_total_and_income() {
        let incomes = [
            dec!(1),
            dec!(299999.99),
            dec!(300000),
            dec!(650000.50),
            dec!(3200000),
            dec!(3200000.01),
            dec!(12000000),
            dec!(49999999),
            dec!(123456789.12),
        ];

        for income in incomes {
            for brackets in [legacy(), reform()] {
                let result = compute_progressive_tax(income, brackets);
                assert_coverage(&result, brackets);
            }
        }
    }

    #[test]
    fn table_with_raised_floor_covers_income_above_floor() {
        let brackets = vec![
            TaxBracket::new(dec!(1000), Some(dec!(2000)), dec!(0.1)),
            TaxBracket::new(dec!(2000), None, dec!(0.2)),
        ];

        let below = compute_progressive_tax(dec!(500), &brackets);
        let above = compute_progressive_tax(dec!(2500), &brackets);

        assert_coverage(&below, &brackets);
        assert_coverage(&above, &brackets);
        assert_eq!(above.total, dec!(200));
    }

    #[test]
    fn tax_rises_strictly_with_income_when_rates_are_positive() {
        let mut previous = compute_progressive_tax(dec!(0), legacy()).total;
        let mut income = dec!(0);

        while income < dec!(10000000) {
            income += dec!(137500);
            let current = compute_progressive_tax(income, legacy()).total;
            assert!(current > previous, "tax did not rise at {income}");
            previous = current;
        }
    }

    #[test]
    fn reform_tax_rises_strictly_above_exemption() {
        let mut previous = compute_progressive_tax(dec!(800000), reform()).total;
        let mut income = dec!(800000);

        while income < dec!(80000000) {
            income += dec!(1250000);
            let current = compute_progressive_tax(income, reform()).total;
            assert!(current > previous, "tax did not rise at {income}");
            previous = current;
        }
    }

    #[test]
    fn largest_income_is_taxed_without_overflow() {
        let result = compute_progressive_tax(Decimal::MAX, BracketTable::reform_2026().brackets());

        assert!(result.total < Decimal::MAX);
        assert_eq!(result.breakdown.len(), 6);
    }
}
