//! Personal income tax under the legacy PITA schedule or the 2026 reform bands.
//!
//! | Regime | Relief | Bands |
//! |--------|--------|-------|
//! | Legacy | Consolidated relief allowance: the higher of ₦200,000 or 1% of gross, plus 20% of gross (or a figure supplied by the user) | 7% to 24% |
//! | Reform | Rent relief: 20% of annual rent, capped at ₦500,000 | 0% on the first ₦800,000, then 15% to 25% |
//!
//! Other deductions (pension, NHF, life assurance) reduce the base under
//! both regimes.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::common::{floor_at_zero, percent_of};
use super::progressive::{ProgressiveTax, compute_progressive_tax};
use crate::error::{InvalidInput, in_range, require_non_negative, require_positive};
use crate::{BracketTable, PitRegime};

const CRA_FLOOR: Decimal = dec!(200000);
const CRA_GROSS_SHARE: Decimal = dec!(0.01);
const CRA_GROSS_ALLOWANCE: Decimal = dec!(0.20);
const RENT_RELIEF_SHARE: Decimal = dec!(0.20);
pub(crate) const RENT_RELIEF_CAP: Decimal = dec!(500000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalIncomeInput {
    pub gross_income: Decimal,
    pub regime: PitRegime,
    /// Legacy regime only. When `None` the consolidated relief allowance is
    /// computed from gross income.
    pub relief_allowance: Option<Decimal>,
    /// Pension, NHF, life assurance and other allowable deductions.
    pub deductions: Decimal,
    /// Reform regime only; drives rent relief.
    pub annual_rent: Decimal,
}

impl PersonalIncomeInput {
    pub fn new(
        gross_income: Decimal,
        regime: PitRegime,
    ) -> Self {
        Self {
            gross_income,
            regime,
            relief_allowance: None,
            deductions: Decimal::ZERO,
            annual_rent: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalIncomeResult {
    pub regime: PitRegime,
    pub gross_income: Decimal,
    /// Consolidated relief allowance (legacy) or rent relief (reform).
    pub relief_applied: Decimal,
    pub deductions: Decimal,
    pub taxable_income: Decimal,
    pub tax: ProgressiveTax,
    pub net_income: Decimal,
    pub monthly_tax: Decimal,
    pub effective_rate_percent: Decimal,
}

impl PersonalIncomeResult {
    pub fn total_tax(&self) -> Decimal {
        self.tax.total
    }
}

/// Personal income tax calculator over a validated band table.
#[derive(Debug, Clone)]
pub struct PersonalIncomeCalculator<'a> {
    brackets: &'a BracketTable,
}

impl<'a> PersonalIncomeCalculator<'a> {
    /// Uses `brackets` in place of the regime's built-in table, e.g. one
    /// loaded from a CSV file.
    pub fn new(brackets: &'a BracketTable) -> Self {
        Self { brackets }
    }

    /// Uses the built-in table for `regime`.
    pub fn for_regime(regime: PitRegime) -> PersonalIncomeCalculator<'static> {
        PersonalIncomeCalculator::new(regime.brackets())
    }

    /// # Errors
    ///
    /// [`InvalidInput`] when gross income is not positive, any relief,
    /// deduction or rent figure is negative, or relief and deductions together
    /// overflow.
    pub fn calculate(
        &self,
        input: &PersonalIncomeInput,
    ) -> Result<PersonalIncomeResult, InvalidInput> {
        let gross_income = require_positive("gross income", input.gross_income)?;
        let deductions = require_non_negative("deductions", input.deductions)?;
        let annual_rent = require_non_negative("annual rent", input.annual_rent)?;
        if let Some(relief) = input.relief_allowance {
            require_non_negative("relief allowance", relief)?;
        }

        let relief_applied = match input.regime {
            PitRegime::Legacy => input
                .relief_allowance
                .unwrap_or_else(|| consolidated_relief_allowance(gross_income)),
            PitRegime::Reform => rent_relief(annual_rent),
        };

        let total_relief = in_range("deductions", relief_applied.checked_add(deductions))?;
        let taxable_income = floor_at_zero(gross_income - total_relief);
        debug!(
            regime = input.regime.as_str(),
            relief = %relief_applied,
            taxable = %taxable_income,
            "personal income tax base"
        );

        let tax = compute_progressive_tax(taxable_income, self.brackets.brackets());
        let total = tax.total;

        Ok(PersonalIncomeResult {
            regime: input.regime,
            gross_income,
            relief_applied,
            deductions,
            taxable_income,
            net_income: gross_income - total,
            monthly_tax: total / dec!(12),
            effective_rate_percent: in_range("gross income", percent_of(total, gross_income))?,
            tax,
        })
    }
}

/// Higher of ₦200,000 or 1% of gross income, plus 20% of gross income.
pub fn consolidated_relief_allowance(gross_income: Decimal) -> Decimal {
    CRA_FLOOR.max(gross_income * CRA_GROSS_SHARE) + gross_income * CRA_GROSS_ALLOWANCE
}

/// 20% of annual rent paid, capped at ₦500,000.
pub fn rent_relief(annual_rent: Decimal) -> Decimal {
    (annual_rent * RENT_RELIEF_SHARE).min(RENT_RELIEF_CAP)
}
