//! Tax-savings planner comparing three deduction scenarios over one band table.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::common::floor_at_zero;
use super::personal_income::{RENT_RELIEF_CAP, rent_relief};
use super::progressive::compute_progressive_tax;
use crate::BracketTable;
use crate::error::{InvalidInput, in_range, require_non_negative, require_positive};
use crate::report::format_naira;

const PENSION_SHARE: Decimal = dec!(0.08);
const NHF_SHARE: Decimal = dec!(0.025);

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavingsPlanInput {
    pub gross_income: Decimal,
    pub pension: Decimal,
    pub nhf: Decimal,
    pub life_insurance: Decimal,
    pub annual_rent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsScenario {
    pub label: String,
    pub deductions: Decimal,
    pub taxable_income: Decimal,
    pub tax: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsPlan {
    pub gross_income: Decimal,
    pub no_deductions: SavingsScenario,
    pub current: SavingsScenario,
    pub maximum: SavingsScenario,
    /// Tax saved by the deductions already claimed.
    pub current_savings: Decimal,
    /// Further saving available by moving to the maximum scenario.
    pub additional_savings: Decimal,
    pub suggestions: Vec<String>,
}

impl SavingsPlan {
    pub fn scenarios(&self) -> [&SavingsScenario; 3] {
        [&self.no_deductions, &self.current, &self.maximum]
    }
}

#[derive(Debug, Clone)]
pub struct SavingsPlanner<'a> {
    brackets: &'a BracketTable,
}

impl<'a> SavingsPlanner<'a> {
    pub fn new(brackets: &'a BracketTable) -> Self {
        Self { brackets }
    }

    /// # Errors
    ///
    /// [`InvalidInput`] when gross income is not positive, any contribution
    /// is negative, or the contributions together overflow.
    pub fn plan(
        &self,
        input: &SavingsPlanInput,
    ) -> Result<SavingsPlan, InvalidInput> {
        let gross_income = require_positive("gross income", input.gross_income)?;
        let pension = require_non_negative("pension contribution", input.pension)?;
        let nhf = require_non_negative("NHF contribution", input.nhf)?;
        let life_insurance = require_non_negative("life insurance premium", input.life_insurance)?;
        let annual_rent = require_non_negative("annual rent", input.annual_rent)?;

        let max_pension = pension.max(gross_income * PENSION_SHARE);
        let max_nhf = nhf.max(gross_income * NHF_SHARE);
        let current_rent_relief = rent_relief(annual_rent);

        let no_deductions = self.scenario("No deductions", gross_income, Decimal::ZERO);
        let current = self.scenario(
            "Current deductions",
            gross_income,
            sum_deductions(&[pension, nhf, life_insurance, current_rent_relief])?,
        );
        let maximum = self.scenario(
            "Maximum deductions",
            gross_income,
            sum_deductions(&[max_pension, max_nhf, life_insurance, RENT_RELIEF_CAP])?,
        );

        let mut suggestions = Vec::new();
        if pension < max_pension {
            suggestions.push(format!(
                "Raise pension contributions to {} a year (8% of gross income).",
                format_naira(max_pension)
            ));
        }
        if nhf < max_nhf {
            suggestions.push(format!(
                "Contribute {} a year to the National Housing Fund (2.5% of gross income).",
                format_naira(max_nhf)
            ));
        }
        if life_insurance.is_zero() {
            suggestions
                .push("Premiums on a life assurance policy are deductible from taxable income.".to_string());
        }
        if current_rent_relief < RENT_RELIEF_CAP {
            suggestions.push(format!(
                "Keep rent receipts: rent relief is 20% of annual rent, up to {}.",
                format_naira(RENT_RELIEF_CAP)
            ));
        }

        let current_savings = no_deductions.tax - current.tax;
        let additional_savings = floor_at_zero(current.tax - maximum.tax);
        debug!(
            current = %current_savings,
            additional = %additional_savings,
            suggestions = suggestions.len(),
            "savings plan computed"
        );

        Ok(SavingsPlan {
            gross_income,
            no_deductions,
            current,
            maximum,
            current_savings,
            additional_savings,
            suggestions,
        })
    }

    fn scenario(
        &self,
        label: &str,
        gross_income: Decimal,
        deductions: Decimal,
    ) -> SavingsScenario {
        let taxable_income = floor_at_zero(gross_income - deductions);
        let tax = compute_progressive_tax(taxable_income, self.brackets.brackets()).total;

        SavingsScenario {
            label: label.to_string(),
            deductions,
            taxable_income,
            tax,
        }
    }
}

fn sum_deductions(amounts: &[Decimal]) -> Result<Decimal, InvalidInput> {
    let total = amounts
        .iter()
        .try_fold(Decimal::ZERO, |sum, amount| sum.checked_add(*amount));
    in_range("deductions", total)
}
