//! Company income tax by size category and sector.
//!
//! The rate comes from an ordered rule list; the first rule whose predicate
//! matches wins:
//!
//! | Priority | Condition | Rate |
//! |----------|-----------|------|
//! | 1 | small company | 0% |
//! | 2 | medium company | 20% |
//! | 3 | agricultural sector | 15% |
//! | 4 | manufacturing or solid minerals | 20% |
//! | 5 | large company, general sector | 30% |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::common::percent_of;
use crate::error::{InvalidInput, in_range, require_positive};
use crate::{CompanySize, Sector};

/// A predicate over the company profile paired with the rate it selects.
#[derive(Debug, Clone, Copy)]
pub struct RateRule {
    pub description: &'static str,
    pub rate: Decimal,
    applies: fn(CompanySize, Sector) -> bool,
}

impl RateRule {
    pub fn applies(
        &self,
        size: CompanySize,
        sector: Sector,
    ) -> bool {
        (self.applies)(size, sector)
    }
}

fn is_small(size: CompanySize, _: Sector) -> bool {
    size == CompanySize::Small
}

fn is_medium(size: CompanySize, _: Sector) -> bool {
    size == CompanySize::Medium
}

fn is_agricultural(_: CompanySize, sector: Sector) -> bool {
    sector == Sector::Agricultural
}

fn is_industrial(_: CompanySize, sector: Sector) -> bool {
    matches!(sector, Sector::Manufacturing | Sector::SolidMinerals)
}

fn is_large_general(size: CompanySize, sector: Sector) -> bool {
    size == CompanySize::Large && sector == Sector::General
}

/// Rules checked in order before [`STANDARD_RATE`].
pub static RATE_RULES: [RateRule; 4] = [
    RateRule {
        description: "Small company exemption",
        rate: dec!(0),
        applies: is_small,
    },
    RateRule {
        description: "Medium company rate",
        rate: dec!(0.20),
        applies: is_medium,
    },
    RateRule {
        description: "Agricultural sector incentive rate",
        rate: dec!(0.15),
        applies: is_agricultural,
    },
    RateRule {
        description: "Manufacturing and solid minerals rate",
        rate: dec!(0.20),
        applies: is_industrial,
    },
];

/// Large companies in the general sector; reached only when no rule in
/// [`RATE_RULES`] matched.
pub static STANDARD_RATE: RateRule = RateRule {
    description: "Standard large company rate",
    rate: dec!(0.30),
    applies: is_large_general,
};

/// Picks the rule that governs `size` and `sector`.
pub fn select_rate_rule(
    size: CompanySize,
    sector: Sector,
) -> &'static RateRule {
    let rule = RATE_RULES
        .iter()
        .find(|rule| rule.applies(size, sector))
        .unwrap_or(&STANDARD_RATE);
    debug!(
        size = size.as_str(),
        sector = sector.as_str(),
        rule = rule.description,
        "company rate selected"
    );
    rule
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIncomeInput {
    pub turnover: Decimal,
    pub profit_before_tax: Decimal,
    pub size: CompanySize,
    pub sector: Sector,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyIncomeResult {
    pub size: CompanySize,
    pub sector: Sector,
    pub turnover: Decimal,
    pub profit_before_tax: Decimal,
    pub rate_basis: String,
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub net_profit: Decimal,
    pub effective_rate_percent: Decimal,
}

/// # Errors
///
/// [`InvalidInput`] when turnover or profit before tax is not positive.
pub fn calculate(input: &CompanyIncomeInput) -> Result<CompanyIncomeResult, InvalidInput> {
    let turnover = require_positive("turnover", input.turnover)?;
    let profit_before_tax = require_positive("profit before tax", input.profit_before_tax)?;

    let rule = select_rate_rule(input.size, input.sector);
    let tax_amount = in_range("profit before tax", profit_before_tax.checked_mul(rule.rate))?;
    let effective_rate_percent =
        in_range("profit before tax", percent_of(tax_amount, profit_before_tax))?;

    Ok(CompanyIncomeResult {
        size: input.size,
        sector: input.sector,
        turnover,
        profit_before_tax,
        rate_basis: rule.description.to_string(),
        tax_rate: rule.rate,
        tax_amount,
        net_profit: profit_before_tax - tax_amount,
        effective_rate_percent,
    })
}
