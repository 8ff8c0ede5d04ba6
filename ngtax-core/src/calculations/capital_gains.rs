//! Capital gains tax on a single disposal at a flat 10%.
//!
//! A disposal at or below cost is a valid outcome with nothing to pay, so it
//! comes back as [`CapitalGainsOutcome::NoGain`] rather than as an error.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::common::percent_of;
use crate::HoldingPeriod;
use crate::error::{InvalidInput, in_range, require_positive};

pub const CGT_RATE: Decimal = dec!(0.10);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalGainsInput {
    pub purchase_price: Decimal,
    pub sale_price: Decimal,
    /// Recorded for the report only; the rate is the same either way.
    pub holding_period: HoldingPeriod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalGainsResult {
    pub purchase_price: Decimal,
    pub sale_price: Decimal,
    pub holding_period: HoldingPeriod,
    pub capital_gain: Decimal,
    pub tax_amount: Decimal,
    pub net_proceeds: Decimal,
    pub gain_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum CapitalGainsOutcome {
    Taxable(CapitalGainsResult),
    /// Sale price at or below purchase price; no tax is due.
    NoGain {
        purchase_price: Decimal,
        sale_price: Decimal,
        /// Zero or negative.
        difference: Decimal,
    },
}

impl CapitalGainsOutcome {
    pub fn tax_due(&self) -> Decimal {
        match self {
            Self::Taxable(result) => result.tax_amount,
            Self::NoGain { .. } => Decimal::ZERO,
        }
    }
}

/// # Errors
///
/// [`InvalidInput`] when either price is not positive, or when the gain is too
/// large a multiple of the purchase price to express as a percentage.
pub fn calculate(input: &CapitalGainsInput) -> Result<CapitalGainsOutcome, InvalidInput> {
    let purchase_price = require_positive("purchase price", input.purchase_price)?;
    let sale_price = require_positive("sale price", input.sale_price)?;

    let capital_gain = sale_price - purchase_price;
    if capital_gain <= Decimal::ZERO {
        warn!(
            purchase = %purchase_price,
            sale = %sale_price,
            "disposal at or below cost; no capital gains tax due"
        );
        return Ok(CapitalGainsOutcome::NoGain {
            purchase_price,
            sale_price,
            difference: capital_gain,
        });
    }

    let tax_amount = capital_gain * CGT_RATE;
    let gain_percent = in_range("purchase price", percent_of(capital_gain, purchase_price))?;

    Ok(CapitalGainsOutcome::Taxable(CapitalGainsResult {
        purchase_price,
        sale_price,
        holding_period: input.holding_period,
        capital_gain,
        tax_amount,
        net_proceeds: sale_price - tax_amount,
        gain_percent,
    }))
}
