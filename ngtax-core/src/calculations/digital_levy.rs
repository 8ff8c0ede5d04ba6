//! Levy on gross receipts of non-resident digital service providers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::LevyRegime;
use crate::error::{InvalidInput, in_range, require_positive};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalLevyInput {
    pub gross_receipts: Decimal,
    pub regime: LevyRegime,
    /// Number of reporting periods the levy is spread over; zero counts as one.
    pub reporting_months: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalLevyResult {
    pub regime: LevyRegime,
    pub gross_receipts: Decimal,
    pub levy_rate: Decimal,
    pub levy_amount: Decimal,
    pub reporting_months: u32,
    pub monthly_payment: Decimal,
}

/// 2% where profits are determinable, 4% where they are not.
pub fn levy_rate(regime: LevyRegime) -> Decimal {
    match regime {
        LevyRegime::Determinable => dec!(0.02),
        LevyRegime::Indeterminate => dec!(0.04),
    }
}

/// # Errors
///
/// [`InvalidInput`] when gross receipts are not positive.
pub fn calculate(input: &DigitalLevyInput) -> Result<DigitalLevyResult, InvalidInput> {
    let gross_receipts = require_positive("gross receipts", input.gross_receipts)?;
    let reporting_months = input.reporting_months.max(1);
    if reporting_months != input.reporting_months {
        debug!("reporting months raised to the one-period minimum");
    }

    let levy_rate = levy_rate(input.regime);
    let levy_amount = in_range("gross receipts", gross_receipts.checked_mul(levy_rate))?;
    let monthly_payment = in_range(
        "gross receipts",
        levy_amount.checked_div(Decimal::from(reporting_months)),
    )?;

    Ok(DigitalLevyResult {
        regime: input.regime,
        gross_receipts,
        levy_rate,
        levy_amount,
        reporting_months,
        monthly_payment,
    })
}
