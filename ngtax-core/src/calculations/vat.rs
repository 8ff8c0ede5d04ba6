//! Value added tax, extracted from a VAT-inclusive amount or added to a
//! VAT-exclusive one.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::VatMode;
use crate::error::{InvalidInput, in_range, require_non_negative, require_positive};

/// Standard VAT rate, in percent.
pub const STANDARD_VAT_RATE: Decimal = dec!(7.5);

/// Rate applied to zero-rated supplies, in percent.
pub const ZERO_RATE: Decimal = dec!(0);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatInput {
    pub amount: Decimal,
    /// Percent, e.g. `7.5`.
    pub rate_percent: Decimal,
    pub mode: VatMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatResult {
    pub mode: VatMode,
    pub rate_percent: Decimal,
    pub net_amount: Decimal,
    pub vat_amount: Decimal,
    pub gross_amount: Decimal,
}

/// # Errors
///
/// [`InvalidInput`] when the amount is not positive, the rate is negative, or
/// the VAT on the amount overflows.
pub fn calculate(input: &VatInput) -> Result<VatResult, InvalidInput> {
    let amount = require_positive("amount", input.amount)?;
    let rate = require_non_negative("VAT rate", input.rate_percent)?;

    let scaled = in_range("amount", amount.checked_mul(rate))?;
    let (net_amount, vat_amount, gross_amount) = match input.mode {
        VatMode::Inclusive => {
            let divisor = in_range("VAT rate", Decimal::ONE_HUNDRED.checked_add(rate))?;
            let vat_amount = in_range("amount", scaled.checked_div(divisor))?;
            (amount - vat_amount, vat_amount, amount)
        }
        VatMode::Exclusive => {
            let vat_amount = in_range("amount", scaled.checked_div(Decimal::ONE_HUNDRED))?;
            (amount, vat_amount, in_range("amount", amount.checked_add(vat_amount))?)
        }
    };

    Ok(VatResult {
        mode: input.mode,
        rate_percent: rate,
        net_amount,
        vat_amount,
        gross_amount,
    })
}
