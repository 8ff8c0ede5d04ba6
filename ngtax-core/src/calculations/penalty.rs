//! Late filing penalty, late payment penalty and interest on an overdue tax.
//!
//! Lateness is charged in whole 30-day months, with at least one month charged
//! once any lateness is recorded. Interest is simple: the monthly rate times
//! the number of months, never compounded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InvalidInput, in_range, require_positive};
use crate::{PenaltyConfig, TaxType};

const DAYS_PER_MONTH: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyInput {
    pub tax_type: TaxType,
    pub principal: Decimal,
    /// Zero or negative values are treated as one day late.
    pub days_late: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyResult {
    pub tax_type: TaxType,
    pub principal: Decimal,
    pub days_late: i64,
    pub months_late: u64,
    pub filing_penalty: Decimal,
    pub payment_penalty: Decimal,
    pub interest: Decimal,
    pub total_due: Decimal,
}

impl PenaltyResult {
    /// Everything owed on top of the principal.
    pub fn total_charges(&self) -> Decimal {
        self.filing_penalty + self.payment_penalty + self.interest
    }
}

/// Whole months charged for `days_late`, never fewer than one.
pub fn months_late(days_late: i64) -> u64 {
    let days = days_late.max(1).unsigned_abs();
    days.div_ceil(DAYS_PER_MONTH).max(1)
}

/// Estimates charges using the schedule for the input's tax type.
///
/// # Errors
///
/// [`InvalidInput`] when the principal is not positive or the charges
/// overflow.
pub fn estimate(input: &PenaltyInput) -> Result<PenaltyResult, InvalidInput> {
    estimate_with(input, &PenaltyConfig::for_tax_type(input.tax_type))
}

/// Estimates charges using an explicit schedule.
///
/// # Errors
///
/// [`InvalidInput`] when the principal is not positive or the charges
/// overflow.
pub fn estimate_with(
    input: &PenaltyInput,
    config: &PenaltyConfig,
) -> Result<PenaltyResult, InvalidInput> {
    let principal = require_positive("outstanding principal", input.principal)?;

    let months = months_late(input.days_late);
    let months_decimal = Decimal::from(months);
    let additional_months = Decimal::from(months - 1);

    let filing_penalty = in_range(
        "days late",
        config
            .monthly_increment
            .checked_mul(additional_months)
            .and_then(|increments| increments.checked_add(config.filing_penalty_base)),
    )?;
    let payment_penalty = in_range(
        "outstanding principal",
        principal.checked_mul(config.payment_penalty_rate),
    )?;
    let interest = in_range(
        "days late",
        principal
            .checked_mul(config.monthly_interest_rate)
            .and_then(|monthly| monthly.checked_mul(months_decimal)),
    )?;
    let total_due = in_range(
        "outstanding principal",
        principal
            .checked_add(filing_penalty)
            .and_then(|sum| sum.checked_add(payment_penalty))
            .and_then(|sum| sum.checked_add(interest)),
    )?;

    debug!(
        tax_type = input.tax_type.as_str(),
        days = input.days_late,
        months,
        "penalty months computed"
    );

    Ok(PenaltyResult {
        tax_type: input.tax_type,
        principal,
        days_late: input.days_late,
        months_late: months,
        filing_penalty,
        payment_penalty,
        interest,
        total_due,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // months_late tests
    // =========================================================================

    #[test]
    fn months_late_rounds_partial_months_up() {
        assert_eq!(months_late(1), 1);
        assert_eq!(months_late(30), 1);
        assert_eq!(months_late(31), 2);
        assert_eq!(months_late(45), 2);
        assert_eq!(months_late(90), 3);
        assert_eq!(months_late(91), 4);
    }

    #[test]
    fn months_late_charges_one_month_for_zero_or_negative_days() {
        assert_eq!(months_late(0), 1);
        assert_eq!(months_late(-20), 1);
        assert_eq!(months_late(i64::MIN), 1);
    }

    // =========================================================================
    // estimate tests
    // =========================================================================

    #[test]
    fn company_tax_forty_five_days_late() {
        let result = estimate(&PenaltyInput {
            tax_type: TaxType::Cit,
            principal: dec!(1000000),
            days_late: 45,
        })
        .unwrap();

        assert_eq!(result.months_late, 2);
        assert_eq!(result.filing_penalty, dec!(150000));
        assert_eq!(result.payment_penalty, dec!(100000));
        assert_eq!(result.interest, dec!(100000));
        assert_eq!(result.total_due, dec!(1350000));
        assert_eq!(result.total_charges(), dec!(350000));
    }

    #[test]
    fn personal_income_tax_three_months_late() {
        let result = estimate(&PenaltyInput {
            tax_type: TaxType::Pit,
            principal: dec!(500000),
            days_late: 90,
        })
        .unwrap();

        assert_eq!(result.filing_penalty, dec!(150000));
        assert_eq!(result.payment_penalty, dec!(50000));
        assert_eq!(result.interest, dec!(75000));
        assert_eq!(result.total_due, dec!(775000));
    }

    #[test]
    fn first_month_charges_only_base_filing_penalty() {
        for &tax_type in TaxType::all() {
            let config = PenaltyConfig::for_tax_type(tax_type);
            let result = estimate(&PenaltyInput {
                tax_type,
                principal: dec!(200000),
                days_late: 0,
            })
            .unwrap();

            assert_eq!(result.months_late, 1);
            assert_eq!(result.filing_penalty, config.filing_penalty_base);
            assert_eq!(result.interest, dec!(10000));
        }
    }

    #[test]
    fn interest_grows_linearly_with_months() {
        let twelve_months = estimate(&PenaltyInput {
            tax_type: TaxType::Vat,
            principal: dec!(100000),
            days_late: 360,
        })
        .unwrap();

        // 100,000 x 5% x 12, not 100,000 x (1.05^12 - 1)
        assert_eq!(twelve_months.interest, dec!(60000));
        assert_eq!(twelve_months.filing_penalty, dec!(325000));
    }

    #[test]
    fn explicit_schedule_overrides_defaults() {
        let config = PenaltyConfig {
            filing_penalty_base: dec!(10000),
            monthly_increment: dec!(5000),
            payment_penalty_rate: dec!(0),
            monthly_interest_rate: dec!(0.01),
        };

        let result = estimate_with(
            &PenaltyInput {
                tax_type: TaxType::Wht,
                principal: dec!(100000),
                days_late: 61,
            },
            &config,
        )
        .unwrap();

        assert_eq!(result.filing_penalty, dec!(20000));
        assert_eq!(result.payment_penalty, dec!(0));
        assert_eq!(result.interest, dec!(3000));
    }

    #[test]
    fn rejects_zero_principal() {
        let result = estimate(&PenaltyInput {
            tax_type: TaxType::Cit,
            principal: dec!(0),
            days_late: 10,
        });

        assert_eq!(
            result,
            Err(InvalidInput::NotPositive {
                field: "outstanding principal",
                value: dec!(0),
            })
        );
    }

    #[test]
    fn interest_overflow_is_invalid_input() {
        let result = estimate(&PenaltyInput {
            tax_type: TaxType::Cit,
            principal: dec!(1000000000000000),
            days_late: i64::MAX,
        });

        assert_eq!(result, Err(InvalidInput::OutOfRange { field: "days late" }));
    }

    #[test]
    fn total_overflow_is_invalid_input() {
        let result = estimate(&PenaltyInput {
            tax_type: TaxType::Vat,
            principal: Decimal::MAX,
            days_late: 1,
        });

        assert_eq!(result, Err(InvalidInput::OutOfRange { field: "outstanding principal" }));
    }
}
