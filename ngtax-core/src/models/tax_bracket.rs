use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One band of a progressive rate table.
///
/// `max_income` of `None` marks the open-ended top band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        min_income: Decimal,
        max_income: Option<Decimal>,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income,
            tax_rate,
        }
    }
}

/// Reasons a set of bands cannot form a [`BracketTable`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("bracket table has no bands")]
    Empty,

    #[error("bracket table starts below zero at {0}")]
    NegativeLowerBound(Decimal),

    #[error("band {index} is empty or inverted ({min} to {max})")]
    EmptyBand {
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    #[error("band {index} starts at {found} but the previous band ends at {expected}")]
    NotContiguous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("band {index} is unbounded but is not the last band")]
    UnboundedBeforeEnd { index: usize },

    #[error("the last band must be unbounded, found upper bound {0}")]
    BoundedTopBand(Decimal),

    #[error("band {index} rate {rate} is outside 0..=1")]
    RateOutOfRange { index: usize, rate: Decimal },
}

/// An ordered, contiguous, non-overlapping progressive rate table whose last
/// band is unbounded.
///
/// The only way to build one is [`BracketTable::new`], which checks every
/// invariant, so code holding a `BracketTable` may rely on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Validates `brackets` and wraps them.
    ///
    /// # Errors
    ///
    /// Returns [`BracketTableError`] when the bands are empty, start below
    /// zero, leave a gap or overlap, contain an empty band, are unbounded
    /// anywhere but the end, end with a bounded band, or carry a rate outside
    /// `0..=1`.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, BracketTableError> {
        let first = brackets.first().ok_or(BracketTableError::Empty)?;
        if first.min_income < Decimal::ZERO {
            return Err(BracketTableError::NegativeLowerBound(first.min_income));
        }

        let last_index = brackets.len() - 1;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
                return Err(BracketTableError::RateOutOfRange {
                    index,
                    rate: bracket.tax_rate,
                });
            }

            match bracket.max_income {
                Some(max) if max <= bracket.min_income => {
                    return Err(BracketTableError::EmptyBand {
                        index,
                        min: bracket.min_income,
                        max,
                    });
                }
                Some(max) if index == last_index => {
                    return Err(BracketTableError::BoundedTopBand(max));
                }
                None if index != last_index => {
                    return Err(BracketTableError::UnboundedBeforeEnd { index });
                }
                _ => {}
            }

            if index > 0 {
                // The previous band is bounded, checked on the previous pass.
                let expected = brackets[index - 1].max_income.unwrap_or(Decimal::MAX);
                if bracket.min_income != expected {
                    return Err(BracketTableError::NotContiguous {
                        index,
                        expected,
                        found: bracket.min_income,
                    });
                }
            }
        }

        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// The highest marginal rate in the table.
    pub fn top_rate(&self) -> Decimal {
        self.brackets
            .iter()
            .map(|b| b.tax_rate)
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    /// Personal Income Tax Act schedule, applied after the consolidated
    /// relief allowance.
    pub fn legacy_pita() -> &'static BracketTable {
        &LEGACY_PITA
    }

    /// Nigeria Tax Act 2025 bands, in force from 1 January 2026. The first
    /// ₦800,000 is exempt.
    pub fn reform_2026() -> &'static BracketTable {
        &REFORM_2026
    }
}

impl AsRef<[TaxBracket]> for BracketTable {
    fn as_ref(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

/// Builds a table from `(upper bound, rate)` steps starting at zero.
fn static_table(steps: &[(Option<Decimal>, Decimal)]) -> BracketTable {
    let mut min_income = Decimal::ZERO;
    let brackets = steps
        .iter()
        .map(|&(max_income, tax_rate)| {
            let bracket = TaxBracket::new(min_income, max_income, tax_rate);
            min_income = max_income.unwrap_or(min_income);
            bracket
        })
        .collect();
    BracketTable { brackets }
}

static LEGACY_PITA: LazyLock<BracketTable> = LazyLock::new(|| {
    static_table(&[
        (Some(dec!(300000)), dec!(0.07)),
        (Some(dec!(600000)), dec!(0.11)),
        (Some(dec!(1100000)), dec!(0.15)),
        (Some(dec!(1600000)), dec!(0.19)),
        (Some(dec!(3200000)), dec!(0.21)),
        (None, dec!(0.24)),
    ])
});

static REFORM_2026: LazyLock<BracketTable> = LazyLock::new(|| {
    static_table(&[
        (Some(dec!(800000)), dec!(0)),
        (Some(dec!(3000000)), dec!(0.15)),
        (Some(dec!(12000000)), dec!(0.18)),
        (Some(dec!(25000000)), dec!(0.21)),
        (Some(dec!(50000000)), dec!(0.23)),
        (None, dec!(0.25)),
    ])
});
