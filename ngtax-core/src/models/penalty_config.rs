use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Tax whose late filing or payment is being estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxType {
    Pit,
    Cit,
    Vat,
    Wht,
}

impl TaxType {
    pub fn all() -> &'static [TaxType] {
        &[Self::Pit, Self::Cit, Self::Vat, Self::Wht]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pit => "pit",
            Self::Cit => "cit",
            Self::Vat => "vat",
            Self::Wht => "wht",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pit" => Some(Self::Pit),
            "cit" => Some(Self::Cit),
            "vat" => Some(Self::Vat),
            "wht" => Some(Self::Wht),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pit => "Personal Income Tax",
            Self::Cit => "Company Income Tax",
            Self::Vat => "Value Added Tax",
            Self::Wht => "Withholding Tax",
        }
    }
}

/// Late filing and late payment charges for one tax type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyConfig {
    /// Charged for the first month of late filing.
    pub filing_penalty_base: Decimal,
    /// Added for every further month the return stays outstanding.
    pub monthly_increment: Decimal,
    /// Flat share of the unpaid principal.
    pub payment_penalty_rate: Decimal,
    /// Simple interest per month late.
    pub monthly_interest_rate: Decimal,
}

impl PenaltyConfig {
    pub fn for_tax_type(tax_type: TaxType) -> Self {
        let (filing_penalty_base, monthly_increment) = match tax_type {
            TaxType::Pit => (dec!(50000), dec!(50000)),
            TaxType::Cit => (dec!(100000), dec!(50000)),
            TaxType::Vat => (dec!(50000), dec!(25000)),
            TaxType::Wht => (dec!(50000), dec!(25000)),
        };

        Self {
            filing_penalty_base,
            monthly_increment,
            payment_penalty_rate: dec!(0.10),
            monthly_interest_rate: dec!(0.05),
        }
    }
}
