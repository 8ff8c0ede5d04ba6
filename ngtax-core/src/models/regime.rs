use serde::{Deserialize, Serialize};

use super::BracketTable;

/// Personal income tax regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PitRegime {
    /// Personal Income Tax Act bands over a relief-adjusted base.
    Legacy,
    /// Nigeria Tax Act 2025 bands with the ₦800,000 exemption.
    #[default]
    Reform,
}

impl PitRegime {
    pub fn all() -> &'static [PitRegime] {
        &[Self::Legacy, Self::Reform]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Reform => "reform",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "legacy" => Some(Self::Legacy),
            "reform" => Some(Self::Reform),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Legacy => "Legacy PITA bands",
            Self::Reform => "2026 reform bands",
        }
    }

    /// The built-in band table for this regime.
    pub fn brackets(&self) -> &'static BracketTable {
        match self {
            Self::Legacy => BracketTable::legacy_pita(),
            Self::Reform => BracketTable::reform_2026(),
        }
    }
}

/// Whether the quoted amount already contains VAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VatMode {
    Inclusive,
    Exclusive,
}

impl VatMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inclusive => "inclusive",
            Self::Exclusive => "exclusive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "inclusive" => Some(Self::Inclusive),
            "exclusive" => Some(Self::Exclusive),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Inclusive => "Amount includes VAT",
            Self::Exclusive => "Amount excludes VAT",
        }
    }
}

/// How the profits of a non-resident digital service provider are assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LevyRegime {
    Determinable,
    Indeterminate,
}

impl LevyRegime {
    pub fn all() -> &'static [LevyRegime] {
        &[Self::Determinable, Self::Indeterminate]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Determinable => "determinable",
            Self::Indeterminate => "indeterminate",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "determinable" => Some(Self::Determinable),
            "indeterminate" => Some(Self::Indeterminate),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Determinable => "Profits determinable",
            Self::Indeterminate => "Profits indeterminate",
        }
    }
}

/// Holding period captured alongside a disposal.
///
/// It is recorded and echoed in reports but does not change the capital gains
/// rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HoldingPeriod {
    #[default]
    ShortTerm,
    LongTerm,
}

impl HoldingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShortTerm => "short-term",
            Self::LongTerm => "long-term",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "short-term" => Some(Self::ShortTerm),
            "long-term" => Some(Self::LongTerm),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ShortTerm => "Held one year or less",
            Self::LongTerm => "Held more than one year",
        }
    }
}
