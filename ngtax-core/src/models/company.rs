use serde::{Deserialize, Serialize};

/// Company size category under the 2025 reform, by annual turnover and
/// fixed assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanySize {
    Small,
    Medium,
    Large,
}

impl CompanySize {
    pub fn all() -> &'static [CompanySize] {
        &[Self::Small, Self::Medium, Self::Large]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small company (turnover up to ₦50m)",
            Self::Medium => "Medium company (turnover ₦50m to ₦100m)",
            Self::Large => "Large company (turnover above ₦100m)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sector {
    General,
    Agricultural,
    Manufacturing,
    SolidMinerals,
}

impl Sector {
    pub fn all() -> &'static [Sector] {
        &[
            Self::General,
            Self::Agricultural,
            Self::Manufacturing,
            Self::SolidMinerals,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Agricultural => "agricultural",
            Self::Manufacturing => "manufacturing",
            Self::SolidMinerals => "solid-minerals",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "general" => Some(Self::General),
            "agricultural" => Some(Self::Agricultural),
            "manufacturing" => Some(Self::Manufacturing),
            "solid-minerals" => Some(Self::SolidMinerals),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General business",
            Self::Agricultural => "Agricultural production",
            Self::Manufacturing => "Manufacturing",
            Self::SolidMinerals => "Solid minerals",
        }
    }
}
