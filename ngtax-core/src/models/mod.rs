mod company;
mod penalty_config;
mod regime;
mod tax_bracket;

pub use company::{CompanySize, Sector};
pub use penalty_config::{PenaltyConfig, TaxType};
pub use regime::{HoldingPeriod, LevyRegime, PitRegime, VatMode};
pub use tax_bracket::{BracketTable, BracketTableError, TaxBracket};
