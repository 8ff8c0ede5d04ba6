//! Tax calculators.
//!
//! Each calculator validates its whole input before computing and returns a
//! plain result record. Calculators without configuration are free functions
//! (`vat::calculate`, `penalty::estimate`, ...); those that run over a band
//! table are small structs borrowing a [`BracketTable`](crate::BracketTable).

pub mod agribusiness;
pub mod capital_gains;
pub mod common;
pub mod company_income;
pub mod digital_levy;
pub mod penalty;
pub mod personal_income;
pub mod progressive;
pub mod savings;
pub mod vat;

pub use agribusiness::{AgribusinessChecklist, EligibilityOutcome};
pub use capital_gains::{CapitalGainsInput, CapitalGainsOutcome, CapitalGainsResult};
pub use company_income::{CompanyIncomeInput, CompanyIncomeResult, RateRule};
pub use digital_levy::{DigitalLevyInput, DigitalLevyResult};
pub use penalty::{PenaltyInput, PenaltyResult};
pub use personal_income::{PersonalIncomeCalculator, PersonalIncomeInput, PersonalIncomeResult};
pub use progressive::{BandShare, ProgressiveTax, compute_progressive_tax};
pub use savings::{SavingsPlan, SavingsPlanInput, SavingsPlanner, SavingsScenario};
pub use vat::{VatInput, VatResult};
