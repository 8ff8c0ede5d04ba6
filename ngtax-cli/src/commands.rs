//! Command line definition and dispatch to the calculators.

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use ngtax_core::calculations::{
    AgribusinessChecklist, CapitalGainsInput, CompanyIncomeInput, DigitalLevyInput, PenaltyInput,
    PersonalIncomeCalculator, PersonalIncomeInput, SavingsPlanInput, SavingsPlanner, VatInput,
    agribusiness, capital_gains, company_income, digital_levy, penalty, vat,
};
use ngtax_core::input::{parse_amount, parse_optional_amount};
use ngtax_core::session::{Identity, SessionError, require_session};
use ngtax_core::{
    BracketTable, CompanySize, HoldingPeriod, InvalidInput, LevyRegime, PitRegime, ReportSections,
    Sector, TaxType, ToReport, VatMode, reference,
};
use ngtax_data::{
    BracketTableLoader, BracketTableLoaderError, PayrollLoadError, PayrollLoader, run_batch,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::CliConfig;

/// Nigerian tax calculators.
///
/// Amounts accept thousands separators and a leading ₦, e.g. `--gross "₦5,000,000"`.
#[derive(Debug, Parser)]
#[command(name = "ngtax", version, about, long_about = None)]
pub struct Cli {
    /// Path to an ngtax.toml configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Display name of the signed-in user
    #[arg(long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Personal income tax under the legacy or 2026 reform bands
    Pit(PitArgs),
    /// Company income tax by size and sector
    Cit(CitArgs),
    /// Value added tax on an inclusive or exclusive amount
    Vat(VatArgs),
    /// Capital gains tax on a disposal
    Cgt(CgtArgs),
    /// Digital services levy on gross receipts
    Dsl(DslArgs),
    /// Late filing and payment penalties with interest
    Penalty(PenaltyArgs),
    /// Agribusiness tax holiday eligibility
    Agric(AgricArgs),
    /// Compare deduction scenarios for personal income tax
    Savings(SavingsArgs),
    /// Show every rate the calculators apply
    Rates,
    /// Personal income tax for every row of a payroll CSV file
    Batch(BatchArgs),
}

impl Command {
    /// Everything except the public rate tables needs a signed-in user.
    pub fn requires_session(&self) -> bool {
        !matches!(self, Self::Rates)
    }
}

#[derive(Debug, Args)]
pub struct BandsArgs {
    /// CSV file of band tables to use instead of the built-in bands
    #[arg(long)]
    pub bands: Option<PathBuf>,

    /// Table in the bands file; defaults to the regime name
    #[arg(long, requires = "bands")]
    pub table: Option<String>,
}

#[derive(Debug, Args)]
pub struct PitArgs {
    /// Annual gross income
    #[arg(long)]
    pub gross: String,

    /// legacy or reform (default from config)
    #[arg(long, value_parser = parse_pit_regime)]
    pub regime: Option<PitRegime>,

    /// Relief allowance for the legacy regime; computed when omitted
    #[arg(long)]
    pub relief: Option<String>,

    /// Pension, NHF, life assurance and other deductions
    #[arg(long, default_value = "0")]
    pub deductions: String,

    /// Annual rent paid, for reform rent relief
    #[arg(long, default_value = "0")]
    pub rent: String,

    #[command(flatten)]
    pub bands: BandsArgs,
}

#[derive(Debug, Args)]
pub struct CitArgs {
    #[arg(long)]
    pub turnover: String,

    #[arg(long)]
    pub profit: String,

    /// small, medium or large
    #[arg(long, value_parser = parse_company_size)]
    pub size: CompanySize,

    /// general, agricultural, manufacturing or solid-minerals
    #[arg(long, value_parser = parse_sector, default_value = "general")]
    pub sector: Sector,
}

#[derive(Debug, Args)]
pub struct VatArgs {
    #[arg(long)]
    pub amount: String,

    /// Rate in percent (default from config)
    #[arg(long)]
    pub rate: Option<String>,

    /// inclusive or exclusive
    #[arg(long, value_parser = parse_vat_mode, default_value = "exclusive")]
    pub mode: VatMode,
}

#[derive(Debug, Args)]
pub struct CgtArgs {
    #[arg(long)]
    pub purchase: String,

    #[arg(long)]
    pub sale: String,

    /// short-term or long-term
    #[arg(long, value_parser = parse_holding_period, default_value = "short-term")]
    pub holding: HoldingPeriod,
}

#[derive(Debug, Args)]
pub struct DslArgs {
    #[arg(long)]
    pub receipts: String,

    /// determinable or indeterminate
    #[arg(long, value_parser = parse_levy_regime)]
    pub regime: LevyRegime,

    /// Reporting months (default from config)
    #[arg(long)]
    pub months: Option<u32>,
}

#[derive(Debug, Args)]
pub struct PenaltyArgs {
    /// pit, cit, vat or wht
    #[arg(long = "tax", value_parser = parse_tax_type)]
    pub tax_type: TaxType,

    /// Outstanding principal
    #[arg(long)]
    pub principal: String,

    #[arg(long, allow_negative_numbers = true)]
    pub days_late: i64,
}

#[derive(Debug, Args)]
pub struct AgricArgs {
    /// Registered with the Corporate Affairs Commission
    #[arg(long)]
    pub cac: bool,

    /// Holds a Tax Identification Number
    #[arg(long)]
    pub tin: bool,

    /// Percent of revenue from primary agricultural production
    #[arg(long)]
    pub revenue_share: String,

    #[arg(long)]
    pub years: u32,

    /// Keeps audited financial records
    #[arg(long)]
    pub audited: bool,

    #[arg(long)]
    pub employs_nigerians: bool,
}

#[derive(Debug, Args)]
pub struct SavingsArgs {
    #[arg(long)]
    pub gross: String,

    #[arg(long, default_value = "0")]
    pub pension: String,

    #[arg(long, default_value = "0")]
    pub nhf: String,

    #[arg(long, default_value = "0")]
    pub life_insurance: String,

    #[arg(long, default_value = "0")]
    pub rent: String,

    /// Band table regime (default from config)
    #[arg(long, value_parser = parse_pit_regime)]
    pub regime: Option<PitRegime>,

    #[command(flatten)]
    pub bands: BandsArgs,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Payroll CSV: employee,gross_income,relief_allowance,deductions,annual_rent
    pub file: PathBuf,

    #[arg(long, value_parser = parse_pit_regime)]
    pub regime: Option<PitRegime>,

    #[command(flatten)]
    pub bands: BandsArgs,
}

fn one_of<T>(
    value: Option<T>,
    options: &str,
) -> Result<T, String> {
    value.ok_or_else(|| format!("expected one of: {options}"))
}

fn parse_pit_regime(s: &str) -> Result<PitRegime, String> {
    one_of(PitRegime::parse(s), "legacy, reform")
}

fn parse_company_size(s: &str) -> Result<CompanySize, String> {
    one_of(CompanySize::parse(s), "small, medium, large")
}

fn parse_sector(s: &str) -> Result<Sector, String> {
    one_of(Sector::parse(s), "general, agricultural, manufacturing, solid-minerals")
}

fn parse_vat_mode(s: &str) -> Result<VatMode, String> {
    one_of(VatMode::parse(s), "inclusive, exclusive")
}

fn parse_holding_period(s: &str) -> Result<HoldingPeriod, String> {
    one_of(HoldingPeriod::parse(s), "short-term, long-term")
}

fn parse_levy_regime(s: &str) -> Result<LevyRegime, String> {
    one_of(LevyRegime::parse(s), "determinable, indeterminate")
}

fn parse_tax_type(s: &str) -> Result<TaxType, String> {
    one_of(TaxType::parse(s), "pit, cit, vat, wht")
}

/// Errors that stop a command before it produces a report.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("please provide valid input: {0}")]
    InvalidInput(InvalidInput),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Bands(#[from] BracketTableLoaderError),

    #[error(transparent)]
    Payroll(#[from] PayrollLoadError),

    #[error("no band table named '{name}' in '{}'", path.display())]
    UnknownTable { name: String, path: PathBuf },

    #[error("cannot open '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<InvalidInput> for CommandError {
    fn from(err: InvalidInput) -> Self {
        CommandError::InvalidInput(err)
    }
}

fn open(path: &Path) -> Result<File, CommandError> {
    File::open(path).map_err(|source| CommandError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the table named by `--table` (or `default_name`) from `--bands`.
fn custom_table(
    args: &BandsArgs,
    default_name: &str,
) -> Result<Option<BracketTable>, CommandError> {
    let Some(path) = args.bands.as_deref() else {
        return Ok(None);
    };
    let name = args.table.as_deref().unwrap_or(default_name);

    let mut tables = BracketTableLoader::load(open(path)?)?;
    let table = tables.remove(name).ok_or_else(|| CommandError::UnknownTable {
        name: name.to_string(),
        path: path.to_path_buf(),
    })?;
    info!(path = %path.display(), table = name, "using custom band table");
    Ok(Some(table))
}

/// Runs `command` and returns its report.
///
/// # Errors
///
/// [`CommandError::Session`] when the command needs a signed-in user and
/// `identity` is anonymous; otherwise whatever the calculator or loader
/// reports.
pub fn execute(
    command: &Command,
    config: &CliConfig,
    identity: &dyn Identity,
) -> Result<ReportSections, CommandError> {
    if command.requires_session() {
        let user = require_session(identity)?;
        debug!(user = %user, "session accepted");
    }

    let report = match command {
        Command::Pit(args) => {
            let regime = args.regime.unwrap_or(config.default_regime);
            let input = PersonalIncomeInput {
                gross_income: parse_amount("gross income", &args.gross)?,
                regime,
                relief_allowance: args
                    .relief
                    .as_deref()
                    .map(|relief| parse_optional_amount("relief allowance", relief))
                    .transpose()?
                    .flatten(),
                deductions: parse_amount("deductions", &args.deductions)?,
                annual_rent: parse_amount("annual rent", &args.rent)?,
            };

            let custom = custom_table(&args.bands, regime.as_str())?;
            let calculator = match &custom {
                Some(table) => PersonalIncomeCalculator::new(table),
                None => PersonalIncomeCalculator::for_regime(regime),
            };
            calculator.calculate(&input)?.to_report()
        }
        Command::Cit(args) => company_income::calculate(&CompanyIncomeInput {
            turnover: parse_amount("turnover", &args.turnover)?,
            profit_before_tax: parse_amount("profit before tax", &args.profit)?,
            size: args.size,
            sector: args.sector,
        })?
        .to_report(),
        Command::Vat(args) => vat::calculate(&VatInput {
            amount: parse_amount("amount", &args.amount)?,
            rate_percent: match &args.rate {
                Some(rate) => parse_amount("VAT rate", rate)?,
                None => config.default_vat_rate,
            },
            mode: args.mode,
        })?
        .to_report(),
        Command::Cgt(args) => capital_gains::calculate(&CapitalGainsInput {
            purchase_price: parse_amount("purchase price", &args.purchase)?,
            sale_price: parse_amount("sale price", &args.sale)?,
            holding_period: args.holding,
        })?
        .to_report(),
        Command::Dsl(args) => digital_levy::calculate(&DigitalLevyInput {
            gross_receipts: parse_amount("gross receipts", &args.receipts)?,
            regime: args.regime,
            reporting_months: args.months.unwrap_or(config.reporting_months),
        })?
        .to_report(),
        Command::Penalty(args) => penalty::estimate(&PenaltyInput {
            tax_type: args.tax_type,
            principal: parse_amount("outstanding principal", &args.principal)?,
            days_late: args.days_late,
        })?
        .to_report(),
        Command::Agric(args) => {
            let share = parse_amount("agricultural revenue share", &args.revenue_share)?;
            agribusiness::evaluate(&AgribusinessChecklist {
                cac_registered: args.cac,
                has_tin: args.tin,
                agric_revenue_share_percent: share,
                years_of_operation: args.years,
                audited_records: args.audited,
                employs_nigerians: args.employs_nigerians,
            })?
            .to_report()
        }
        Command::Savings(args) => {
            let regime = args.regime.unwrap_or(config.default_regime);
            let input = SavingsPlanInput {
                gross_income: parse_amount("gross income", &args.gross)?,
                pension: parse_amount("pension contribution", &args.pension)?,
                nhf: parse_amount("NHF contribution", &args.nhf)?,
                life_insurance: parse_amount("life insurance premium", &args.life_insurance)?,
                annual_rent: parse_amount("annual rent", &args.rent)?,
            };

            let custom = custom_table(&args.bands, regime.as_str())?;
            let table = custom.as_ref().unwrap_or_else(|| regime.brackets());
            SavingsPlanner::new(table).plan(&input)?.to_report()
        }
        Command::Rates => reference::rate_tables(),
        Command::Batch(args) => {
            let regime = args.regime.unwrap_or(config.default_regime);
            let rows = PayrollLoader::parse(open(&args.file)?)?;

            let custom = custom_table(&args.bands, regime.as_str())?;
            let calculator = match &custom {
                Some(table) => PersonalIncomeCalculator::new(table),
                None => PersonalIncomeCalculator::for_regime(regime),
            };
            run_batch(&rows, &calculator, regime).to_report()
        }
    };

    info!(report = %report.title, "report ready");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use ngtax_core::session::StaticIdentity;
    use pretty_assertions::assert_eq;

    use super::*;

    fn signed_in() -> StaticIdentity {
        StaticIdentity::SignedIn("Tester".to_string())
    }

    fn run(args: &[&str]) -> Result<ReportSections, CommandError> {
        let cli = Cli::try_parse_from(std::iter::once("ngtax").chain(args.iter().copied()))
            .expect("arguments should parse");
        execute(&cli.command, &CliConfig::default(), &signed_in())
    }

    fn line<'a>(
        report: &'a ReportSections,
        heading: &str,
        index: usize,
    ) -> &'a str {
        &report.section(heading).expect("section present").lines[index]
    }

    #[test]
    fn pit_accepts_naira_formatted_amounts() {
        let report = run(&["pit", "--gross", "₦5,000,000", "--deductions", "400,000", "--rent", "1,200,000"])
            .unwrap();

        assert_eq!(line(&report, "Summary", 0), "Total tax: ₦574,800");
    }

    #[test]
    fn pit_legacy_regime_flag() {
        let report = run(&["pit", "--gross", "5000000", "--regime", "legacy"]).unwrap();

        assert_eq!(report.subtitle.as_deref(), Some("Legacy PITA bands"));
        assert_eq!(line(&report, "Summary", 0), "Total tax: ₦704,000");
    }

    #[test]
    fn cit_small_company_pays_nothing() {
        let report = run(&[
            "cit", "--turnover", "20000000", "--profit", "5000000", "--size", "small", "--sector",
            "manufacturing",
        ])
        .unwrap();

        assert_eq!(line(&report, "Tax Computation", 1), "Company income tax: ₦0");
    }

    #[test]
    fn vat_uses_configured_default_rate() {
        let report = run(&["vat", "--amount", "100000"]).unwrap();

        assert_eq!(line(&report, "VAT Summary", 2), "VAT amount: ₦7,500");
    }

    #[test]
    fn penalty_accepts_negative_days() {
        let report = run(&["penalty", "--tax", "vat", "--principal", "100000", "--days-late", "-3"])
            .unwrap();

        assert_eq!(line(&report, "Lateness", 2), "Months charged: 1");
    }

    #[test]
    fn agric_reports_unmet_criteria() {
        let report = run(&["agric", "--cac", "--tin", "--revenue-share", "50", "--years", "2"]).unwrap();

        assert_eq!(report.section("Unmet Criteria").unwrap().lines.len(), 3);
    }

    #[test]
    fn agric_rejects_negative_share() {
        let err = run(&["agric", "--revenue-share=-5", "--years", "1"]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "please provide valid input: agricultural revenue share must not be negative, got -5"
        );
    }

    #[test]
    fn invalid_amount_gives_neutral_message() {
        let err = run(&["cgt", "--purchase", "", "--sale", "100"]).unwrap_err();

        assert_eq!(err.to_string(), "please provide valid input: purchase price is required");
    }

    #[test]
    fn zero_amount_is_invalid_input() {
        let err = run(&["dsl", "--receipts", "0", "--regime", "determinable"]).unwrap_err();

        assert!(matches!(err, CommandError::InvalidInput(InvalidInput::NotPositive { .. })));
    }

    #[test]
    fn overflowing_amount_is_invalid_input() {
        let err = run(&["vat", "--amount", "79,228,162,514,264,337,593,543,950,335"]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "please provide valid input: amount is outside the range that can be calculated"
        );
    }

    #[test]
    fn revenue_share_over_one_hundred_is_invalid_input() {
        let err = run(&["agric", "--revenue-share", "120", "--years", "1"]).unwrap_err();

        assert!(matches!(err, CommandError::InvalidInput(InvalidInput::TooLarge { .. })));
    }

    #[test]
    fn anonymous_user_is_refused_calculators_but_not_rates() {
        let cli = Cli::try_parse_from(["ngtax", "vat", "--amount", "100"]).unwrap();
        let rates = Cli::try_parse_from(["ngtax", "rates"]).unwrap();
        let anonymous = StaticIdentity::Anonymous;

        let refused = execute(&cli.command, &CliConfig::default(), &anonymous);
        let allowed = execute(&rates.command, &CliConfig::default(), &anonymous);

        assert!(matches!(refused, Err(CommandError::Session(SessionError::Unauthenticated))));
        assert_eq!(allowed.unwrap().title, "Nigerian Tax Rates");
    }

    #[test]
    fn unknown_enum_value_is_a_usage_error() {
        let result = Cli::try_parse_from(["ngtax", "cit", "--turnover", "1", "--profit", "1", "--size", "huge"]);

        assert!(result.is_err());
    }

    #[test]
    fn missing_payroll_file_reports_path() {
        let err = run(&["batch", "/nonexistent/payroll.csv"]).unwrap_err();

        assert_eq!(err.to_string(), "cannot open '/nonexistent/payroll.csv'");
    }
}
