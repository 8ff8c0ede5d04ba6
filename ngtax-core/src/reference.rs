//! Reference rate tables rendered from the calculators' own configuration.

use rust_decimal::Decimal;

use crate::calculations::capital_gains::CGT_RATE;
use crate::calculations::company_income::{RATE_RULES, STANDARD_RATE};
use crate::calculations::digital_levy::levy_rate;
use crate::calculations::progressive::range_label;
use crate::calculations::vat::{STANDARD_VAT_RATE, ZERO_RATE};
use crate::report::{ReportSections, Section, format_naira, format_percent};
use crate::{LevyRegime, PenaltyConfig, PitRegime, TaxType};

fn rate(fraction: Decimal) -> String {
    format_percent(fraction * Decimal::ONE_HUNDRED)
}

/// Every rate the calculators apply, grouped by tax.
pub fn rate_tables() -> ReportSections {
    let mut sections: Vec<Section> = PitRegime::all()
        .iter()
        .map(|regime| {
            regime.brackets().brackets().iter().fold(
                Section::new(format!("Personal Income Tax: {}", regime.label())),
                |section, bracket| section.entry(&range_label(bracket), rate(bracket.tax_rate)),
            )
        })
        .collect();

    let company = RATE_RULES
        .iter()
        .chain(std::iter::once(&STANDARD_RATE))
        .fold(Section::new("Company Income Tax"), |section, rule| {
            section.entry(rule.description, rate(rule.rate))
        });
    sections.push(company);

    sections.push(
        Section::new("Value Added Tax")
            .entry("Standard rate", format_percent(STANDARD_VAT_RATE))
            .entry("Zero-rated supplies", format_percent(ZERO_RATE)),
    );
    sections.push(Section::new("Capital Gains Tax").entry("Chargeable gains", rate(CGT_RATE)));

    sections.push(
        LevyRegime::all()
            .iter()
            .fold(Section::new("Digital Services Levy"), |section, regime| {
                section.entry(regime.label(), rate(levy_rate(*regime)))
            }),
    );

    sections.push(TaxType::all().iter().fold(
        Section::new("Penalties and Interest"),
        |section, tax_type| {
            let config = PenaltyConfig::for_tax_type(*tax_type);
            section.line(format!(
                "{}: {} first month, {} each further month, {} late payment, {} interest per month",
                tax_type.label(),
                format_naira(config.filing_penalty_base),
                format_naira(config.monthly_increment),
                rate(config.payment_penalty_rate),
                rate(config.monthly_interest_rate),
            ))
        },
    ));

    ReportSections {
        title: "Nigerian Tax Rates".to_string(),
        subtitle: Some("Rates applied by the calculators".to_string()),
        sections,
        filename: "tax-rate-reference.pdf".to_string(),
    }
}
