use super::{ReportSections, Section, ToReport, format_naira, format_percent};
use crate::calculations::agribusiness::EligibilityOutcome;
use crate::calculations::{
    CapitalGainsOutcome, CompanyIncomeResult, DigitalLevyResult, PenaltyResult,
    PersonalIncomeResult, ProgressiveTax, SavingsPlan, VatResult,
};

fn rate(fraction: rust_decimal::Decimal) -> String {
    format_percent(fraction * rust_decimal::Decimal::ONE_HUNDRED)
}

fn breakdown_section(tax: &ProgressiveTax) -> Section {
    let mut section = Section::new("Tax Breakdown");
    if tax.breakdown.is_empty() {
        return section.line("No income falls in a taxable band.");
    }
    for share in &tax.breakdown {
        section = section.line(format!(
            "{} at {}: {} on {}",
            share.range_label,
            share.rate_percent_label,
            format_naira(share.tax),
            format_naira(share.taxable_amount)
        ));
    }
    section
}

impl ToReport for PersonalIncomeResult {
    fn to_report(&self) -> ReportSections {
        let relief_label = match self.regime {
            crate::PitRegime::Legacy => "Consolidated relief allowance",
            crate::PitRegime::Reform => "Rent relief",
        };

        ReportSections {
            title: "Personal Income Tax Calculation".to_string(),
            subtitle: Some(self.regime.label().to_string()),
            sections: vec![
                Section::new("Income Summary")
                    .entry("Gross income", format_naira(self.gross_income))
                    .entry(relief_label, format_naira(self.relief_applied))
                    .entry("Other deductions", format_naira(self.deductions))
                    .entry("Taxable income", format_naira(self.taxable_income)),
                breakdown_section(&self.tax),
                Section::new("Summary")
                    .entry("Total tax", format_naira(self.total_tax()))
                    .entry("Net income", format_naira(self.net_income))
                    .entry("Monthly tax", format_naira(self.monthly_tax))
                    .entry("Effective rate", format_percent(self.effective_rate_percent)),
            ],
            filename: "personal-income-tax.pdf".to_string(),
        }
    }
}

impl ToReport for CompanyIncomeResult {
    fn to_report(&self) -> ReportSections {
        ReportSections {
            title: "Company Income Tax Calculation".to_string(),
            subtitle: Some(format!("{}, {}", self.size.label(), self.sector.label())),
            sections: vec![
                Section::new("Company Details")
                    .entry("Annual turnover", format_naira(self.turnover))
                    .entry("Profit before tax", format_naira(self.profit_before_tax))
                    .entry("Rate basis", &self.rate_basis),
                Section::new("Tax Computation")
                    .entry("Tax rate", rate(self.tax_rate))
                    .entry("Company income tax", format_naira(self.tax_amount))
                    .entry("Profit after tax", format_naira(self.net_profit))
                    .entry("Effective rate", format_percent(self.effective_rate_percent)),
            ],
            filename: "company-income-tax.pdf".to_string(),
        }
    }
}

impl ToReport for VatResult {
    fn to_report(&self) -> ReportSections {
        ReportSections {
            title: "VAT Calculation".to_string(),
            subtitle: Some(self.mode.label().to_string()),
            sections: vec![
                Section::new("VAT Summary")
                    .entry("VAT rate", format_percent(self.rate_percent))
                    .entry("Net amount", format_naira(self.net_amount))
                    .entry("VAT amount", format_naira(self.vat_amount))
                    .entry("Gross amount", format_naira(self.gross_amount)),
            ],
            filename: "vat-calculation.pdf".to_string(),
        }
    }
}

impl ToReport for CapitalGainsOutcome {
    fn to_report(&self) -> ReportSections {
        let sections = match self {
            Self::Taxable(result) => vec![
                Section::new("Disposal")
                    .entry("Purchase price", format_naira(result.purchase_price))
                    .entry("Sale price", format_naira(result.sale_price))
                    .entry("Holding period", result.holding_period.label()),
                Section::new("Tax Computation")
                    .entry("Capital gain", format_naira(result.capital_gain))
                    .entry("Gain on cost", format_percent(result.gain_percent))
                    .entry("Capital gains tax", format_naira(result.tax_amount))
                    .entry("Net proceeds", format_naira(result.net_proceeds)),
            ],
            Self::NoGain {
                purchase_price,
                sale_price,
                difference,
            } => vec![
                Section::new("Disposal")
                    .entry("Purchase price", format_naira(*purchase_price))
                    .entry("Sale price", format_naira(*sale_price))
                    .entry("Difference", format_naira(*difference)),
                Section::new("Outcome").line("No gain on disposal, so no capital gains tax is due."),
            ],
        };

        ReportSections {
            title: "Capital Gains Tax Calculation".to_string(),
            subtitle: Some("Flat 10% on chargeable gains".to_string()),
            sections,
            filename: "capital-gains-tax.pdf".to_string(),
        }
    }
}

impl ToReport for DigitalLevyResult {
    fn to_report(&self) -> ReportSections {
        ReportSections {
            title: "Digital Services Levy".to_string(),
            subtitle: Some(self.regime.label().to_string()),
            sections: vec![
                Section::new("Levy Computation")
                    .entry("Gross receipts", format_naira(self.gross_receipts))
                    .entry("Levy rate", rate(self.levy_rate))
                    .entry("Levy due", format_naira(self.levy_amount)),
                Section::new("Payment Schedule")
                    .entry("Reporting months", self.reporting_months.to_string())
                    .entry("Monthly payment", format_naira(self.monthly_payment)),
            ],
            filename: "digital-services-levy.pdf".to_string(),
        }
    }
}

impl ToReport for PenaltyResult {
    fn to_report(&self) -> ReportSections {
        ReportSections {
            title: "Tax Penalty Estimate".to_string(),
            subtitle: Some(self.tax_type.label().to_string()),
            sections: vec![
                Section::new("Lateness")
                    .entry("Outstanding principal", format_naira(self.principal))
                    .entry("Days late", self.days_late.to_string())
                    .entry("Months charged", self.months_late.to_string()),
                Section::new("Charges")
                    .entry("Late filing penalty", format_naira(self.filing_penalty))
                    .entry("Late payment penalty", format_naira(self.payment_penalty))
                    .entry("Interest", format_naira(self.interest))
                    .entry("Total charges", format_naira(self.total_charges())),
                Section::new("Summary").entry("Total amount due", format_naira(self.total_due)),
            ],
            filename: "tax-penalty-estimate.pdf".to_string(),
        }
    }
}

impl ToReport for EligibilityOutcome {
    fn to_report(&self) -> ReportSections {
        let verdict = if self.qualifies {
            "Eligible for the agribusiness tax holiday"
        } else {
            "Not yet eligible for the agribusiness tax holiday"
        };

        let mut sections = Vec::with_capacity(2);
        if !self.reasons.is_empty() {
            sections.push(Section {
                heading: "Unmet Criteria".to_string(),
                lines: self.reasons.clone(),
            });
        }
        sections.push(Section {
            heading: "Recommended Actions".to_string(),
            lines: self.actions.clone(),
        });

        ReportSections {
            title: "Agribusiness Tax Holiday Eligibility".to_string(),
            subtitle: Some(verdict.to_string()),
            sections,
            filename: "agribusiness-eligibility.pdf".to_string(),
        }
    }
}

impl ToReport for SavingsPlan {
    fn to_report(&self) -> ReportSections {
        let mut sections: Vec<Section> = self
            .scenarios()
            .into_iter()
            .map(|scenario| {
                Section::new(scenario.label.as_str())
                    .entry("Deductions", format_naira(scenario.deductions))
                    .entry("Taxable income", format_naira(scenario.taxable_income))
                    .entry("Tax", format_naira(scenario.tax))
            })
            .collect();

        sections.push(
            Section::new("Savings")
                .entry("Saved by current deductions", format_naira(self.current_savings))
                .entry("Further saving available", format_naira(self.additional_savings)),
        );
        if !self.suggestions.is_empty() {
            sections.push(Section {
                heading: "Suggestions".to_string(),
                lines: self.suggestions.clone(),
            });
        }

        ReportSections {
            title: "Tax Savings Plan".to_string(),
            subtitle: Some(format!("Gross income {}", format_naira(self.gross_income))),
            sections,
            filename: "tax-savings-plan.pdf".to_string(),
        }
    }
}
