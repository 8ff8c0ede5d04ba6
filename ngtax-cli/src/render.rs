//! Plain-text and JSON output of report sections.

use ngtax_core::ReportSections;

/// Renders a report as indented text for the terminal.
pub fn render_text(report: &ReportSections) -> String {
    let underline = "=".repeat(report.title.chars().count());
    let mut out = format!("{}\n{underline}\n", report.title);
    if let Some(subtitle) = &report.subtitle {
        out.push_str(subtitle);
        out.push('\n');
    }

    for section in &report.sections {
        out.push_str(&format!("\n{}\n", section.heading));
        for line in &section.lines {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out
}

/// Renders a report as pretty-printed JSON for the external renderer.
pub fn render_json(report: &ReportSections) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use ngtax_core::Section;
    use pretty_assertions::assert_eq;

    use super::*;

    fn report() -> ReportSections {
        ReportSections {
            title: "VAT Calculation".to_string(),
            subtitle: Some("Amount excludes VAT".to_string()),
            sections: vec![
                Section::new("VAT Summary")
                    .entry("VAT amount", "₦7,500")
                    .entry("Gross amount", "₦107,500"),
            ],
            filename: "vat-calculation.pdf".to_string(),
        }
    }

    #[test]
    fn text_has_title_underline_and_indented_lines() {
        assert_eq!(
            render_text(&report()),
            "VAT Calculation\n===============\nAmount excludes VAT\n\nVAT Summary\n  VAT amount: ₦7,500\n  Gross amount: ₦107,500\n"
        );
    }

    #[test]
    fn text_without_subtitle_goes_straight_to_sections() {
        let report = ReportSections {
            subtitle: None,
            ..report()
        };

        assert!(render_text(&report).starts_with("VAT Calculation\n===============\n\nVAT Summary\n"));
    }

    #[test]
    fn json_round_trips() {
        let json = render_json(&report()).unwrap();

        let parsed: ReportSections = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, report());
    }
}
