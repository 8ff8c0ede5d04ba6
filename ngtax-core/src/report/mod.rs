//! Presentation of calculator results as titled, ordered text sections.
//!
//! [`ReportSections`] is the hand-off format for on-screen summaries and for
//! the external PDF renderer. Amounts are formatted here; calculators never
//! round.

mod currency;
mod formatters;

use serde::{Deserialize, Serialize};

pub use currency::{format_naira, format_percent};

/// One headed block of report lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            lines: Vec::new(),
        }
    }

    /// Appends a `label: value` line.
    pub fn entry(
        mut self,
        label: &str,
        value: impl AsRef<str>,
    ) -> Self {
        self.lines.push(format!("{label}: {}", value.as_ref()));
        self
    }

    /// Appends a free-form line.
    pub fn line(
        mut self,
        text: impl Into<String>,
    ) -> Self {
        self.lines.push(text.into());
        self
    }
}

/// A complete report ready for display or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSections {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub sections: Vec<Section>,
    /// Suggested export file name, always ending in `.pdf`.
    pub filename: String,
}

impl ReportSections {
    pub fn section(
        &self,
        heading: &str,
    ) -> Option<&Section> {
        self.sections.iter().find(|section| section.heading == heading)
    }
}

/// Turns a calculator result into [`ReportSections`].
pub trait ToReport {
    fn to_report(&self) -> ReportSections;
}
