//! Eligibility check for the agribusiness tax holiday.
//!
//! Six criteria are evaluated independently and always in the same order, so
//! the list of unmet criteria reads identically on screen and in exported
//! reports.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InvalidInput, require_non_negative};

pub const MIN_AGRIC_REVENUE_SHARE_PERCENT: Decimal = dec!(70);
pub const MAX_YEARS_OF_OPERATION: u32 = 5;

const REVENUE_SHARE_FIELD: &str = "agricultural revenue share";

pub const REASON_CAC: &str = "Business is not registered with the Corporate Affairs Commission (CAC).";
pub const REASON_TIN: &str = "Business does not have a Tax Identification Number (TIN).";
pub const REASON_REVENUE_SHARE: &str =
    "Agricultural production accounts for less than 70% of total revenue.";
pub const REASON_YEARS: &str =
    "Business has operated for more than 5 years; the holiday covers new agribusinesses only.";
pub const REASON_AUDIT: &str = "Audited financial records are not maintained.";
pub const REASON_EMPLOYMENT: &str = "Business does not employ Nigerian staff.";

pub const ACTION_REVENUE_SHARE: &str =
    "Restructure operations so primary agricultural production makes up at least 70% of revenue.";
pub const ACTION_AUDIT: &str =
    "Engage a chartered accountant to prepare audited financial statements.";
pub const ACTION_EMPLOYMENT: &str =
    "Recruit Nigerian employees and keep payroll records that show it.";
pub const ACTION_COMPILE_DOCUMENTS: &str =
    "Compile the CAC certificate, TIN, audited accounts and revenue analysis for the holiday application.";
pub const ACTION_ANNUAL_REPORTING: &str =
    "File annual returns and compliance reports for every year of the holiday period.";
pub const ACTION_ADDRESS_GAPS: &str =
    "Address the gaps listed above before applying for the agribusiness tax holiday.";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgribusinessChecklist {
    pub cac_registered: bool,
    pub has_tin: bool,
    /// Share of revenue from primary agricultural production, in percent.
    pub agric_revenue_share_percent: Decimal,
    pub years_of_operation: u32,
    pub audited_records: bool,
    pub employs_nigerians: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub qualifies: bool,
    /// Unmet criteria in checklist order.
    pub reasons: Vec<String>,
    /// Recommended next steps.
    pub actions: Vec<String>,
}

/// # Errors
///
/// [`InvalidInput`] when the revenue share is outside 0 to 100 percent.
pub fn evaluate(checklist: &AgribusinessChecklist) -> Result<EligibilityOutcome, InvalidInput> {
    let share = require_non_negative(REVENUE_SHARE_FIELD, checklist.agric_revenue_share_percent)?;
    if share > Decimal::ONE_HUNDRED {
        return Err(InvalidInput::TooLarge {
            field: REVENUE_SHARE_FIELD,
            value: share,
            limit: Decimal::ONE_HUNDRED,
        });
    }

    let mut reasons = Vec::new();
    let mut actions = Vec::new();

    if !checklist.cac_registered {
        reasons.push(REASON_CAC.to_string());
    }
    if !checklist.has_tin {
        reasons.push(REASON_TIN.to_string());
    }
    if share < MIN_AGRIC_REVENUE_SHARE_PERCENT {
        reasons.push(REASON_REVENUE_SHARE.to_string());
        actions.push(ACTION_REVENUE_SHARE.to_string());
    }
    if checklist.years_of_operation > MAX_YEARS_OF_OPERATION {
        reasons.push(REASON_YEARS.to_string());
    }
    if !checklist.audited_records {
        reasons.push(REASON_AUDIT.to_string());
        actions.push(ACTION_AUDIT.to_string());
    }
    if !checklist.employs_nigerians {
        reasons.push(REASON_EMPLOYMENT.to_string());
        actions.push(ACTION_EMPLOYMENT.to_string());
    }

    let qualifies = reasons.is_empty();
    if qualifies {
        actions.push(ACTION_COMPILE_DOCUMENTS.to_string());
        actions.push(ACTION_ANNUAL_REPORTING.to_string());
    } else if actions.is_empty() {
        actions.push(ACTION_ADDRESS_GAPS.to_string());
    }

    debug!(qualifies, unmet = reasons.len(), "agribusiness checklist evaluated");

    Ok(EligibilityOutcome {
        qualifies,
        reasons,
        actions,
    })
}
