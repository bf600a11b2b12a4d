//! Form model for the HTML front end.
//!
//! Browsers submit every field as a string: the years and severance text
//! boxes verbatim, the disability checkbox only when ticked, and the officer
//! radio group as `"0"` or `"1"`. [`CalcTaxForm::validate`] converts those
//! strings into a [`TaxInput`] or a list of field errors.

use serde::Deserialize;
use tax_core::{SeverancePay, TaxInput, YearsOfService};

use crate::utils::parse_integer_field;

pub const YEARS_OF_SERVICE_ERROR: &str = "有効な勤続年数を入力してください";
pub const SEVERANCE_PAY_ERROR: &str = "有効な退職金を入力してください";

/// Radio value that marks the employee as an officer.
const BOARD_MEMBER_VALUE: &str = "1";

/// Form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    YearsOfService,
    SeverancePay,
}

/// Raw values collected from the form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcTaxForm {
    #[serde(default)]
    pub years_of_service: String,
    #[serde(default)]
    pub is_disability: Option<String>,
    #[serde(default)]
    pub is_board_member: Option<String>,
    #[serde(default)]
    pub severance_pay: String,
}

impl Default for CalcTaxForm {
    fn default() -> Self {
        Self {
            years_of_service: "10".to_string(),
            is_disability: None,
            is_board_member: Some("0".to_string()),
            severance_pay: "5000000".to_string(),
        }
    }
}

impl CalcTaxForm {
    pub fn is_disability(&self) -> bool {
        self.is_disability.is_some()
    }

    pub fn is_board_member(&self) -> bool {
        self.is_board_member.as_deref() == Some(BOARD_MEMBER_VALUE)
    }

    /// Validates the form and converts it into a [`TaxInput`].
    ///
    /// Rules:
    /// - years of service must be a whole number from 1 to 100
    /// - severance pay must be a whole number from 0 to 1,000,000,000,000
    pub fn validate(&self) -> Result<TaxInput, Vec<(FormField, &'static str)>> {
        let mut errors = Vec::new();

        let years = parse_integer_field(&self.years_of_service)
            .ok()
            .and_then(|years| YearsOfService::try_from(years).ok());
        if years.is_none() {
            errors.push((FormField::YearsOfService, YEARS_OF_SERVICE_ERROR));
        }

        let severance = parse_integer_field(&self.severance_pay)
            .ok()
            .and_then(|pay| SeverancePay::try_from(pay).ok());
        if severance.is_none() {
            errors.push((FormField::SeverancePay, SEVERANCE_PAY_ERROR));
        }

        match (years, severance) {
            (Some(years), Some(severance)) => Ok(TaxInput::from_checked(
                years,
                self.is_disability(),
                self.is_board_member(),
                severance,
            )),
            _ => Err(errors),
        }
    }
}
