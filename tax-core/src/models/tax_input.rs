use std::ops::RangeInclusive;

use serde::Deserialize;
use tracing::debug;

use crate::TaxError;

/// Accepted range for the years of service, in whole years.
pub const YEARS_OF_SERVICE_RANGE: RangeInclusive<u32> = 1..=100;

/// Accepted range for the severance payment, in yen.
pub const SEVERANCE_PAY_RANGE: RangeInclusive<u64> = 0..=1_000_000_000_000;

/// Years of service within [`YEARS_OF_SERVICE_RANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearsOfService(u32);

impl YearsOfService {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for YearsOfService {
    type Error = TaxError;

    fn try_from(years_of_service: i64) -> Result<Self, Self::Error> {
        u32::try_from(years_of_service)
            .ok()
            .filter(|years| YEARS_OF_SERVICE_RANGE.contains(years))
            .map(Self)
            .ok_or_else(|| {
                debug!(years_of_service, "years of service out of range");
                TaxError::InvalidArgument
            })
    }
}

/// Severance payment within [`SEVERANCE_PAY_RANGE`], in yen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverancePay(u64);

impl SeverancePay {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for SeverancePay {
    type Error = TaxError;

    fn try_from(severance_pay: i64) -> Result<Self, Self::Error> {
        u64::try_from(severance_pay)
            .ok()
            .filter(|pay| SEVERANCE_PAY_RANGE.contains(pay))
            .map(Self)
            .ok_or_else(|| {
                debug!(severance_pay, "severance pay out of range");
                TaxError::InvalidArgument
            })
    }
}

/// Input to the retirement income tax pipeline as it arrives from a caller,
/// before any range checks.
///
/// Field names follow the JSON request shape (`yearsOfService`, ...). Unknown
/// fields are rejected, and every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawTaxInput {
    pub years_of_service: i64,
    pub is_disability: bool,
    pub is_board_member: bool,
    pub severance_pay: i64,
}

/// Validated input to the retirement income tax pipeline.
///
/// A `TaxInput` can only be obtained through [`TaxInput::new`],
/// [`TaxInput::from_checked`] or by deserializing a [`RawTaxInput`], so every
/// value in circulation is within range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTaxInput")]
pub struct TaxInput {
    years_of_service: u32,
    is_disability: bool,
    is_board_member: bool,
    severance_pay: u64,
}

impl TaxInput {
    /// Validates the four caller-supplied values.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::InvalidArgument`] when the years of service fall
    /// outside [`YEARS_OF_SERVICE_RANGE`] or the severance payment falls
    /// outside [`SEVERANCE_PAY_RANGE`].
    pub fn new(
        years_of_service: i64,
        is_disability: bool,
        is_board_member: bool,
        severance_pay: i64,
    ) -> Result<Self, TaxError> {
        Ok(Self::from_checked(
            YearsOfService::try_from(years_of_service)?,
            is_disability,
            is_board_member,
            SeverancePay::try_from(severance_pay)?,
        ))
    }

    /// Builds an input from values that already passed their range checks.
    pub fn from_checked(
        years_of_service: YearsOfService,
        is_disability: bool,
        is_board_member: bool,
        severance_pay: SeverancePay,
    ) -> Self {
        Self {
            years_of_service: years_of_service.0,
            is_disability,
            is_board_member,
            severance_pay: severance_pay.0,
        }
    }

    pub fn years_of_service(&self) -> u32 {
        self.years_of_service
    }

    /// Whether the retirement was directly caused by becoming disabled.
    pub fn is_disability(&self) -> bool {
        self.is_disability
    }

    /// Whether the employee was an officer (役員等).
    pub fn is_board_member(&self) -> bool {
        self.is_board_member
    }

    pub fn severance_pay(&self) -> u64 {
        self.severance_pay
    }
}

impl TryFrom<RawTaxInput> for TaxInput {
    type Error = TaxError;

    fn try_from(raw: RawTaxInput) -> Result<Self, Self::Error> {
        Self::new(
            raw.years_of_service,
            raw.is_disability,
            raw.is_board_member,
            raw.severance_pay,
        )
    }
}
