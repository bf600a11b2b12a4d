//! Retirement income deduction (退職所得控除額).

/// Service length at which the per-year deduction rate changes.
const LONG_SERVICE_YEARS: u32 = 20;

/// Deduction per year for the first 20 years of service.
const SHORT_SERVICE_RATE: u64 = 400_000;

/// Deduction per year beyond 20 years of service.
const LONG_SERVICE_RATE: u64 = 700_000;

/// Deduction accumulated by 20 years of service.
const LONG_SERVICE_BASE: u64 = 8_000_000;

/// Floor applied to the computed deduction.
const MIN_DEDUCTION: u64 = 800_000;

/// Amount added when retirement was directly caused by becoming disabled.
const DISABILITY_ADDITION: u64 = 1_000_000;

/// Calculates the retirement income deduction.
///
/// * Under 20 years: 400,000 yen per year.
/// * 20 years or more: 8,000,000 yen plus 700,000 yen per year beyond 20.
/// * The result is never below 800,000 yen.
/// * Retirement caused by disability adds 1,000,000 yen after the floor.
///
/// # Examples
///
/// ```
/// use tax_core::calculations::calc_retirement_income_deduction;
///
/// assert_eq!(calc_retirement_income_deduction(1, false), 800_000);
/// assert_eq!(calc_retirement_income_deduction(20, true), 9_000_000);
/// ```
pub fn calc_retirement_income_deduction(
    years_of_service: u32,
    is_disability: bool,
) -> u64 {
    let years = u64::from(years_of_service);

    let base = if years_of_service < LONG_SERVICE_YEARS {
        SHORT_SERVICE_RATE * years
    } else {
        LONG_SERVICE_BASE + LONG_SERVICE_RATE * (years - u64::from(LONG_SERVICE_YEARS))
    };

    let floored = base.max(MIN_DEDUCTION);

    if is_disability {
        floored + DISABILITY_ADDITION
    } else {
        floored
    }
}
