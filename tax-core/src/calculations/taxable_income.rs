//! Taxable retirement income (課税退職所得金額).

use super::common::truncate_to_thousand;

/// Longest service, in years, treated as short-term (短期退職手当等).
const SHORT_TERM_MAX_YEARS: u32 = 5;

/// Portion of a short-term, non-officer payment that still gets halved.
const SHORT_TERM_HALVING_CAP: u64 = 3_000_000;

/// Calculates taxable retirement income from the severance payment.
///
/// The amount exceeding the deduction is halved, except that:
///
/// * officers with 5 years of service or less get no halving;
/// * other employees with 5 years of service or less get halving only on the
///   first 3,000,000 yen, the excess is taxed in full.
///
/// The result is truncated down to a multiple of 1,000 yen. A payment that
/// does not exceed the deduction yields 0.
///
/// # Examples
///
/// ```
/// use tax_core::calculations::calc_taxable_retirement_income;
///
/// assert_eq!(calc_taxable_retirement_income(6, 3_002_000, false, 2_400_000), 301_000);
/// assert_eq!(calc_taxable_retirement_income(3, 1_000_000, false, 1_200_000), 0);
/// ```
pub fn calc_taxable_retirement_income(
    years_of_service: u32,
    severance_pay: u64,
    is_board_member: bool,
    deduction: u64,
) -> u64 {
    let target = severance_pay.saturating_sub(deduction);
    if target == 0 {
        return 0;
    }

    let amount = if years_of_service > SHORT_TERM_MAX_YEARS {
        target / 2
    } else if is_board_member {
        target
    } else if target > SHORT_TERM_HALVING_CAP {
        target - SHORT_TERM_HALVING_CAP / 2
    } else {
        target / 2
    };

    truncate_to_thousand(amount)
}
