//! Base income tax (基準所得税額) from the progressive rate table.

use crate::{INCOME_TAX_BRACKETS, TaxBracket};

/// Returns the rate table bracket that covers `taxable_income`.
///
/// # Panics
///
/// Panics if no bracket covers the income, which can only happen if
/// [`INCOME_TAX_BRACKETS`] lost its unbounded top bracket.
pub fn bracket_for(taxable_income: u64) -> &'static TaxBracket {
    INCOME_TAX_BRACKETS
        .iter()
        .find(|bracket| bracket.covers(taxable_income))
        .unwrap_or_else(|| {
            unreachable!("no tax bracket covers taxable income {taxable_income}")
        })
}

/// Calculates the base income tax on taxable retirement income.
///
/// Income is multiplied by the bracket rate with integer division by 100,
/// then the bracket's fixed subtraction is applied. Zero income yields zero
/// tax. The product is taken in `u128`, so every `u64` income is accepted.
///
/// # Examples
///
/// ```
/// use tax_core::calculations::calc_base_income_tax;
///
/// assert_eq!(calc_base_income_tax(1_949_000), 97_450);
/// assert_eq!(calc_base_income_tax(1_950_000), 97_500);
/// ```
pub fn calc_base_income_tax(taxable_income: u64) -> u64 {
    if taxable_income == 0 {
        return 0;
    }

    let bracket = bracket_for(taxable_income);
    let rated = u128::from(taxable_income) * u128::from(bracket.rate_percent) / 100;

    // At most 45% of a u64, and never below the bracket's subtraction.
    let rated = u64::try_from(rated).unwrap_or_else(|_| {
        unreachable!("rated income {rated} exceeds the taxable income {taxable_income}")
    });
    rated - bracket.subtraction
}
