//! Withheld tax including the special reconstruction income tax (復興特別所得税).

/// Withholding multiplier of 102.1%, as a numerator over [`SURTAX_DENOMINATOR`].
const SURTAX_NUMERATOR: u64 = 1_021;
const SURTAX_DENOMINATOR: u64 = 1_000;

/// Applies the 2.1% reconstruction surtax to the base income tax.
///
/// The result is truncated to whole yen and saturates at `u64::MAX` for bases
/// above `u64::MAX / 1.021`.
///
/// # Examples
///
/// ```
/// use tax_core::calculations::calc_withholding_tax;
///
/// assert_eq!(calc_withholding_tax(50), 51);
/// assert_eq!(calc_withholding_tax(15_000), 15_315);
/// ```
pub fn calc_withholding_tax(base_tax: u64) -> u64 {
    let withheld =
        u128::from(base_tax) * u128::from(SURTAX_NUMERATOR) / u128::from(SURTAX_DENOMINATOR);
    u64::try_from(withheld).unwrap_or(u64::MAX)
}
