//! Retirement income tax calculations.
//!
//! The tax on a severance payment is computed by four pure stages, each
//! feeding the next:
//!
//! | Stage | Function | Output |
//! |-------|----------|--------|
//! | 1 | [`calc_retirement_income_deduction`] | Retirement income deduction |
//! | 2 | [`calc_taxable_retirement_income`] | Taxable retirement income (1,000 yen units) |
//! | 3 | [`calc_base_income_tax`] | Base income tax from the rate table |
//! | 4 | [`calc_withholding_tax`] | Withheld tax including the 2.1% surtax |
//!
//! # Example
//!
//! ```
//! use tax_core::{RawTaxInput, calculate};
//!
//! let raw = RawTaxInput {
//!     years_of_service: 6,
//!     is_disability: false,
//!     is_board_member: false,
//!     severance_pay: 3_000_000,
//! };
//!
//! let result = calculate(raw).unwrap();
//!
//! assert_eq!(result.deduction, 2_400_000);
//! assert_eq!(result.taxable_income, 300_000);
//! assert_eq!(result.base_tax, 15_000);
//! assert_eq!(result.withholding_tax, 15_315);
//! ```

pub mod common;
mod deduction;
mod tax_base;
mod taxable_income;
mod withholding;

pub use deduction::calc_retirement_income_deduction;
pub use tax_base::{bracket_for, calc_base_income_tax};
pub use taxable_income::calc_taxable_retirement_income;
pub use withholding::calc_withholding_tax;

use tracing::debug;

use crate::{RawTaxInput, RetirementTaxBreakdown, TaxError, TaxInput};

/// Runs the four pipeline stages on a validated input.
pub fn breakdown(input: &TaxInput) -> RetirementTaxBreakdown {
    let deduction =
        calc_retirement_income_deduction(input.years_of_service(), input.is_disability());

    let taxable_income = calc_taxable_retirement_income(
        input.years_of_service(),
        input.severance_pay(),
        input.is_board_member(),
        deduction,
    );

    let base_tax = calc_base_income_tax(taxable_income);
    let withholding_tax = calc_withholding_tax(base_tax);

    debug!(
        deduction,
        taxable_income, base_tax, withholding_tax, "retirement income tax calculated"
    );

    RetirementTaxBreakdown {
        deduction,
        taxable_income,
        base_tax,
        withholding_tax,
    }
}

/// Returns the withheld tax, in yen, for a validated input.
pub fn calc_tax(input: &TaxInput) -> u64 {
    breakdown(input).withholding_tax
}

/// Validates caller input and runs the full pipeline.
///
/// # Errors
///
/// Returns [`TaxError::InvalidArgument`] if any value is out of range; no
/// stage runs in that case.
pub fn calculate(raw: RawTaxInput) -> Result<RetirementTaxBreakdown, TaxError> {
    let input = TaxInput::try_from(raw)?;
    Ok(breakdown(&input))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn input(
        years: i64,
        is_disability: bool,
        is_board_member: bool,
        severance: i64,
    ) -> TaxInput {
        TaxInput::new(years, is_disability, is_board_member, severance).unwrap()
    }

    // =========================================================================
    // End-to-end cases
    // =========================================================================

    #[test]
    fn six_years_three_million() {
        assert_eq!(calc_tax(&input(6, false, false, 3_000_000)), 15_315);
    }

    #[test]
    fn one_year_hundred_million() {
        let result = breakdown(&input(1, false, false, 100_000_000));

        assert_eq!(
            result,
            RetirementTaxBreakdown {
                deduction: 800_000,
                taxable_income: 97_700_000,
                base_tax: 39_169_000,
                withholding_tax: 39_991_549,
            }
        );
    }

    #[test]
    fn hundred_years_hundred_million() {
        assert_eq!(calc_tax(&input(100, false, false, 100_000_000)), 4_496_484);
    }

    #[test]
    fn zero_severance_has_zero_tax() {
        assert_eq!(calc_tax(&input(100, false, false, 0)), 0);
    }

    #[test]
    fn maximum_severance() {
        assert_eq!(
            calc_tax(&input(100, false, false, 1_000_000_000_000)),
            229_705_400_884
        );
    }

    #[test]
    fn short_term_officer_is_taxed_without_halving() {
        // deduction 1,200,000; taxable 8,800,000 at 23%
        let result = breakdown(&input(3, false, true, 10_000_000));

        assert_eq!(result.taxable_income, 8_800_000);
        assert_eq!(result.base_tax, 1_388_000);
        assert_eq!(result.withholding_tax, 1_417_148);
    }

    #[test]
    fn disability_raises_deduction() {
        let result = breakdown(&input(10, true, false, 5_000_000));

        assert_eq!(result.deduction, 5_000_000);
        assert_eq!(result.withholding_tax, 0);
    }

    // =========================================================================
    // calculate (validating entry point)
    // =========================================================================

    #[test]
    fn calculate_rejects_invalid_years() {
        for years in [0, 101] {
            let raw = RawTaxInput {
                years_of_service: years,
                is_disability: false,
                is_board_member: false,
                severance_pay: 100_000_000,
            };

            assert_eq!(calculate(raw), Err(TaxError::InvalidArgument));
        }
    }

    #[test]
    fn calculate_rejects_negative_severance() {
        let raw = RawTaxInput {
            years_of_service: 5,
            is_disability: false,
            is_board_member: false,
            severance_pay: -1,
        };

        assert_eq!(calculate(raw), Err(TaxError::InvalidArgument));
    }

    #[test]
    fn calculate_matches_calc_tax() {
        let raw = RawTaxInput {
            years_of_service: 6,
            is_disability: false,
            is_board_member: false,
            severance_pay: 3_000_000,
        };

        assert_eq!(calculate(raw).unwrap().withholding_tax, 15_315);
    }

    // =========================================================================
    // Properties
    // =========================================================================

    prop_compose! {
        fn arb_tax_input()(
            years in 1i64..=100,
            is_disability in any::<bool>(),
            is_board_member in any::<bool>(),
            severance in 0i64..=1_000_000_000_000,
        ) -> TaxInput {
            TaxInput::new(years, is_disability, is_board_member, severance).unwrap()
        }
    }

    proptest! {
        #[test]
        fn pipeline_is_deterministic(input in arb_tax_input()) {
            prop_assert_eq!(breakdown(&input), breakdown(&input));
        }

        #[test]
        fn withheld_tax_never_exceeds_severance(input in arb_tax_input()) {
            prop_assert!(calc_tax(&input) <= input.severance_pay());
        }
    }
}
