mod breakdown;
mod tax_bracket;
mod tax_input;

pub use breakdown::RetirementTaxBreakdown;
pub use tax_bracket::{INCOME_TAX_BRACKETS, TaxBracket};
pub use tax_input::{
    RawTaxInput, SEVERANCE_PAY_RANGE, SeverancePay, TaxInput, YEARS_OF_SERVICE_RANGE,
    YearsOfService,
};
