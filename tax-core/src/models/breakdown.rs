/// Every intermediate amount of one retirement income tax calculation, in yen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetirementTaxBreakdown {
    /// Retirement income deduction (退職所得控除額).
    pub deduction: u64,

    /// Taxable retirement income (課税退職所得金額), a multiple of 1,000.
    pub taxable_income: u64,

    /// Base income tax (基準所得税額) from the rate table.
    pub base_tax: u64,

    /// Withheld tax including the reconstruction surtax (源泉徴収税額).
    pub withholding_tax: u64,
}
