/// One row of the progressive income tax rate table.
///
/// Brackets are upper-inclusive: income up to and including `upper_limit`
/// falls in the bracket. `None` marks the unbounded top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    pub upper_limit: Option<u64>,
    pub rate_percent: u64,
    pub subtraction: u64,
}

impl TaxBracket {
    const fn bounded(
        upper_limit: u64,
        rate_percent: u64,
        subtraction: u64,
    ) -> Self {
        Self {
            upper_limit: Some(upper_limit),
            rate_percent,
            subtraction,
        }
    }

    /// Returns `true` if `income` falls at or below this bracket's limit.
    pub fn covers(
        &self,
        income: u64,
    ) -> bool {
        self.upper_limit.is_none_or(|limit| income <= limit)
    }
}

/// Income tax rate table (所得税の速算表) applied to taxable retirement income.
///
/// Sorted by `upper_limit` ascending; the last entry is unbounded.
pub const INCOME_TAX_BRACKETS: [TaxBracket; 7] = [
    TaxBracket::bounded(1_949_000, 5, 0),
    TaxBracket::bounded(3_299_000, 10, 97_500),
    TaxBracket::bounded(6_949_000, 20, 427_500),
    TaxBracket::bounded(8_999_000, 23, 636_000),
    TaxBracket::bounded(17_999_000, 33, 1_536_000),
    TaxBracket::bounded(39_999_000, 40, 2_796_000),
    TaxBracket {
        upper_limit: None,
        rate_percent: 45,
        subtraction: 4_796_000,
    },
];
