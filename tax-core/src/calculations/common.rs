//! Common utility functions for the retirement income tax calculations.
//!
//! This module provides the truncation rule shared by the pipeline stages.

/// Granularity to which taxable retirement income is truncated, in yen.
pub const TRUNCATION_UNIT: u64 = 1_000;

/// Truncates a yen amount down to the nearest multiple of 1,000.
///
/// Amounts below 1,000 yen are discarded, never rounded up.
///
/// # Examples
///
/// ```
/// use tax_core::calculations::common::truncate_to_thousand;
///
/// assert_eq!(truncate_to_thousand(301_000), 301_000);
/// assert_eq!(truncate_to_thousand(301_999), 301_000);
/// assert_eq!(truncate_to_thousand(999), 0);
/// ```
pub fn truncate_to_thousand(value: u64) -> u64 {
    value / TRUNCATION_UNIT * TRUNCATION_UNIT
}
