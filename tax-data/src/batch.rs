//! Batch calculation of retirement income tax over CSV files.
//!
//! ## Input format
//!
//! Headers are matched by name, so column order does not matter. Whitespace
//! around values is ignored.
//!
//! | Column | Type | Notes |
//! |--------------------|---------|---------------------------------|
//! | `years_of_service` | integer | 1 to 100 |
//! | `is_disability` | boolean | `true` / `false` |
//! | `is_board_member` | boolean | `true` / `false` |
//! | `severance_pay` | integer | 0 to 1,000,000,000,000 yen |
//!
//! ```csv
//! years_of_service,is_disability,is_board_member,severance_pay
//! 6,false,false,3000000
//! ```
//!
//! ## Output format
//!
//! The four input columns followed by `deduction`, `taxable_income`,
//! `base_tax` and `withholding_tax`.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tax_core::{RawTaxInput, TaxInput, calculations::breakdown};
use thiserror::Error;

/// Errors that can occur while running a batch calculation.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The CSV was structurally invalid or a cell had the wrong type.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row parsed but its values are out of range. `row` is 1-based, not
    /// counting the header.
    #[error("invalid input on row {row}")]
    InvalidRow { row: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One input row, mirroring the CSV layout exactly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BatchInputRecord {
    pub years_of_service: i64,
    pub is_disability: bool,
    pub is_board_member: bool,
    pub severance_pay: i64,
}

impl From<BatchInputRecord> for RawTaxInput {
    fn from(record: BatchInputRecord) -> Self {
        RawTaxInput {
            years_of_service: record.years_of_service,
            is_disability: record.is_disability,
            is_board_member: record.is_board_member,
            severance_pay: record.severance_pay,
        }
    }
}

/// One output row: the validated input plus every pipeline amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutputRecord {
    pub years_of_service: u32,
    pub is_disability: bool,
    pub is_board_member: bool,
    pub severance_pay: u64,
    pub deduction: u64,
    pub taxable_income: u64,
    pub base_tax: u64,
    pub withholding_tax: u64,
}

impl From<&TaxInput> for BatchOutputRecord {
    fn from(input: &TaxInput) -> Self {
        let result = breakdown(input);

        Self {
            years_of_service: input.years_of_service(),
            is_disability: input.is_disability(),
            is_board_member: input.is_board_member(),
            severance_pay: input.severance_pay(),
            deduction: result.deduction,
            taxable_income: result.taxable_income,
            base_tax: result.base_tax,
            withholding_tax: result.withholding_tax,
        }
    }
}

/// Runs the tax pipeline over CSV input.
pub struct BatchCalculator;

impl BatchCalculator {
    /// Parse and validate every row from a CSV reader.
    ///
    /// Rows are returned in file order. Parsing stops at the first bad row.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TaxInput>, BatchError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut inputs = Vec::new();
        for (index, result) in csv_reader.deserialize().enumerate() {
            let record: BatchInputRecord = result?;
            let input = TaxInput::try_from(RawTaxInput::from(record))
                .map_err(|_| BatchError::InvalidRow { row: index + 1 })?;
            inputs.push(input);
        }

        Ok(inputs)
    }

    /// Calculate every input and return the output rows.
    pub fn calculate(inputs: &[TaxInput]) -> Vec<BatchOutputRecord> {
        inputs.iter().map(BatchOutputRecord::from).collect()
    }

    /// Write output rows, with a header, to a CSV writer.
    pub fn write<W: Write>(
        writer: W,
        records: &[BatchOutputRecord],
    ) -> Result<(), BatchError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Parse, calculate and write in one pass. Returns the number of rows.
    pub fn run<R: Read, W: Write>(
        reader: R,
        writer: W,
    ) -> Result<usize, BatchError> {
        let inputs = Self::parse(reader)?;
        let records = Self::calculate(&inputs);
        Self::write(writer, &records)?;
        tracing::debug!(rows = records.len(), "batch complete");
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const HEADER: &str = "years_of_service,is_disability,is_board_member,severance_pay";

    // =========================================================================
    // parse tests
    // =========================================================================

    #[test]
    fn parse_single_row() {
        let csv = format!("{HEADER}\n6,false,false,3000000");

        let inputs = BatchCalculator::parse(csv.as_bytes()).unwrap();

        assert_eq!(inputs, vec![TaxInput::new(6, false, false, 3_000_000).unwrap()]);
    }

    #[test]
    fn parse_matches_headers_by_name_and_trims() {
        let csv = "severance_pay, is_board_member ,is_disability,years_of_service\n 3000000 ,true,false, 3 ";

        let inputs = BatchCalculator::parse(csv.as_bytes()).unwrap();

        assert_eq!(inputs, vec![TaxInput::new(3, false, true, 3_000_000).unwrap()]);
    }

    #[test]
    fn parse_reports_out_of_range_row_number() {
        let csv = format!("{HEADER}\n6,false,false,3000000\n0,false,false,3000000");

        let result = BatchCalculator::parse(csv.as_bytes());

        assert!(matches!(result, Err(BatchError::InvalidRow { row: 2 })));
    }

    #[test]
    fn parse_rejects_fractional_values() {
        let csv = format!("{HEADER}\n10.5,false,false,3000000");

        assert!(matches!(
            BatchCalculator::parse(csv.as_bytes()),
            Err(BatchError::Csv(_))
        ));
    }

    #[test]
    fn parse_rejects_missing_column() {
        let csv = "years_of_service,is_disability,severance_pay\n6,false,3000000";

        assert!(matches!(
            BatchCalculator::parse(csv.as_bytes()),
            Err(BatchError::Csv(_))
        ));
    }

    #[test]
    fn parse_empty_file_yields_no_rows() {
        let inputs = BatchCalculator::parse(HEADER.as_bytes()).unwrap();

        assert!(inputs.is_empty());
    }

    // =========================================================================
    // calculate / write tests
    // =========================================================================

    #[test]
    fn calculate_fills_breakdown() {
        let input = TaxInput::new(6, false, false, 3_000_000).unwrap();

        let records = BatchCalculator::calculate(&[input]);

        assert_eq!(
            records,
            vec![BatchOutputRecord {
                years_of_service: 6,
                is_disability: false,
                is_board_member: false,
                severance_pay: 3_000_000,
                deduction: 2_400_000,
                taxable_income: 300_000,
                base_tax: 15_000,
                withholding_tax: 15_315,
            }]
        );
    }

    #[test]
    fn run_writes_header_and_rows() {
        let csv = format!("{HEADER}\n6,false,false,3000000\n100,false,false,0");
        let mut out = Vec::new();

        let count = BatchCalculator::run(csv.as_bytes(), &mut out).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "years_of_service,is_disability,is_board_member,severance_pay,deduction,taxable_income,base_tax,withholding_tax\n\
             6,false,false,3000000,2400000,300000,15000,15315\n\
             100,false,false,0,64000000,0,0,0\n"
        );
    }
}
