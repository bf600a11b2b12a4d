//! Integration tests for the batch calculator using the bundled CSV files.

use pretty_assertions::assert_eq;
use tax_data::{BatchCalculator, BatchError};

const SAMPLE_INPUTS: &str = include_str!("../test-data/sample_inputs.csv");
const INVALID_ROW: &str = include_str!("../test-data/invalid_row.csv");

#[test]
fn test_sample_inputs_withholding_tax() {
    let inputs = BatchCalculator::parse(SAMPLE_INPUTS.as_bytes()).unwrap();
    let records = BatchCalculator::calculate(&inputs);

    let taxes: Vec<u64> = records.iter().map(|r| r.withholding_tax).collect();
    assert_eq!(
        taxes,
        vec![15_315, 39_991_549, 4_496_484, 1_417_148, 25_525, 1_276_250, 0]
    );
}

#[test]
fn test_sample_inputs_keep_file_order() {
    let inputs = BatchCalculator::parse(SAMPLE_INPUTS.as_bytes()).unwrap();

    let years: Vec<u32> = inputs.iter().map(|i| i.years_of_service()).collect();
    assert_eq!(years, vec![6, 1, 100, 3, 10, 1, 100]);
}

#[test]
fn test_sample_inputs_breakdown_columns() {
    let inputs = BatchCalculator::parse(SAMPLE_INPUTS.as_bytes()).unwrap();
    let records = BatchCalculator::calculate(&inputs);

    // officer with 3 years: 1,200,000 deduction, no halving
    let officer = &records[3];
    assert_eq!(officer.deduction, 1_200_000);
    assert_eq!(officer.taxable_income, 8_800_000);
    assert_eq!(officer.base_tax, 1_388_000);
    assert_eq!(officer.withholding_tax, 1_417_148);
}

#[test]
fn test_run_output_round_trips_through_csv() {
    let mut out = Vec::new();

    let count = BatchCalculator::run(SAMPLE_INPUTS.as_bytes(), &mut out).unwrap();
    assert_eq!(count, 7);

    let mut reader = csv::Reader::from_reader(out.as_slice());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec![
            "years_of_service",
            "is_disability",
            "is_board_member",
            "severance_pay",
            "deduction",
            "taxable_income",
            "base_tax",
            "withholding_tax",
        ]
    );
    assert_eq!(reader.records().count(), 7);
}

#[test]
fn test_invalid_row_aborts_with_row_number() {
    let mut out = Vec::new();

    let err = BatchCalculator::run(INVALID_ROW.as_bytes(), &mut out).unwrap_err();

    assert!(matches!(err, BatchError::InvalidRow { row: 3 }));
    assert_eq!(err.to_string(), "invalid input on row 3");
    assert!(out.is_empty());
}
