use thiserror::Error;

/// Errors raised by the retirement income tax pipeline.
///
/// Validation is the only recoverable failure. The variant deliberately
/// carries no field-level detail; the reason for a rejection is logged at
/// debug level where it is detected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TaxError {
    /// A caller-supplied value was missing, mistyped or out of range.
    #[error("invalid argument")]
    InvalidArgument,
}
