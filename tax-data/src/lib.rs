mod batch;

pub use batch::{BatchCalculator, BatchError, BatchInputRecord, BatchOutputRecord};
