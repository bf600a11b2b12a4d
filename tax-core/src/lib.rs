pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{calc_tax, calculate};
pub use error::TaxError;
pub use models::*;
