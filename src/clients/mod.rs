pub mod calc_client;

pub use calc_client::{CalculationService, HttpCalcClient};
