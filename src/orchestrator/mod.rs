pub mod batch_calculator;

pub use batch_calculator::BatchCalculator;
