pub mod result_parser;
pub mod retry_caller;

pub use result_parser::ResultParser;
pub use retry_caller::RetryingCaller;
