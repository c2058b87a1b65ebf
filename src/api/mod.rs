//! Output interfaces for downstream map and logging consumers

pub mod formatting;

pub use formatting::{TextFormatter, JsonFormatter, CsvFormatter};
