//! Error reporting

pub mod error;

pub use error::{FootprintError, FootprintResult};
