//! Core types and constants for camera footprint projection

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
