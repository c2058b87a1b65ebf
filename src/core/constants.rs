//! Physical constants and numeric tolerances

/// Mean Earth radius used by the spherical model (m)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Margin kept between a clamped latitude and the poles (radians)
pub const LATITUDE_EPSILON: f64 = 1.0e-15;

/// Default tolerance for approximate vector comparison
pub const DEFAULT_TOLERANCE: f64 = 1.0e-7;
