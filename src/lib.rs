//! Camera Footprint Projection
//! 
//! Computes where a camera's field of view lands on the ground from the
//! aircraft position, slant range and gimbal attitude, using a small 3D
//! rotation algebra and spherical-Earth geodesic formulas.

pub mod core;
pub mod algorithms;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{GeoPoint, CameraPose, EARTH_RADIUS_M};
pub use algorithms::vector::Vector3;
pub use algorithms::matrix::Matrix3;
pub use algorithms::geodesic::{forward_position, local_offset, distance_between};
pub use algorithms::projection::{
    view_vector, ground_point, viewport_corners, Footprint, FootprintProjector, IMAGE_CORNERS,
};
pub use utils::config::CameraConfig;
pub use validation::error::{FootprintError, FootprintResult};
pub use api::formatting::{TextFormatter, JsonFormatter, CsvFormatter, CORNER_NAMES};
