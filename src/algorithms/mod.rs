//! Rotation algebra, geodesy and camera projection

pub mod vector;
pub mod matrix;
pub mod geodesic;
pub mod projection;

pub use vector::Vector3;
pub use matrix::Matrix3;
pub use projection::FootprintProjector;
