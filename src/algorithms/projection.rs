//! Camera ray projection onto the ground
//!
//! Image coordinates are normalized to [-1, 1] on both axes with (0, 0) at
//! the image center. A ray is built by rotating the body forward axis by the
//! pose attitude, widened by half the field of view per unit of image
//! coordinate, then scaled by the slant range and placed on the sphere.

use crate::algorithms::geodesic::local_offset;
use crate::algorithms::matrix::Matrix3;
use crate::algorithms::vector::Vector3;
use crate::core::{CameraPose, GeoPoint};
use crate::utils::config::CameraConfig;
use crate::validation::error::{FootprintError, FootprintResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// Body forward axis the view ray is rotated from
pub const FORWARD: Vector3 = Vector3::new(1.0, 0.0, 0.0);

/// Normalized image corners in footprint order:
/// bottom-left, bottom-right, top-right, top-left
pub const IMAGE_CORNERS: [(f64, f64); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

fn check_finite(name: &str, value: f64) -> FootprintResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FootprintError::degenerate_ray(format!("{} is {}", name, value)))
    }
}

/// Unit direction in the local level frame of the ray through image point (x, y)
pub fn view_vector(
    pose: &CameraPose,
    x: f64,
    y: f64,
    fov_deg: f64,
    aspect_ratio: f64,
) -> FootprintResult<Vector3> {
    check_finite("roll", pose.roll)?;
    check_finite("pitch", pose.pitch)?;
    check_finite("yaw", pose.yaw)?;
    check_finite("yaw offset", pose.yaw_offset)?;
    check_finite("image x", x)?;
    check_finite("image y", y)?;
    check_finite("field of view", fov_deg)?;
    if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
        return Err(FootprintError::degenerate_ray(format!(
            "aspect ratio must be positive, got {}",
            aspect_ratio
        )));
    }

    let fov_half = (0.5 * fov_deg).to_radians();
    let roll = pose.roll.to_radians();
    let pitch = pose.pitch.to_radians() - y * fov_half / aspect_ratio;
    let yaw = pose.yaw.to_radians() + pose.yaw_offset.to_radians() + fov_half * x;

    let v = Matrix3::from_euler(roll, pitch, yaw).apply(FORWARD);
    if !(v.x.is_finite() && v.y.is_finite() && v.z.is_finite()) {
        return Err(FootprintError::degenerate_ray(format!("view vector {} is not finite", v)));
    }
    Ok(v)
}

/// Geographic point seen at image point (x, y).
///
/// The ray's X component is taken as north and its Y component as east.
pub fn ground_point(
    pose: &CameraPose,
    x: f64,
    y: f64,
    fov_deg: f64,
    aspect_ratio: f64,
) -> FootprintResult<GeoPoint> {
    let v = view_vector(pose, x, y, fov_deg, aspect_ratio)?;
    check_finite("slant range", pose.slant_range)?;
    check_finite("latitude", pose.lat)?;
    check_finite("longitude", pose.lon)?;

    let north = v.x * pose.slant_range;
    let east = v.y * pose.slant_range;
    Ok(local_offset(pose.origin(), east, north))
}

/// Ground points of the four image corners, in [`IMAGE_CORNERS`] order.
///
/// A corner whose ray cannot be resolved keeps its slot as an error.
pub fn viewport_corners(
    pose: &CameraPose,
    fov_deg: f64,
    aspect_ratio: f64,
) -> [FootprintResult<GeoPoint>; 4] {
    IMAGE_CORNERS.map(|(x, y)| {
        let point = ground_point(pose, x, y, fov_deg, aspect_ratio);
        if let Err(e) = &point {
            debug!("corner ({}, {}) unresolved: {}", x, y, e);
        }
        point
    })
}

/// Ground footprint of one camera pose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Sample time of the pose, if known
    pub timestamp: Option<f64>,
    /// Aircraft position the footprint was projected from
    pub origin: GeoPoint,
    /// Corner points in [`IMAGE_CORNERS`] order; `None` where the ray failed
    pub corners: [Option<GeoPoint>; 4],
}

impl Footprint {
    pub fn from_corners(pose: &CameraPose, corners: [FootprintResult<GeoPoint>; 4]) -> Self {
        Self {
            timestamp: pose.timestamp,
            origin: pose.origin(),
            corners: corners.map(|c| c.ok()),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.corners.iter().all(Option::is_some)
    }

    /// Indices of corners that could not be projected
    pub fn missing_corners(&self) -> Vec<usize> {
        self.corners
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Resolved corners, still in footprint order
    pub fn resolved(&self) -> Vec<GeoPoint> {
        self.corners.iter().flatten().copied().collect()
    }
}

/// Projects camera poses with a fixed, validated camera configuration
#[derive(Debug, Clone, Default)]
pub struct FootprintProjector {
    config: CameraConfig,
}

impl FootprintProjector {
    pub fn new(config: CameraConfig) -> FootprintResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn view_vector(&self, pose: &CameraPose, x: f64, y: f64) -> FootprintResult<Vector3> {
        view_vector(pose, x, y, self.config.fov_deg, self.config.aspect_ratio)
    }

    pub fn ground_point(&self, pose: &CameraPose, x: f64, y: f64) -> FootprintResult<GeoPoint> {
        ground_point(pose, x, y, self.config.fov_deg, self.config.aspect_ratio)
    }

    pub fn corners(&self, pose: &CameraPose) -> [FootprintResult<GeoPoint>; 4] {
        viewport_corners(pose, self.config.fov_deg, self.config.aspect_ratio)
    }

    pub fn project(&self, pose: &CameraPose) -> Footprint {
        Footprint::from_corners(pose, self.corners(pose))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::geodesic::distance_between;
    use nalgebra::Rotation3;

    fn oblique_pose() -> CameraPose {
        CameraPose::level(GeoPoint::new(-35.3632621, 149.1652374), 200.0)
            .with_attitude(0.0, -45.0, 0.0)
    }

    #[test]
    fn test_center_ray_follows_yaw() {
        let origin = GeoPoint::new(10.0, 20.0);
        let pose = CameraPose::level(origin, 100.0).with_attitude(0.0, 0.0, 90.0);

        let v = view_vector(&pose, 0.0, 0.0, 60.0, 1.0).unwrap();
        assert!(v.close(Vector3::new(0.0, 1.0, 0.0), 1e-12));

        let p = ground_point(&pose, 0.0, 0.0, 60.0, 1.0).unwrap();
        assert!((distance_between(origin, p) - 100.0).abs() < 0.01);
        assert!((p.lat - origin.lat).abs() < 1e-9);
        assert!(p.lon > origin.lon);

        // the yaw offset adds to the body yaw
        let split = CameraPose::level(origin, 100.0)
            .with_attitude(0.0, 0.0, 30.0)
            .with_yaw_offset(60.0);
        let q = ground_point(&split, 0.0, 0.0, 60.0, 1.0).unwrap();
        assert!(q.close(p, 1e-9));
    }

    #[test]
    fn test_view_vector_is_unit_length() {
        let pose = CameraPose::level(GeoPoint::new(0.0, 0.0), 1.0).with_attitude(12.0, -33.0, 171.0);
        for &(x, y) in &[(0.0, 0.0), (-1.0, 1.0), (0.3, -0.7), (1.0, 1.0)] {
            let v = view_vector(&pose, x, y, 70.0, 4.0 / 3.0).unwrap();
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ground_point_uses_x_as_north_and_y_as_east() {
        let pose = CameraPose::level(GeoPoint::new(48.1, 11.5), 350.0)
            .with_attitude(5.0, -20.0, 33.0)
            .with_yaw_offset(-8.0);
        let (x, y, fov, aspect): (f64, f64, f64, f64) = (0.4, -0.6, 50.0, 1.25);

        let half = (0.5 * fov).to_radians();
        let rot = Rotation3::from_euler_angles(
            5.0_f64.to_radians(),
            (-20.0_f64).to_radians() - y * half / aspect,
            33.0_f64.to_radians() - 8.0_f64.to_radians() + half * x,
        );
        let v = rot * nalgebra::Vector3::new(1.0, 0.0, 0.0);
        let expected = local_offset(pose.origin(), v.y * 350.0, v.x * 350.0);

        let actual = ground_point(&pose, x, y, fov, aspect).unwrap();
        assert!(actual.close(expected, 1e-10));
    }

    #[test]
    fn test_zero_slant_range_collapses_to_origin() {
        let pose = CameraPose::level(GeoPoint::new(-35.3632621, 149.1652374), 0.0)
            .with_attitude(3.0, -60.0, 120.0);
        let corners = viewport_corners(&pose, 50.0, 1.25);
        assert_eq!(corners.len(), 4);
        for corner in corners {
            assert!(corner.unwrap().close(pose.origin(), 1e-9));
        }
    }

    #[test]
    fn test_corner_order() {
        let pose = oblique_pose();
        let origin = pose.origin();
        let [bl, br, tr, tl] = viewport_corners(&pose, 50.0, 1.25).map(Result::unwrap);

        assert!(bl.lon < origin.lon && tl.lon < origin.lon);
        assert!(br.lon > origin.lon && tr.lon > origin.lon);

        // y = -1 raises the ray, reaching further ahead than y = +1
        assert!(bl.lat > tl.lat);
        assert!(br.lat > tr.lat);

        // left and right corners mirror each other
        assert!((bl.lat - br.lat).abs() < 1e-12);
        assert!(((bl.lon - origin.lon) + (br.lon - origin.lon)).abs() < 1e-12);
    }

    #[test]
    fn test_wider_fov_separates_corner_rays() {
        let pose = CameraPose::level(GeoPoint::new(0.0, 0.0), 100.0).with_attitude(4.0, -30.0, 15.0);
        let mut last = 0.0;
        for fov in [5.0, 10.0, 20.0, 40.0, 80.0, 160.0] {
            let left = view_vector(&pose, -1.0, 0.0, fov, 1.25).unwrap();
            let right = view_vector(&pose, 1.0, 0.0, fov, 1.25).unwrap();
            let separation = left.angle(right);
            assert!(separation > last, "fov {} gave {} <= {}", fov, separation, last);
            last = separation;
        }

        // a level camera sees exactly the configured horizontal field of view
        let level = CameraPose::level(GeoPoint::new(0.0, 0.0), 100.0);
        let left = view_vector(&level, -1.0, 0.0, 60.0, 1.0).unwrap();
        let right = view_vector(&level, 1.0, 0.0, 60.0, 1.0).unwrap();
        assert!((left.angle(right) - 60.0_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs_yield_errors() {
        let pose = oblique_pose();
        assert!(matches!(
            view_vector(&pose, 0.0, 0.0, 50.0, 0.0),
            Err(FootprintError::DegenerateRay { .. })
        ));

        let corners = viewport_corners(&pose, 50.0, f64::NAN);
        assert!(corners.iter().all(|c| matches!(c, Err(FootprintError::DegenerateRay { .. }))));

        let mut broken = pose.clone();
        broken.roll = f64::NAN;
        assert!(ground_point(&broken, 0.0, 0.0, 50.0, 1.25).is_err());

        let mut no_range = pose;
        no_range.slant_range = f64::INFINITY;
        assert!(ground_point(&no_range, 0.0, 0.0, 50.0, 1.25).is_err());
    }

    #[test]
    fn test_non_finite_origin_is_unresolved() {
        let pose = CameraPose::level(GeoPoint::new(f64::NAN, 10.0), 100.0);
        assert!(matches!(
            ground_point(&pose, 0.0, 0.0, 50.0, 1.25),
            Err(FootprintError::DegenerateRay { .. })
        ));

        let pose = CameraPose::level(GeoPoint::new(10.0, f64::INFINITY), 100.0);
        let footprint = FootprintProjector::default().project(&pose);
        assert!(!footprint.is_complete());
        assert_eq!(footprint.missing_corners(), vec![0, 1, 2, 3]);
        assert!(footprint.resolved().is_empty());
    }

    #[test]
    fn test_footprint_tracks_missing_corners() {
        let pose = oblique_pose().with_timestamp(1700000000.0);
        let corners = [
            Ok(GeoPoint::new(1.0, 1.0)),
            Err(FootprintError::degenerate_ray("test")),
            Ok(GeoPoint::new(2.0, 2.0)),
            Ok(GeoPoint::new(3.0, 3.0)),
        ];
        let footprint = Footprint::from_corners(&pose, corners);
        assert!(!footprint.is_complete());
        assert_eq!(footprint.missing_corners(), vec![1]);
        assert_eq!(footprint.resolved().len(), 3);
        assert_eq!(footprint.timestamp, Some(1700000000.0));
    }

    #[test]
    fn test_projector_uses_config() {
        let config = CameraConfig::new(30.0, 2.0).unwrap();
        let projector = FootprintProjector::new(config).unwrap();
        let pose = oblique_pose();

        let footprint = projector.project(&pose);
        assert!(footprint.is_complete());
        let direct = viewport_corners(&pose, 30.0, 2.0);
        for (a, b) in footprint.corners.iter().zip(direct.iter()) {
            assert_eq!(a.as_ref(), b.as_ref().ok());
        }

        assert!(FootprintProjector::new(CameraConfig { fov_deg: 0.0, aspect_ratio: 1.0 }).is_err());
        assert_eq!(FootprintProjector::default().config(), &CameraConfig::default());
    }
}
