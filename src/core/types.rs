//! Core data types for the footprint projection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic point on the spherical Earth, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Component-wise comparison within `tol` degrees
    pub fn close(self, other: GeoPoint, tol: f64) -> bool {
        (self.lat - other.lat).abs() < tol && (self.lon - other.lon).abs() < tol
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.9}, {:.9})", self.lat, self.lon)
    }
}

/// Camera pose taken from one flight-log sample.
///
/// Field names follow the flight log (`SR`, `GRoll`, `GPitch`, `GYaw`), so a
/// raw record deserializes directly. Other telemetry in the record is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Sample time, seconds since epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    /// Latitude of the aircraft (degrees)
    pub lat: f64,
    /// Longitude of the aircraft (degrees)
    pub lon: f64,
    /// Slant range to the imaged ground point (m)
    #[serde(rename = "SR")]
    pub slant_range: f64,
    /// Gimbal roll (degrees)
    #[serde(rename = "GRoll")]
    pub roll: f64,
    /// Gimbal pitch (degrees)
    #[serde(rename = "GPitch")]
    pub pitch: f64,
    /// Gimbal yaw (degrees)
    #[serde(rename = "GYaw")]
    pub yaw: f64,
    /// Additional yaw added to `yaw` (degrees)
    #[serde(rename = "yaw", default)]
    pub yaw_offset: f64,
}

impl CameraPose {
    /// Pose at `origin` looking along the level frame with no rotation
    pub fn level(origin: GeoPoint, slant_range: f64) -> Self {
        Self {
            timestamp: None,
            lat: origin.lat,
            lon: origin.lon,
            slant_range,
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            yaw_offset: 0.0,
        }
    }

    pub fn with_attitude(mut self, roll: f64, pitch: f64, yaw: f64) -> Self {
        self.roll = roll;
        self.pitch = pitch;
        self.yaw = yaw;
        self
    }

    pub fn with_yaw_offset(mut self, yaw_offset: f64) -> Self {
        self.yaw_offset = yaw_offset;
        self
    }

    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn origin(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}
