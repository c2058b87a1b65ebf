use crate::validation::error::{FootprintError, FootprintResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Width of the default thermal sensor (pixels)
pub const DEFAULT_SENSOR_WIDTH: u32 = 640;
/// Height of the default thermal sensor (pixels)
pub const DEFAULT_SENSOR_HEIGHT: u32 = 512;
/// Fallback horizontal field of view (degrees); set the real lens value via config
pub const DEFAULT_FOV_DEG: f64 = 50.0;

/// Camera optics used when projecting image corners onto the ground
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Horizontal field of view (degrees)
    pub fov_deg: f64,
    /// Image width divided by height
    pub aspect_ratio: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::from_sensor(DEFAULT_FOV_DEG, DEFAULT_SENSOR_WIDTH, DEFAULT_SENSOR_HEIGHT)
    }
}

impl CameraConfig {
    /// Create and validate a configuration
    pub fn new(fov_deg: f64, aspect_ratio: f64) -> FootprintResult<Self> {
        let config = Self { fov_deg, aspect_ratio };
        config.validate()?;
        Ok(config)
    }

    /// Configuration for a sensor of `width` x `height` pixels
    pub fn from_sensor(fov_deg: f64, width: u32, height: u32) -> Self {
        Self {
            fov_deg,
            aspect_ratio: width as f64 / height as f64,
        }
    }

    /// Vertical field of view implied by the aspect ratio (degrees)
    pub fn vertical_fov_deg(&self) -> f64 {
        self.fov_deg / self.aspect_ratio
    }

    pub fn validate(&self) -> FootprintResult<()> {
        if !self.fov_deg.is_finite() || self.fov_deg <= 0.0 || self.fov_deg >= 180.0 {
            warn!("rejecting camera config with fov_deg = {}", self.fov_deg);
            return Err(FootprintError::invalid_config(
                "fov_deg",
                self.fov_deg,
                "field of view must be between 0 and 180 degrees",
            ));
        }

        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            warn!("rejecting camera config with aspect_ratio = {}", self.aspect_ratio);
            return Err(FootprintError::invalid_config(
                "aspect_ratio",
                self.aspect_ratio,
                "aspect ratio must be finite and positive",
            ));
        }

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> FootprintResult<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| FootprintError::Io {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: CameraConfig = serde_json::from_str(&content).map_err(|e| {
            FootprintError::Serialization {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            }
        })?;

        config.validate()?;
        debug!("loaded camera config from {}: {:?}", path_str, config);
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> FootprintResult<()> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content).map_err(|e| FootprintError::Io {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })?;

        Ok(())
    }
}
