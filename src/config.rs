//! Controller configuration

use std::time::Duration;

use glam::Vec3;

use crate::error::ConfigError;
use crate::scene::{CameraPose, MAX_RADIUS, MIN_RADIUS};

/// Tuning and initial pose for [`OrbitController`](crate::scene::OrbitController)
/// and [`InputAdapter`](crate::input::InputAdapter).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize-ron", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize-ron", serde(default))]
pub struct ControlsConfig {
    /// Initial orbit target
    pub target: Vec3,
    /// Initial azimuth in degrees
    pub azimuth: f32,
    /// Initial altitude in degrees
    pub altitude: f32,
    /// Initial radius
    pub radius: f32,
    /// Initial blend factor toward the fixed view
    pub mix: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Degrees per pixel of drag
    pub rotate_speed: f32,
    /// World units per pixel of drag
    pub pan_speed: f32,
    /// Relative radius change per pixel of drag
    pub zoom_speed: f32,
    /// Momentum retained per tick
    pub friction: f32,
    /// Momentum magnitude at or below which drifting stops
    pub momentum_threshold: f32,
    /// Max press/release gap for a pick, in milliseconds
    pub click_timeout_ms: u64,
    /// Scale from wheel delta to zoom drag pixels
    pub wheel_scale: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            azimuth: 45.0,
            altitude: 75.0,
            radius: 250.0,
            mix: 0.0,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            rotate_speed: 0.4,
            pan_speed: 0.3,
            zoom_speed: 0.002,
            friction: 0.9,
            momentum_threshold: 0.05,
            click_timeout_ms: 200,
            wheel_scale: 0.1,
        }
    }
}

impl ControlsConfig {
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    /// Set the initial angles (degrees).
    pub fn with_angles(mut self, azimuth: f32, altitude: f32) -> Self {
        self.azimuth = azimuth;
        self.altitude = altitude;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_radius_range(mut self, min: f32, max: f32) -> Self {
        self.min_radius = min;
        self.max_radius = max;
        self
    }

    pub fn with_mix(mut self, mix: f32) -> Self {
        self.mix = mix;
        self
    }

    pub fn with_speeds(mut self, rotate: f32, pan: f32, zoom: f32) -> Self {
        self.rotate_speed = rotate;
        self.pan_speed = pan;
        self.zoom_speed = zoom;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_click_timeout(mut self, timeout: Duration) -> Self {
        self.click_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn click_timeout(&self) -> Duration {
        Duration::from_millis(self.click_timeout_ms)
    }

    /// Initial pose described by this config, clamped to its limits.
    pub fn initial_pose(&self) -> CameraPose {
        let mut pose = CameraPose::default().with_radius_limits(self.min_radius, self.max_radius);
        pose.set_target(self.target);
        pose.set_mix(self.mix);
        pose.set_azimuth(self.azimuth);
        pose.set_altitude(self.altitude);
        pose.set_radius(self.radius);
        pose
    }

    /// Check that every tuning value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("rotate_speed", self.rotate_speed),
            ("pan_speed", self.pan_speed),
            ("zoom_speed", self.zoom_speed),
            ("wheel_scale", self.wheel_scale),
            ("azimuth", self.azimuth),
            ("altitude", self.altitude),
            ("radius", self.radius),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be finite"));
            }
        }

        if !self.target.is_finite() {
            return Err(ConfigError::invalid("target", "must be finite"));
        }
        if !(0.0..1.0).contains(&self.friction) {
            return Err(ConfigError::invalid("friction", "must be in [0, 1)"));
        }
        if !(self.momentum_threshold > 0.0 && self.momentum_threshold.is_finite()) {
            return Err(ConfigError::invalid(
                "momentum_threshold",
                "must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.mix) {
            return Err(ConfigError::invalid("mix", "must be in [0, 1]"));
        }
        if !(self.min_radius > 0.0 && self.max_radius.is_finite()) {
            return Err(ConfigError::invalid(
                "radius",
                "limits must be positive and finite",
            ));
        }
        if self.min_radius > self.max_radius {
            return Err(ConfigError::InvalidRange {
                field: "radius",
                min: self.min_radius,
                max: self.max_radius,
            });
        }

        Ok(())
    }

    /// Parse a RON document and validate it. Missing fields keep their defaults.
    #[cfg(feature = "serialize-ron")]
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            ron::from_str(source).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        log::debug!("Loaded controls config: {:?}", config);
        Ok(config)
    }
}
