//! Spherical camera pose
//!
//! Locates the camera relative to a target point with azimuth/altitude
//! angles (degrees) and a radius. The `mix` factor narrows the allowed
//! angular range toward a fixed view.

use glam::Vec3;

/// World up axis. Altitude is measured from it.
pub const WORLD_UP: Vec3 = Vec3::Z;

/// Lowest altitude in degrees when `mix` is zero
pub const MIN_ALTITUDE: f32 = 0.0001;
/// Highest altitude in degrees when `mix` is zero
pub const MAX_ALTITUDE: f32 = 179.9999;

/// Default radius limits
pub const MIN_RADIUS: f32 = 85.0;
pub const MAX_RADIUS: f32 = 600.0;

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Camera placement around a target point.
///
/// All setters clamp or wrap instead of rejecting values. Non-finite
/// inputs are ignored and keep the previous value.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPose {
    target: Vec3,
    azimuth: f32,
    altitude: f32,
    radius: f32,
    mix: f32,
    min_radius: f32,
    max_radius: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            azimuth: 45.0,
            altitude: 75.0,
            radius: 250.0,
            mix: 0.0,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
        }
    }
}

impl CameraPose {
    pub fn new(target: Vec3, azimuth: f32, altitude: f32, radius: f32) -> Self {
        let mut pose = Self {
            target,
            ..Default::default()
        };
        pose.set_azimuth(azimuth);
        pose.set_altitude(altitude);
        pose.set_radius(radius);
        pose
    }

    /// Replace the radius limits and re-clamp the current radius.
    pub fn with_radius_limits(mut self, min: f32, max: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_radius = min;
        self.max_radius = max;
        let radius = self.radius;
        self.set_radius(radius);
        self
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec3) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Azimuth in degrees, always in `[0, 360)`
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Set the azimuth in degrees.
    ///
    /// The value is wrapped into `[0, 360)`. With a non-zero `mix` it is
    /// then limited to `[mix * 180, 360 - mix * 180]`, snapping to the
    /// nearer end of that band.
    ///
    /// Wrapping comes first, so the band check sees the wrapped angle: with
    /// mix 0.5 an input of `-20` wraps to 340 and snaps to 270, not to 90.
    pub fn set_azimuth(&mut self, degrees: f32) {
        if !degrees.is_finite() {
            return;
        }

        let mut azimuth = wrap_degrees(degrees);
        if let Some((low, high)) = self.azimuth_band() {
            if azimuth < low || azimuth > high {
                let to_low = (low - azimuth).abs();
                let to_high = (high - azimuth).abs();
                azimuth = if to_low > to_high { high } else { low };
            }
        }
        self.azimuth = wrap_degrees(azimuth);
    }

    /// Altitude in degrees, measured from the world up axis
    pub fn altitude(&self) -> f32 {
        self.altitude
    }

    /// Set the altitude in degrees, clamped to [`Self::altitude_band`].
    pub fn set_altitude(&mut self, degrees: f32) {
        if !degrees.is_finite() {
            return;
        }
        let (low, high) = self.altitude_band();
        self.altitude = degrees.clamp(low, high);
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        if !radius.is_finite() {
            return;
        }
        self.radius = radius.clamp(self.min_radius, self.max_radius);
    }

    pub fn radius_limits(&self) -> (f32, f32) {
        (self.min_radius, self.max_radius)
    }

    /// Blend factor toward the fixed view, in `[0, 1]`
    pub fn mix(&self) -> f32 {
        self.mix
    }

    /// Set the blend factor and re-clamp the angles against the new limits.
    pub fn set_mix(&mut self, mix: f32) {
        if !mix.is_finite() {
            return;
        }
        self.mix = mix.clamp(0.0, 1.0);

        let azimuth = self.azimuth;
        let altitude = self.altitude;
        self.set_azimuth(azimuth);
        self.set_altitude(altitude);
    }

    /// Allowed azimuth band, or `None` when azimuth is unconstrained.
    pub fn azimuth_band(&self) -> Option<(f32, f32)> {
        if self.mix > 0.0 {
            let limit = self.mix * 180.0;
            Some((limit, 360.0 - limit))
        } else {
            None
        }
    }

    /// Allowed altitude band for the current `mix`.
    ///
    /// Once `mix` is close enough to 1 that the band would be empty it
    /// collapses to the horizon (90 degrees).
    pub fn altitude_band(&self) -> (f32, f32) {
        let limit = self.mix * 90.0;
        let low = MIN_ALTITUDE + limit;
        let high = MAX_ALTITUDE - limit;
        if low > high {
            (90.0, 90.0)
        } else {
            (low, high)
        }
    }

    /// Offset of the eye from the target (spherical to Cartesian, Z up).
    pub fn eye_offset(&self) -> Vec3 {
        let altitude = self.altitude.to_radians();
        let azimuth = (self.azimuth + 90.0).to_radians();

        Vec3::new(
            self.radius * altitude.sin() * azimuth.cos(),
            self.radius * altitude.sin() * azimuth.sin(),
            self.radius * altitude.cos(),
        )
    }

    /// World-space eye position
    pub fn eye(&self) -> Vec3 {
        self.target + self.eye_offset()
    }

    /// Derive angles and radius from an eye offset relative to the target.
    pub fn look_from_offset(&mut self, offset: Vec3) {
        let radius = offset.length();
        if !radius.is_finite() || radius <= f32::EPSILON {
            return;
        }

        let altitude = (offset.z / radius).clamp(-1.0, 1.0).acos().to_degrees();
        let azimuth = offset.y.atan2(offset.x).to_degrees() - 90.0;

        self.set_radius(radius);
        self.set_altitude(altitude);
        self.set_azimuth(azimuth);
    }
}
