//! Camera controller system
//!
//! Provides the [`CameraController`] trait and the landscape
//! [`OrbitController`]:
//! - Rotate: drag changes azimuth/altitude around the target
//! - Pan: drag moves the target in the camera plane
//! - Zoom: drag scales the distance to the target
//! - Momentum: released rotations keep drifting and slow down

use glam::{Vec2, Vec3};
use log::{debug, trace};

use super::interaction::{DragOperation, InteractionState, Momentum};
use super::pose::{CameraPose, WORLD_UP};
use super::Camera;
use crate::config::ControlsConfig;
use crate::error::ConfigError;
use crate::events::{ControlEvent, EventDispatcher, EventKind, SubscriberId};

/// Abstract camera controller trait
pub trait CameraController {
    /// Advance one frame and place the camera
    fn update(&mut self, camera: &mut Camera);

    /// Get the controller name for debugging
    fn name(&self) -> &'static str;

    /// Reset the controller to default state
    fn reset(&mut self);
}

/// Orbit camera controller for landscape views
///
/// Holds the camera pose, the drag state machine and the momentum left
/// over from the last rotation. Call [`CameraController::update`] once per
/// rendered frame.
#[derive(Debug)]
pub struct OrbitController {
    pose: CameraPose,
    /// Pose restored by `reset`
    initial_pose: CameraPose,
    /// Degrees per pixel of drag
    pub rotate_speed: f32,
    /// World units per pixel of drag
    pub pan_speed: f32,
    /// Relative radius change per pixel of drag
    pub zoom_speed: f32,
    /// Momentum retained per tick, in `[0, 1)`
    friction: f32,
    /// Momentum magnitude at or below which drifting stops
    momentum_threshold: f32,
    state: InteractionState,
    start: Vec2,
    end: Vec2,
    momentum: Momentum,
    change_pending: bool,
    events: EventDispatcher,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::from_checked(&ControlsConfig::default())
    }
}

impl OrbitController {
    /// Controller with default tuning around `target`.
    ///
    /// The radius is clamped to the default limits and a non-finite target
    /// falls back to the origin.
    pub fn new(target: Vec3, radius: f32) -> Self {
        Self::from_checked(&ControlsConfig::default().with_target(target).with_radius(radius))
    }

    /// Build a controller from `config` after validating it.
    pub fn with_config(config: &ControlsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_checked(config))
    }

    /// Callers guarantee the tuning values in `config` are valid.
    fn from_checked(config: &ControlsConfig) -> Self {
        let pose = config.initial_pose();
        Self {
            initial_pose: pose.clone(),
            pose,
            rotate_speed: config.rotate_speed,
            pan_speed: config.pan_speed,
            zoom_speed: config.zoom_speed,
            friction: config.friction,
            momentum_threshold: config.momentum_threshold,
            state: InteractionState::Idle,
            start: Vec2::ZERO,
            end: Vec2::ZERO,
            momentum: Momentum::default(),
            change_pending: false,
            events: EventDispatcher::new(),
        }
    }

    /// Create with specific angles (degrees)
    pub fn with_angles(mut self, azimuth: f32, altitude: f32) -> Self {
        self.pose.set_azimuth(azimuth);
        self.pose.set_altitude(altitude);
        self.initial_pose = self.pose.clone();
        self
    }

    /// Initialize the pose from the camera's current position and target
    pub fn sync_with_camera(&mut self, camera: &Camera) {
        self.pose.set_target(camera.target);
        self.pose.look_from_offset(camera.position - camera.target);
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn momentum(&self) -> &Momentum {
        &self.momentum
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Set the momentum retained per tick. Must be in `[0, 1)`.
    pub fn set_friction(&mut self, friction: f32) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&friction) {
            return Err(ConfigError::invalid("friction", "must be in [0, 1)"));
        }
        self.friction = friction;
        Ok(())
    }

    pub fn momentum_threshold(&self) -> f32 {
        self.momentum_threshold
    }

    /// Set the magnitude at which drifting stops. Must be positive and finite.
    pub fn set_momentum_threshold(&mut self, threshold: f32) -> Result<(), ConfigError> {
        if !(threshold > 0.0 && threshold.is_finite()) {
            return Err(ConfigError::invalid("momentum_threshold", "must be positive"));
        }
        self.momentum_threshold = threshold;
        Ok(())
    }

    /// Whether momentum will still move the camera on the next tick
    pub fn is_animating(&self) -> bool {
        self.momentum.is_moving(self.momentum_threshold)
    }

    // Pose accessors

    pub fn target(&self) -> Vec3 {
        self.pose.target()
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.pose.set_target(target);
    }

    pub fn azimuth(&self) -> f32 {
        self.pose.azimuth()
    }

    pub fn set_azimuth(&mut self, degrees: f32) {
        self.pose.set_azimuth(degrees);
    }

    pub fn altitude(&self) -> f32 {
        self.pose.altitude()
    }

    pub fn set_altitude(&mut self, degrees: f32) {
        self.pose.set_altitude(degrees);
    }

    pub fn radius(&self) -> f32 {
        self.pose.radius()
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.pose.set_radius(radius);
    }

    pub fn mix(&self) -> f32 {
        self.pose.mix()
    }

    pub fn set_mix(&mut self, mix: f32) {
        self.pose.set_mix(mix);
        debug!(
            "Mix set to {:.3} (azimuth {:.2}, altitude {:.2})",
            self.pose.mix(),
            self.pose.azimuth(),
            self.pose.altitude()
        );
    }

    // Operations

    /// Orbit by a pointer delta in pixels.
    ///
    /// With a non-zero `mix` part of the motion becomes a pan, weighted by
    /// `mix²`. Records the delta as rotate momentum.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        let mix = self.pose.mix() * self.pose.mix();
        self.pan(dx * mix, dy * mix);

        let rx = dx * (1.0 - mix);
        let ry = dy * (1.0 - mix);
        self.pose
            .set_azimuth(self.pose.azimuth() - self.rotate_speed * rx);
        self.pose
            .set_altitude(self.pose.altitude() - self.rotate_speed * ry);

        self.momentum = Momentum::new(DragOperation::Rotate, Vec2::new(dx, dy));
    }

    /// Move the target in the camera's right/up plane.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let eye = self.pose.eye_offset();
        let right = eye.cross(WORLD_UP);
        let up = right.cross(eye);

        let offset = right.normalize_or_zero() * (self.pan_speed * dx)
            + up.normalize_or_zero() * (self.pan_speed * dy);
        self.pose.set_target(self.pose.target() + offset);
    }

    /// Scale the radius by `1 + zoom_speed * dy`.
    pub fn zoom(&mut self, _dx: f32, dy: f32) {
        self.pose
            .set_radius(self.pose.radius() * (1.0 + self.zoom_speed * dy));
    }

    fn apply(&mut self, operation: DragOperation, delta: Vec2) {
        match operation {
            DragOperation::Rotate => self.rotate(delta.x, delta.y),
            DragOperation::Pan => self.pan(delta.x, delta.y),
            DragOperation::Zoom => self.zoom(delta.x, delta.y),
        }
    }

    // Drag lifecycle

    /// Start a drag at `position`. Ignored (returns `false`) while another
    /// drag is active.
    pub fn begin_drag(&mut self, operation: DragOperation, position: Vec2) -> bool {
        if self.state.is_active() {
            return false;
        }

        self.state = InteractionState::from(operation);
        self.start = position;
        self.end = position;
        debug!("Drag started: {:?} at {:?}", self.state, position);
        true
    }

    /// Record the latest pointer position. Returns `false` when idle.
    pub fn drag_to(&mut self, position: Vec2) -> bool {
        if !self.state.is_active() {
            return false;
        }
        self.end = position;
        true
    }

    /// Return to idle. Returns `true` if a drag was active.
    pub fn end_drag(&mut self) -> bool {
        let was_active = self.state.is_active();
        if was_active {
            debug!(
                "Drag ended: {:?}, momentum {:?}",
                self.state,
                self.momentum.delta()
            );
        }
        self.state = InteractionState::Idle;
        was_active
    }

    // Events

    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriberId
    where
        F: FnMut(&ControlEvent) + 'static,
    {
        self.events.subscribe(kind, handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn emit(&mut self, event: ControlEvent) {
        self.events.emit(&event);
    }

    pub fn events_mut(&mut self) -> &mut EventDispatcher {
        &mut self.events
    }
}

impl CameraController for OrbitController {
    fn update(&mut self, camera: &mut Camera) {
        if let Some(operation) = self.state.operation() {
            let delta = self.end - self.start;
            self.apply(operation, delta);
        }

        // Runs during drags too: a held pointer overwrites momentum with a
        // zero delta, so only the latest motion keeps drifting.
        if self.momentum.is_moving(self.momentum_threshold) {
            let operation = self.momentum.operation();
            let delta = self.momentum.decay(self.friction);
            trace!("Momentum {:?}: {:?}", operation, delta);
            self.apply(operation, delta);
            self.change_pending = true;
        }

        camera.set_position(self.pose.eye());
        camera.look_at(self.pose.target());
        camera.up = WORLD_UP;
        self.start = self.end;

        if std::mem::take(&mut self.change_pending) {
            self.events.emit(&ControlEvent::Change);
        }
    }

    fn name(&self) -> &'static str {
        "Orbit"
    }

    fn reset(&mut self) {
        self.pose = self.initial_pose.clone();
        self.state = InteractionState::Idle;
        self.momentum.clear();
        self.start = self.end;
        self.change_pending = true;
        debug!("Orbit controller reset");
    }
}
