//! Input adapter: raw events to controller drags and pick gestures

use std::time::{Duration, Instant};

use glam::Vec2;
use log::debug;

use super::{InputEvent, KeyCode, PointerButton, TouchEvent};
use crate::config::ControlsConfig;
use crate::events::{ControlEvent, PickEvent};
use crate::scene::{DragOperation, OrbitController};

/// Translates input into [`OrbitController`] calls.
///
/// - Plain drag rotates (primary), pans (middle) or zooms (secondary)
/// - Shift + drag pans, Control + drag zooms
/// - A primary press and release within the click timeout is a pick
/// - A primary press within the click timeout of the last release is a
///   double pick
/// - The wheel zooms
///
/// Timestamps are supplied by the caller so gesture timing does not
/// depend on a clock inside the adapter.
#[derive(Debug, Clone)]
pub struct InputAdapter {
    /// Max gap for pick and double-pick detection
    pub click_timeout: Duration,
    /// Scale from wheel delta to zoom drag pixels
    pub wheel_scale: f32,
    modifier: Option<DragOperation>,
    last_press: Option<Instant>,
    last_release: Option<Instant>,
    in_double_pick: bool,
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new(&ControlsConfig::default())
    }
}

impl InputAdapter {
    pub fn new(config: &ControlsConfig) -> Self {
        Self {
            click_timeout: config.click_timeout(),
            wheel_scale: config.wheel_scale,
            modifier: None,
            last_press: None,
            last_release: None,
            in_double_pick: false,
        }
    }

    /// Operation forced by the held modifier key, if any
    pub fn modifier(&self) -> Option<DragOperation> {
        self.modifier
    }

    pub fn in_double_pick(&self) -> bool {
        self.in_double_pick
    }

    fn keep(&self) -> bool {
        self.modifier == Some(DragOperation::Zoom)
    }

    fn within_timeout(&self, earlier: Option<Instant>, later: Option<Instant>) -> bool {
        match (earlier, later) {
            (Some(earlier), Some(later)) => {
                later.saturating_duration_since(earlier) < self.click_timeout
            }
            _ => false,
        }
    }

    /// Dispatch any [`InputEvent`].
    pub fn handle(&mut self, controller: &mut OrbitController, event: InputEvent, now: Instant) {
        match event {
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(key) => self.key_up(key),
            InputEvent::PointerDown { button, position } => {
                self.pointer_down(controller, button, position, now)
            }
            InputEvent::PointerUp { button, position } => {
                self.pointer_up(controller, button, position, now)
            }
            InputEvent::PointerMove { position } => self.pointer_move(controller, position),
            InputEvent::PointerLeave => self.pointer_leave(controller),
            InputEvent::Wheel { delta } => self.wheel(controller, delta),
            InputEvent::Touch(touch) => self.touch(controller, &touch, now),
        }
    }

    /// A key press replaces the modifier; non-modifier keys clear it.
    pub fn key_down(&mut self, key: KeyCode) {
        self.modifier = key.drag_modifier();
    }

    pub fn key_up(&mut self, _key: KeyCode) {
        self.modifier = None;
    }

    pub fn pointer_down(
        &mut self,
        controller: &mut OrbitController,
        button: PointerButton,
        position: Vec2,
        now: Instant,
    ) {
        if controller.state().is_active() {
            return;
        }
        let Some(operation) = self.modifier.or_else(|| button.drag_operation()) else {
            return;
        };
        controller.begin_drag(operation, position);

        let primary = button == PointerButton::Primary;
        if primary {
            self.last_press = Some(now);
        }

        if primary && self.within_timeout(self.last_release, self.last_press) {
            debug!("Double pick at {:?}", position);
            controller.emit(ControlEvent::DblPick(PickEvent {
                x: position.x,
                y: position.y,
                keep: self.keep(),
            }));
            self.in_double_pick = true;
        } else {
            controller.emit(ControlEvent::MouseDown);
        }
    }

    /// Buttons that cannot start a drag are ignored unless one is active,
    /// mirroring [`Self::pointer_down`].
    pub fn pointer_up(
        &mut self,
        controller: &mut OrbitController,
        button: PointerButton,
        position: Vec2,
        now: Instant,
    ) {
        if button.drag_operation().is_none() && !controller.state().is_active() {
            return;
        }
        controller.end_drag();

        let primary = button == PointerButton::Primary;
        if primary {
            self.last_release = Some(now);
        }

        if primary && self.within_timeout(self.last_press, self.last_release) {
            controller.emit(ControlEvent::MouseUp);
            controller.emit(ControlEvent::Pick(PickEvent {
                x: position.x,
                y: position.y,
                keep: self.keep(),
            }));
        } else if primary && self.in_double_pick {
            controller.emit(ControlEvent::UnDblPick);
            self.in_double_pick = false;
        } else {
            controller.emit(ControlEvent::MouseUp);
        }
        controller.emit(ControlEvent::Change);
    }

    pub fn pointer_move(&mut self, controller: &mut OrbitController, position: Vec2) {
        if controller.drag_to(position) {
            controller.emit(ControlEvent::Change);
        }
    }

    /// Leaving the surface ends a drag without producing a pick.
    pub fn pointer_leave(&mut self, controller: &mut OrbitController) {
        if controller.end_drag() {
            controller.emit(ControlEvent::MouseUp);
            controller.emit(ControlEvent::Change);
        }
    }

    /// Zoom by a wheel delta; positive deltas move the camera closer.
    pub fn wheel(&mut self, controller: &mut OrbitController, delta: f32) {
        if !delta.is_finite() || delta == 0.0 {
            return;
        }
        controller.zoom(0.0, -delta * self.wheel_scale);
        controller.emit(ControlEvent::Change);
    }

    pub fn touch(&mut self, controller: &mut OrbitController, touch: &TouchEvent, now: Instant) {
        if let Some(event) = touch.to_pointer_event() {
            self.handle(controller, event, now);
        }
    }
}
