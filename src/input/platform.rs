//! Input conversion utilities.
//!
//! Maps winit key codes, mouse buttons, wheel deltas and touches to the
//! engine-agnostic types in [`crate::input`].

use std::collections::HashSet;

use glam::Vec2;
use winit::event::{MouseButton, MouseScrollDelta, Touch};
use winit::keyboard::{self, PhysicalKey};

use super::{KeyCode, PointerButton, TouchEvent, TouchPhase};

/// Wheel units per scroll line (one classic mouse-wheel notch)
pub const LINE_DELTA: f32 = 120.0;

/// Convert a winit [`PhysicalKey`] to a [`KeyCode`].
pub fn map_winit_key(key: PhysicalKey) -> KeyCode {
    match key {
        PhysicalKey::Code(code) => match code {
            keyboard::KeyCode::ShiftLeft => KeyCode::ShiftLeft,
            keyboard::KeyCode::ShiftRight => KeyCode::ShiftRight,
            keyboard::KeyCode::ControlLeft => KeyCode::ControlLeft,
            keyboard::KeyCode::ControlRight => KeyCode::ControlRight,
            keyboard::KeyCode::AltLeft => KeyCode::AltLeft,
            keyboard::KeyCode::AltRight => KeyCode::AltRight,
            keyboard::KeyCode::SuperLeft => KeyCode::SuperLeft,
            keyboard::KeyCode::SuperRight => KeyCode::SuperRight,
            _ => KeyCode::Other,
        },
        PhysicalKey::Unidentified(_) => KeyCode::Other,
    }
}

/// Convert a winit [`MouseButton`] to a [`PointerButton`].
pub fn map_winit_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(id) => PointerButton::Other(id),
    }
}

/// Vertical wheel delta in `wheelDelta` units, positive away from the user.
pub fn wheel_delta(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y * LINE_DELTA,
        MouseScrollDelta::PixelDelta(position) => position.y as f32,
    }
}

fn map_phase(phase: winit::event::TouchPhase) -> TouchPhase {
    match phase {
        winit::event::TouchPhase::Started => TouchPhase::Started,
        winit::event::TouchPhase::Moved => TouchPhase::Moved,
        winit::event::TouchPhase::Ended => TouchPhase::Ended,
        winit::event::TouchPhase::Cancelled => TouchPhase::Cancelled,
    }
}

/// Tracks active touch IDs so per-finger winit events can report how
/// many touches are on the surface.
#[derive(Debug, Default, Clone)]
pub struct TouchTracker {
    active: HashSet<u64>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Convert a winit [`Touch`] and update the active set.
    pub fn track(&mut self, touch: &Touch) -> TouchEvent {
        let position = Vec2::new(touch.location.x as f32, touch.location.y as f32);
        self.track_phase(touch.id, map_phase(touch.phase), position)
    }

    pub fn track_phase(&mut self, id: u64, phase: TouchPhase, position: Vec2) -> TouchEvent {
        match phase {
            TouchPhase::Started | TouchPhase::Moved => {
                self.active.insert(id);
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active.remove(&id);
            }
        }
        TouchEvent::new(phase, position, self.active.len())
    }
}
