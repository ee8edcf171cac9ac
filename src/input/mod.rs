//! Platform-agnostic input for the orbit controls.
//!
//! The [`InputAdapter`] turns pointer, touch, keyboard and wheel events
//! into [`OrbitController`](crate::scene::OrbitController) drags and
//! emits the discrete [`ControlEvent`](crate::events::ControlEvent)s.
//! Platform layers map their native events to the types in this module.

mod adapter;
#[cfg(feature = "winit")]
pub mod platform;
mod touch;

pub use adapter::*;
pub use touch::*;

use glam::Vec2;

use crate::scene::DragOperation;

/// Physical keyboard key identifier.
///
/// Only the modifiers influence the controls; every other key maps to
/// [`KeyCode::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    SuperLeft,
    SuperRight,
    Other,
}

impl KeyCode {
    /// Drag operation selected while this key is held.
    ///
    /// Control zooms, Shift pans.
    pub fn drag_modifier(self) -> Option<DragOperation> {
        match self {
            KeyCode::ControlLeft | KeyCode::ControlRight => Some(DragOperation::Zoom),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(DragOperation::Pan),
            _ => None,
        }
    }
}

/// Pointer (mouse) button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left button, or a single touch
    Primary,
    Middle,
    /// Right button
    Secondary,
    Other(u16),
}

impl PointerButton {
    /// Drag operation for an unmodified press of this button.
    pub fn drag_operation(self) -> Option<DragOperation> {
        match self {
            PointerButton::Primary => Some(DragOperation::Rotate),
            PointerButton::Middle => Some(DragOperation::Pan),
            PointerButton::Secondary => Some(DragOperation::Zoom),
            PointerButton::Other(_) => None,
        }
    }
}

/// Raw input accepted by [`InputAdapter::handle`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    PointerDown {
        button: PointerButton,
        position: Vec2,
    },
    PointerUp {
        button: PointerButton,
        position: Vec2,
    },
    PointerMove {
        position: Vec2,
    },
    /// Pointer left the interactive surface
    PointerLeave,
    /// Wheel delta in `wheelDelta` units (120 per notch, positive away from the user)
    Wheel {
        delta: f32,
    },
    Touch(TouchEvent),
}
