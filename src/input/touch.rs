//! Single-touch to pointer emulation

use glam::Vec2;

use super::{InputEvent, PointerButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// One touch point update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub position: Vec2,
    /// Touches on the surface after this update (a lifted finger is not counted)
    pub touch_count: usize,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, position: Vec2, touch_count: usize) -> Self {
        Self {
            phase,
            position,
            touch_count,
        }
    }

    /// Equivalent primary-pointer event, or `None` for multi-touch gestures.
    pub fn to_pointer_event(&self) -> Option<InputEvent> {
        if self.touch_count > 1 {
            return None;
        }

        let position = self.position;
        Some(match self.phase {
            TouchPhase::Started => InputEvent::PointerDown {
                button: PointerButton::Primary,
                position,
            },
            TouchPhase::Moved => InputEvent::PointerMove { position },
            TouchPhase::Ended | TouchPhase::Cancelled => InputEvent::PointerUp {
                button: PointerButton::Primary,
                position,
            },
        })
    }
}
