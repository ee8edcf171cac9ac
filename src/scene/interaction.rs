//! Interaction state machine and inertia

use glam::Vec2;

/// Operation a drag (or its momentum) applies each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragOperation {
    Rotate,
    Pan,
    Zoom,
}

/// Current pointer interaction.
///
/// Leaves `Idle` on pointer-down and returns to it on pointer-up or when
/// the pointer leaves the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Rotating,
    Panning,
    Zooming,
}

impl InteractionState {
    pub fn is_active(self) -> bool {
        self != InteractionState::Idle
    }

    /// The operation driven by this state, `None` when idle.
    pub fn operation(self) -> Option<DragOperation> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Rotating => Some(DragOperation::Rotate),
            InteractionState::Panning => Some(DragOperation::Pan),
            InteractionState::Zooming => Some(DragOperation::Zoom),
        }
    }
}

impl From<DragOperation> for InteractionState {
    fn from(operation: DragOperation) -> Self {
        match operation {
            DragOperation::Rotate => InteractionState::Rotating,
            DragOperation::Pan => InteractionState::Panning,
            DragOperation::Zoom => InteractionState::Zooming,
        }
    }
}

/// Residual drag motion applied after the pointer is released.
///
/// The delta shrinks geometrically by a friction factor on every decay
/// step until it drops under the caller's threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Momentum {
    delta: Vec2,
    operation: DragOperation,
}

impl Default for Momentum {
    fn default() -> Self {
        Self {
            delta: Vec2::ZERO,
            operation: DragOperation::Rotate,
        }
    }
}

impl Momentum {
    pub fn new(operation: DragOperation, delta: Vec2) -> Self {
        Self { delta, operation }
    }

    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    pub fn operation(&self) -> DragOperation {
        self.operation
    }

    pub fn magnitude(&self) -> f32 {
        self.delta.length()
    }

    /// Whether enough motion is left to keep applying.
    pub fn is_moving(&self, threshold: f32) -> bool {
        self.magnitude() > threshold
    }

    /// Scale the delta by `friction` and return the decayed value.
    pub fn decay(&mut self, friction: f32) -> Vec2 {
        self.delta *= friction;
        self.delta
    }

    pub fn clear(&mut self) {
        self.delta = Vec2::ZERO;
    }
}
