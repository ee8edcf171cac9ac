//! Landscape Controls - orbit/pan/zoom camera controls for landscape viewers
//!
//! The controls keep a camera on a sphere around a target point:
//! - **Rotate**: pointer drags change azimuth and altitude
//! - **Pan**: drags move the target in the camera plane
//! - **Zoom**: drags and the wheel scale the orbit radius
//! - **Momentum**: released rotations keep drifting and slow down
//!
//! A `mix` factor blends the controls toward a fixed view by narrowing
//! the allowed angles and turning rotation into panning.
//!
//! # Usage
//! - Feed platform input to an [`InputAdapter`]
//! - Call [`CameraController::update`] on the [`OrbitController`] once per frame
//! - Subscribe to [`ControlEvent`]s to redraw or to handle picks
//!
//! # Features
//! - `serialize-ron`: load a [`ControlsConfig`] from RON
//! - `winit`: map winit events to [`input`] types

pub mod config;
pub mod error;
pub mod events;
pub mod input;
pub mod scene;

pub use config::ControlsConfig;
pub use error::ConfigError;
pub use events::{ControlEvent, EventDispatcher, EventKind, PickEvent, SubscriberId};
pub use input::{InputAdapter, InputEvent, KeyCode, PointerButton, TouchEvent, TouchPhase};
pub use scene::{
    Camera, CameraController, CameraPose, DragOperation, InteractionState, Momentum,
    OrbitController,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version
pub fn init() {
    log::info!("Landscape controls v{} initialized", VERSION);
}
