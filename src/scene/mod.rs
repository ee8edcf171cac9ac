//! Scene management: camera, pose and controllers

mod camera;
mod camera_controller;
mod interaction;
mod pose;

pub use camera::*;
pub use camera_controller::*;
pub use interaction::*;
pub use pose::*;
