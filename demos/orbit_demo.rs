//! Headless orbit controls demo
//!
//! Replays a pointer drag through the input adapter, releases it and logs
//! the camera while momentum settles.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example orbit_demo
//!   cargo run --example orbit_demo -- --mode pan --dx 6 --dy 2
//!   cargo run --example orbit_demo -- --mix 0.5 --frames 20

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use clap::Parser;
use glam::Vec2;
use landscape_controls::{
    Camera, CameraController, ControlsConfig, EventKind, InputAdapter, InputEvent, KeyCode,
    OrbitController, PointerButton,
};

/// Drag operation selected through a held modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
enum CliMode {
    #[default]
    Rotate,
    Pan,
    Zoom,
}

impl CliMode {
    fn modifier(self) -> Option<KeyCode> {
        match self {
            CliMode::Rotate => None,
            CliMode::Pan => Some(KeyCode::ShiftLeft),
            CliMode::Zoom => Some(KeyCode::ControlLeft),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "orbit_demo",
    about = "Replay a drag through the landscape orbit controls",
    version
)]
struct Args {
    /// Operation to drag with.
    #[arg(long, default_value = "rotate", value_enum)]
    mode: CliMode,

    /// Horizontal pointer movement per frame, in pixels.
    #[arg(long, default_value = "8.0", allow_hyphen_values = true)]
    dx: f32,

    /// Vertical pointer movement per frame, in pixels.
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    dy: f32,

    /// Frames spent dragging before release.
    #[arg(long, default_value = "10")]
    frames: u32,

    /// Blend toward the fixed view (0..=1).
    #[arg(long, default_value = "0.0")]
    mix: f32,

    /// Upper bound on frames simulated after release.
    #[arg(long, default_value = "500")]
    max_drift_frames: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    landscape_controls::init();

    let args = Args::parse();
    let config = ControlsConfig::default().with_mix(args.mix);
    let mut controller = match OrbitController::with_config(&config) {
        Ok(controller) => controller,
        Err(err) => {
            log::error!("Invalid configuration: {err}");
            std::process::exit(2);
        }
    };
    let mut adapter = InputAdapter::new(&config);
    let mut camera = Camera::default();

    let changes = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&changes);
    controller.subscribe(EventKind::Change, move |_| counter.set(counter.get() + 1));
    controller.subscribe(EventKind::Pick, |event| log::info!("Pick: {:?}", event));

    let frame = Duration::from_millis(16);
    let mut now = Instant::now();
    let mut pointer = Vec2::new(400.0, 300.0);

    if let Some(key) = args.mode.modifier() {
        adapter.handle(&mut controller, InputEvent::KeyDown(key), now);
    }
    adapter.handle(
        &mut controller,
        InputEvent::PointerDown {
            button: PointerButton::Primary,
            position: pointer,
        },
        now,
    );

    for _ in 0..args.frames {
        now += frame;
        pointer += Vec2::new(args.dx, args.dy);
        adapter.handle(&mut controller, InputEvent::PointerMove { position: pointer }, now);
        controller.update(&mut camera);
        log::info!(
            "drag  az={:7.2} alt={:7.2} r={:7.2} eye={:?}",
            controller.azimuth(),
            controller.altitude(),
            controller.radius(),
            camera.position
        );
    }

    adapter.handle(
        &mut controller,
        InputEvent::PointerUp {
            button: PointerButton::Primary,
            position: pointer,
        },
        now,
    );
    if let Some(key) = args.mode.modifier() {
        adapter.handle(&mut controller, InputEvent::KeyUp(key), now);
    }

    let mut drift_frames = 0;
    while controller.is_animating() && drift_frames < args.max_drift_frames {
        controller.update(&mut camera);
        drift_frames += 1;
        log::debug!(
            "drift az={:7.2} alt={:7.2} momentum={:.3}",
            controller.azimuth(),
            controller.altitude(),
            controller.momentum().magnitude()
        );
    }

    log::info!(
        "Settled after {} drift frames: az={:.2} alt={:.2} r={:.2} target={:?} ({} change events)",
        drift_frames,
        controller.azimuth(),
        controller.altitude(),
        controller.radius(),
        controller.target(),
        changes.get()
    );
}
