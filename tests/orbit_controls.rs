//! Integration tests for the orbit controls.
//!
//! Drives [`OrbitController`] through [`InputAdapter`] the way a host
//! application would: raw input events, one `update` per frame, and
//! observers subscribed to the emitted events.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use glam::{Vec2, Vec3};
use rstest::rstest;

use landscape_controls::{
    Camera, CameraController, ControlEvent, ControlsConfig, EventKind, InputAdapter, InputEvent,
    InteractionState, KeyCode, OrbitController, PointerButton, TouchEvent, TouchPhase,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn record(controller: &mut OrbitController, kinds: &[EventKind]) -> Rc<RefCell<Vec<ControlEvent>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    for kind in kinds {
        let sink = Rc::clone(&seen);
        controller.subscribe(*kind, move |e| sink.borrow_mut().push(*e));
    }
    seen
}

// ---------------------------------------------------------------------------
// Clamping properties
// ---------------------------------------------------------------------------

#[rstest]
#[case(-1000.0, 0.0)]
#[case(-360.0, 0.0)]
#[case(-0.5, 0.0)]
#[case(0.0, 0.0)]
#[case(359.99, 0.0)]
#[case(360.0, 0.0)]
#[case(720.25, 0.0)]
#[case(1.0e6, 0.0)]
#[case(-1000.0, 0.3)]
#[case(5.0, 0.3)]
#[case(359.0, 0.3)]
#[case(180.0, 0.75)]
#[case(10.0, 0.75)]
fn azimuth_stays_wrapped_and_in_band(#[case] input: f32, #[case] mix: f32) {
    let mut orbit = OrbitController::default();
    orbit.set_mix(mix);
    orbit.set_azimuth(input);

    let azimuth = orbit.azimuth();
    assert!((0.0..360.0).contains(&azimuth), "azimuth {azimuth}");
    if mix > 0.0 {
        assert!(azimuth >= mix * 180.0 - 1e-3 && azimuth <= 360.0 - mix * 180.0 + 1e-3);
    }
}

#[rstest]
#[case(-45.0)]
#[case(0.0)]
#[case(123.4)]
#[case(359.0)]
#[case(4000.0)]
fn full_mix_forces_azimuth_180(#[case] input: f32) {
    let mut orbit = OrbitController::default();
    orbit.set_mix(1.0);
    orbit.set_azimuth(input);
    assert_eq!(orbit.azimuth(), 180.0);
}

#[rstest]
#[case(-90.0, 0.0)]
#[case(0.0, 0.0)]
#[case(90.0, 0.0)]
#[case(180.0, 0.0)]
#[case(500.0, 0.0)]
#[case(0.0, 0.5)]
#[case(179.0, 0.5)]
#[case(60.0, 0.9)]
fn altitude_stays_in_band(#[case] input: f32, #[case] mix: f32) {
    let mut orbit = OrbitController::default();
    orbit.set_mix(mix);
    orbit.set_altitude(input);

    let altitude = orbit.altitude();
    assert!(altitude >= 0.0001 + 90.0 * mix - 1e-4, "altitude {altitude}");
    assert!(altitude <= 179.9999 - 90.0 * mix + 1e-4, "altitude {altitude}");
}

#[rstest]
#[case(-10.0, 85.0)]
#[case(0.0, 85.0)]
#[case(84.9, 85.0)]
#[case(300.0, 300.0)]
#[case(600.1, 600.0)]
#[case(1.0e9, 600.0)]
fn radius_is_clamped(#[case] input: f32, #[case] expected: f32) {
    let mut orbit = OrbitController::default();
    orbit.set_radius(input);
    assert_eq!(orbit.radius(), expected);
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

#[test]
fn rotate_scenario_without_mix() {
    let mut orbit = OrbitController::default();
    let rotate_speed = orbit.rotate_speed;
    let (azimuth, altitude) = (orbit.azimuth(), orbit.altitude());

    orbit.rotate(10.0, 0.0);
    let expected = (azimuth - rotate_speed * 10.0).rem_euclid(360.0);
    assert!((orbit.azimuth() - expected).abs() < 1e-4);
    assert_eq!(orbit.altitude(), altitude);
}

#[test]
fn zoom_scenario() {
    let config = ControlsConfig::default().with_radius(250.0);
    let mut orbit = OrbitController::with_config(&config).unwrap();
    assert!((orbit.zoom_speed - 0.002).abs() < f32::EPSILON);

    orbit.zoom(0.0, 100.0);
    assert!((orbit.radius() - 300.0).abs() < 1e-3);
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(10)]
#[case(20)]
fn momentum_decays_geometrically(#[case] ticks: i32) {
    let mut orbit = OrbitController::default();
    let mut camera = Camera::default();
    orbit.rotate(10.0, 0.0);

    for _ in 0..ticks {
        orbit.update(&mut camera);
    }

    let expected = 10.0 * orbit.friction().powi(ticks);
    assert!((orbit.momentum().magnitude() - expected).abs() < 1e-3);
}

#[test]
fn momentum_change_events_are_coalesced_per_tick() {
    let mut orbit = OrbitController::default();
    let mut camera = Camera::default();
    let seen = record(&mut orbit, &[EventKind::Change]);

    orbit.rotate(2.0, 0.0);
    let mut ticks = 0;
    while orbit.is_animating() {
        orbit.update(&mut camera);
        ticks += 1;
    }

    assert!(ticks > 0);
    assert_eq!(seen.borrow().len(), ticks);

    // Settled: further ticks are silent
    orbit.update(&mut camera);
    assert_eq!(seen.borrow().len(), ticks);
}

// ---------------------------------------------------------------------------
// Input adapter
// ---------------------------------------------------------------------------

#[rstest]
#[case::instant(0, true)]
#[case::quick(50, true)]
#[case::just_under(199, true)]
#[case::at_timeout(200, false)]
#[case::slow(500, false)]
fn pick_depends_on_press_duration(#[case] held_ms: u64, #[case] picked: bool) {
    let mut orbit = OrbitController::default();
    let mut adapter = InputAdapter::default();
    let seen = record(&mut orbit, &[EventKind::Pick]);
    let t0 = Instant::now();
    let at = Vec2::new(64.0, 48.0);

    adapter.handle(
        &mut orbit,
        InputEvent::PointerDown {
            button: PointerButton::Primary,
            position: at,
        },
        t0,
    );
    adapter.handle(
        &mut orbit,
        InputEvent::PointerUp {
            button: PointerButton::Primary,
            position: at,
        },
        t0 + Duration::from_millis(held_ms),
    );

    assert_eq!(!seen.borrow().is_empty(), picked);
}

#[test]
fn drag_release_and_drift() {
    init_logging();

    let mut orbit = OrbitController::default();
    let mut adapter = InputAdapter::default();
    let mut camera = Camera::default();
    let seen = record(&mut orbit, &[EventKind::Change, EventKind::MouseUp]);
    let t0 = Instant::now();
    let ms = Duration::from_millis;

    adapter.handle(
        &mut orbit,
        InputEvent::PointerDown {
            button: PointerButton::Primary,
            position: Vec2::new(100.0, 100.0),
        },
        t0,
    );
    for step in 1..=5 {
        adapter.handle(
            &mut orbit,
            InputEvent::PointerMove {
                position: Vec2::new(100.0 + 4.0 * step as f32, 100.0),
            },
            t0 + ms(16 * step),
        );
        orbit.update(&mut camera);
    }
    // Each tick turns by the 4 px step plus 3.6 px of decayed momentum
    assert!((orbit.azimuth() - 29.8).abs() < 1e-3);

    adapter.handle(
        &mut orbit,
        InputEvent::PointerUp {
            button: PointerButton::Primary,
            position: Vec2::new(120.0, 100.0),
        },
        t0 + ms(400),
    );
    assert_eq!(orbit.state(), InteractionState::Idle);
    assert!(orbit.is_animating());

    let released_at = orbit.azimuth();
    while orbit.is_animating() {
        orbit.update(&mut camera);
    }
    // Drift keeps turning the same way and converges: 3.6 * 0.9 / 0.1 pixels at most
    let drift = released_at - orbit.azimuth();
    assert!(drift > 0.0 && drift < 0.4 * 36.0 + 1e-3, "drift {drift}");

    assert_eq!(camera.target, orbit.target());
    assert!((camera.distance_to_target() - orbit.radius()).abs() < 1e-2);
    assert!(seen.borrow().contains(&ControlEvent::MouseUp));
}

#[test]
fn shift_drag_pans_target() {
    let mut orbit = OrbitController::default();
    let mut adapter = InputAdapter::default();
    let mut camera = Camera::default();
    let now = Instant::now();

    adapter.handle(&mut orbit, InputEvent::KeyDown(KeyCode::ShiftLeft), now);
    adapter.handle(
        &mut orbit,
        InputEvent::PointerDown {
            button: PointerButton::Primary,
            position: Vec2::ZERO,
        },
        now,
    );
    assert_eq!(orbit.state(), InteractionState::Panning);

    adapter.handle(
        &mut orbit,
        InputEvent::PointerMove {
            position: Vec2::new(10.0, 0.0),
        },
        now,
    );
    orbit.update(&mut camera);
    adapter.handle(&mut orbit, InputEvent::PointerLeave, now);

    assert!((orbit.target().length() - 3.0).abs() < 1e-3);
    assert_eq!(orbit.azimuth(), 45.0);
    // Pan drags leave no momentum behind
    assert!(!orbit.is_animating());
    assert_eq!(camera.target, orbit.target());
}

#[rstest]
#[case::friction_at_one(ControlsConfig::default().with_friction(1.0))]
#[case::friction_above_one(ControlsConfig::default().with_friction(1.5))]
#[case::inverted_radius(ControlsConfig::default().with_radius_range(600.0, 85.0))]
#[case::mix_out_of_range(ControlsConfig::default().with_mix(2.0))]
fn invalid_config_is_rejected(#[case] config: ControlsConfig) {
    assert!(OrbitController::with_config(&config).is_err());
}

#[test]
fn wheel_zoom_is_independent_of_drag_state() {
    let mut orbit = OrbitController::default();
    let mut adapter = InputAdapter::default();
    let now = Instant::now();

    adapter.handle(&mut orbit, InputEvent::Wheel { delta: -120.0 }, now);
    // 250 * (1 + 0.002 * 12)
    assert!((orbit.radius() - 256.0).abs() < 1e-3);
}

#[test]
fn single_touch_emulates_pointer() {
    let mut orbit = OrbitController::default();
    let mut adapter = InputAdapter::default();
    let mut camera = Camera::default();
    let t0 = Instant::now();

    adapter.handle(
        &mut orbit,
        InputEvent::Touch(TouchEvent::new(TouchPhase::Started, Vec2::ZERO, 1)),
        t0,
    );
    adapter.handle(
        &mut orbit,
        InputEvent::Touch(TouchEvent::new(TouchPhase::Moved, Vec2::new(0.0, 10.0), 1)),
        t0,
    );
    orbit.update(&mut camera);
    // 10 px of drag plus 9 px of momentum
    assert!((orbit.altitude() - 67.4).abs() < 1e-3);

    adapter.handle(
        &mut orbit,
        InputEvent::Touch(TouchEvent::new(TouchPhase::Ended, Vec2::new(0.0, 10.0), 0)),
        t0 + Duration::from_millis(500),
    );
    assert_eq!(orbit.state(), InteractionState::Idle);
}

#[test]
fn mix_blend_turns_rotation_into_pan() {
    let mut orbit = OrbitController::new(Vec3::ZERO, 250.0);
    orbit.set_mix(0.5);
    orbit.set_azimuth(180.0);
    let (azimuth, altitude) = (orbit.azimuth(), orbit.altitude());

    orbit.rotate(10.0, 0.0);
    // mix² = 0.25 of the drag pans, the rest rotates
    assert!((orbit.target().length() - 0.3 * 2.5).abs() < 1e-3);
    assert!((azimuth - orbit.azimuth() - 0.4 * 7.5).abs() < 1e-3);
    assert_eq!(orbit.altitude(), altitude);
}
