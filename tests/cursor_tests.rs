// Host-side tests for the custom cursor model.

use folio_core::cursor::{CursorConfig, CursorModel, TransitionStep};
use folio_core::{Breakpoint, SharedFlag, CURSOR_HOVER_SCALE, CURSOR_PRESSED_SCALE, REFERENCE_FRAME_MS};
use glam::Vec2;

fn desktop(flag: SharedFlag) -> CursorModel {
    CursorModel::new(CursorConfig::default(), flag, Breakpoint::Desktop, Vec2::new(100.0, 100.0))
}

#[test]
fn ring_trails_the_dot() {
    let mut c = desktop(SharedFlag::default());
    c.pointer_moved(Vec2::new(200.0, 100.0));
    let f = c.tick(0.0, REFERENCE_FRAME_MS);
    assert_eq!(f.dot, Vec2::new(200.0, 100.0));
    assert!((f.ring.x - 115.0).abs() < 1e-3);
    assert_eq!(f.ring.y, 100.0);

    // Two half frames move as far as one full frame.
    let mut c2 = desktop(SharedFlag::default());
    c2.pointer_moved(Vec2::new(200.0, 100.0));
    c2.tick(0.0, REFERENCE_FRAME_MS / 2.0);
    let f2 = c2.tick(0.0, REFERENCE_FRAME_MS / 2.0);
    assert!((f2.ring.x - 115.0).abs() < 1e-3);
}

#[test]
fn zero_lag_pins_ring() {
    let mut c = CursorModel::new(
        CursorConfig::zero_lag(),
        SharedFlag::default(),
        Breakpoint::Desktop,
        Vec2::ZERO,
    );
    c.pointer_moved(Vec2::new(40.0, 30.0));
    assert_eq!(c.tick(0.0, REFERENCE_FRAME_MS).ring, Vec2::new(40.0, 30.0));
}

#[test]
fn mobile_ignores_input() {
    let mut c = CursorModel::new(
        CursorConfig::default(),
        SharedFlag::default(),
        Breakpoint::Mobile,
        Vec2::ZERO,
    );
    assert!(!c.is_visible());
    c.pointer_moved(Vec2::new(10.0, 10.0));
    c.set_hovered(true);
    assert!(!c.has_seen_pointer());
    assert_eq!(c.scale(), 1.0);
    assert!(!c.begin_transition("/work.html", 0.0));
}

#[test]
fn scale_follows_hover_press_and_sphere() {
    let flag = SharedFlag::new(false);
    let mut c = desktop(flag.clone());
    assert_eq!(c.scale(), 1.0);

    c.set_hovered(true);
    assert_eq!(c.scale(), CURSOR_HOVER_SCALE);
    c.press(true);
    assert_eq!(c.scale(), CURSOR_PRESSED_SCALE);
    c.release();
    c.set_hovered(false);
    assert_eq!(c.scale(), 1.0);

    // Presses off interactive elements only count over the sphere.
    c.press(false);
    assert_eq!(c.scale(), 1.0);
    flag.set(true);
    assert_eq!(c.scale(), CURSOR_HOVER_SCALE);
    c.press(false);
    assert_eq!(c.scale(), CURSOR_PRESSED_SCALE);
}

#[test]
fn transition_emits_each_step_once() {
    let mut c = desktop(SharedFlag::default());
    c.pointer_moved(Vec2::new(300.0, 300.0));
    assert!(c.begin_transition("/work.html", 1000.0));
    assert!(c.is_locked());
    assert!(!c.begin_transition("/other.html", 1001.0));

    assert_eq!(c.tick(1000.0, 16.0).step, Some(TransitionStep::Expand));
    assert_eq!(c.tick(1016.0, 16.0).step, None);
    assert_eq!(c.tick(1800.0, 16.0).step, Some(TransitionStep::Shrink));
    assert_eq!(c.tick(2599.0, 16.0).step, None);
    assert_eq!(
        c.tick(2600.0, 16.0).step,
        Some(TransitionStep::Navigate("/work.html".into()))
    );
    assert_eq!(c.tick(5000.0, 16.0).step, None);
}

#[test]
fn locked_cursor_stays_put() {
    let mut c = desktop(SharedFlag::default());
    c.begin_transition("/a", 0.0);
    c.pointer_moved(Vec2::new(900.0, 900.0));
    let f = c.tick(0.0, REFERENCE_FRAME_MS);
    assert_eq!(f.dot, Vec2::new(100.0, 100.0));
    assert_eq!(f.ring, Vec2::new(100.0, 100.0));
}

#[test]
fn recenter_only_before_first_move() {
    let mut c = desktop(SharedFlag::default());
    c.recenter(Vec2::new(50.0, 60.0));
    assert_eq!(c.tick(0.0, 0.0).ring, Vec2::new(50.0, 60.0));

    c.pointer_moved(Vec2::new(70.0, 70.0));
    c.recenter(Vec2::new(1.0, 1.0));
    assert_eq!(c.tick(0.0, 0.0).dot, Vec2::new(70.0, 70.0));
}
