// Host-side tests for the sphere lifecycle animator.

use folio_core::sphere::{
    spin_duration_ms, Interaction, ScaleRule, SphereAnimator, SphereConfig, SphereState, REST_YAW,
};
use folio_core::{FolioError, SharedFlag, SPHERE_IDLE_JUMP_INTERVAL_MS, SPHERE_INACTIVITY_MS};
use glam::Vec2;

const FRAME: f64 = 1000.0 / 60.0;

fn desktop(now: f64) -> SphereAnimator {
    SphereAnimator::new(SphereConfig::desktop(), now).unwrap()
}

fn run(a: &mut SphereAnimator, from: f64, to: f64) {
    let mut t = from;
    while t < to {
        a.tick(t);
        t += FRAME;
    }
    a.tick(to);
}

#[test]
fn desktop_starts_asleep_below_view() {
    let mut a = desktop(0.0);
    assert_eq!(a.state(), SphereState::Asleep);
    let pose = a.tick(0.0).unwrap();
    assert!((pose.position_y - SphereConfig::desktop().hidden_y).abs() < 1e-5);
    assert!((pose.rotation.y - REST_YAW).abs() < 1e-5);
}

#[test]
fn pointer_wakes_sphere_and_it_lands_awake() {
    let mut a = desktop(0.0);
    a.tick(0.0);
    a.pointer_moved(Vec2::new(0.2, 0.1), false, 100.0);
    assert_eq!(a.state(), SphereState::Waking);

    run(&mut a, 100.0, 700.0);
    assert_eq!(a.state(), SphereState::Waking);
    assert!(a.base_y() > -7.0 && a.base_y() < 0.0);

    run(&mut a, 700.0, 1400.0);
    assert_eq!(a.state(), SphereState::Awake);
    assert_eq!(a.base_y(), 0.0);
    // Arrival hop right after landing.
    assert!(a.is_jumping());
}

#[test]
fn late_frame_lands_on_same_pose_as_smooth_run() {
    let mut smooth = desktop(0.0);
    let mut late = desktop(0.0);
    for a in [&mut smooth, &mut late] {
        a.tick(0.0);
        a.pointer_moved(Vec2::ZERO, false, 0.0);
    }
    run(&mut smooth, 0.0, 600.0);
    late.tick(600.0);
    assert!((smooth.base_y() - late.base_y()).abs() < 1e-4);
}

#[test]
fn inactivity_puts_sphere_back_to_sleep() {
    let mut a = desktop(0.0);
    a.pointer_moved(Vec2::ZERO, false, 0.0);
    a.tick(1300.0);
    assert_eq!(a.state(), SphereState::Awake);

    a.tick(SPHERE_INACTIVITY_MS + 100.0);
    assert_eq!(a.state(), SphereState::Sleeping);
    a.tick(SPHERE_INACTIVITY_MS + 2000.0);
    assert_eq!(a.state(), SphereState::Asleep);
    assert_eq!(a.base_y(), SphereConfig::desktop().hidden_y);
}

#[test]
fn pointer_during_sleep_wakes_again() {
    let mut a = desktop(0.0);
    a.pointer_moved(Vec2::ZERO, false, 0.0);
    a.tick(1300.0);
    a.tick(SPHERE_INACTIVITY_MS + 100.0);
    assert_eq!(a.state(), SphereState::Sleeping);
    a.pointer_moved(Vec2::ZERO, false, SPHERE_INACTIVITY_MS + 500.0);
    assert_eq!(a.state(), SphereState::Waking);
}

#[test]
fn asleep_sphere_hops_periodically() {
    let mut a = desktop(0.0);
    a.tick(0.0);
    assert!(!a.is_jumping());
    let start = SPHERE_IDLE_JUMP_INTERVAL_MS + 100.0;
    a.tick(start);
    assert!(a.is_jumping());
    a.tick(start + 600.0);
    assert!(!a.is_jumping());
}

#[test]
fn click_is_ignored_while_asleep_or_missed() {
    let mut a = desktop(0.0);
    assert!(!a.click(true, 10.0));
    a.pointer_moved(Vec2::ZERO, true, 20.0);
    assert!(!a.click(false, 30.0));
    assert!(a.click(true, 40.0));
    assert_eq!(a.state(), SphereState::Spinning);
}

#[test]
fn click_during_spin_is_ignored() {
    let mut a = desktop(0.0);
    a.pointer_moved(Vec2::ZERO, true, 0.0);
    a.tick(1300.0);
    assert!(a.click(true, 1300.0));
    a.tick(1500.0);
    assert!(!a.click(true, 1600.0));
    assert_eq!(a.state(), SphereState::Spinning);
}

#[test]
fn spin_settles_back_to_rest() {
    let mut a = desktop(0.0);
    a.pointer_moved(Vec2::ZERO, true, 0.0);
    a.tick(1300.0);
    a.click(true, 1300.0);

    let total = spin_duration_ms();
    assert!(total > 2000.0 && total < 2600.0, "spin lasts {total} ms");

    let mut max_z = 0.0_f32;
    let mut t = 1300.0;
    while t < 1300.0 + total - 50.0 {
        let pose = a.tick(t).unwrap();
        max_z = max_z.max(pose.rotation.z);
        assert_eq!(a.state(), SphereState::Spinning);
        t += FRAME;
    }
    assert!(max_z > std::f32::consts::TAU);

    let pose = a.tick(1300.0 + total + 50.0).unwrap();
    assert_eq!(pose.rotation.z, 0.0);
    assert_eq!(a.state(), SphereState::Awake);
}

#[test]
fn bounce_unwinds_less_than_a_turn() {
    let mut a = desktop(0.0);
    a.pointer_moved(Vec2::ZERO, true, 0.0);
    a.tick(1300.0);
    a.click(true, 1300.0);
    let total = spin_duration_ms();
    // Last half second is the bounce.
    let mut t = 1300.0 + total - 480.0;
    while t < 1300.0 + total {
        let z = a.tick(t).unwrap().rotation.z;
        assert!(z >= -0.01 && z < std::f32::consts::TAU + 0.3, "z = {z}");
        t += FRAME;
    }
}

#[test]
fn hover_flag_follows_pointer_hits() {
    let flag = SharedFlag::new(false);
    let mut a = desktop(0.0).with_hover_flag(flag.clone());
    a.pointer_moved(Vec2::ZERO, true, 0.0);
    assert!(flag.get());
    a.pointer_moved(Vec2::new(0.9, 0.9), false, 10.0);
    assert!(!flag.get());
}

#[test]
fn hit_test_uses_current_position() {
    let config = SphereConfig::desktop();
    let camera = config.camera(1600.0, 900.0);
    let ray = camera.ray_from_ndc(Vec2::ZERO);
    let scale = config.scale_for(1600.0);

    let mut a = desktop(0.0);
    a.tick(0.0);
    assert!(!a.hit_test(&ray, scale));

    a.pointer_moved(Vec2::ZERO, false, 0.0);
    a.tick(1300.0);
    assert!(a.hit_test(&ray, scale));
    let off = camera.ray_from_ndc(Vec2::new(0.95, 0.95));
    assert!(!a.hit_test(&off, scale));
}

#[test]
fn tilt_drives_rotation_on_mobile_only() {
    let mut mobile = SphereAnimator::new(SphereConfig::mobile(), 0.0).unwrap();
    assert_eq!(mobile.state(), SphereState::Awake);
    mobile.tilt(90.0, 0.0);
    run(&mut mobile, 0.0, 3000.0);
    let x = mobile.pose().rotation.x;
    assert!((x - 45f32.to_radians()).abs() < 0.1, "x = {x}");

    let mut d = desktop(0.0);
    d.tilt(90.0, 90.0);
    run(&mut d, 0.0, 1000.0);
    assert!(d.pose().rotation.x.abs() < 1e-5);
}

#[test]
fn mobile_tap_spins_without_waking() {
    let mut a = SphereAnimator::new(SphereConfig::mobile(), 0.0).unwrap();
    assert!(a.click(true, 10.0));
    assert_eq!(a.state(), SphereState::Spinning);
}

#[test]
fn loading_sphere_spins_on_its_own_with_pauses() {
    let config = SphereConfig::loading();
    let Interaction::AutoSpin { pause_ms } = config.interaction else {
        panic!("loading preset must auto-spin");
    };
    let mut a = SphereAnimator::new(config, 0.0).unwrap();
    a.tick(0.0);
    assert_eq!(a.state(), SphereState::Spinning);
    assert!(!a.click(true, 100.0));

    let end = spin_duration_ms() + 50.0;
    a.tick(end);
    assert_eq!(a.state(), SphereState::Awake);
    a.tick(end + pause_ms - 1.0);
    assert_eq!(a.state(), SphereState::Awake);
    a.tick(end + pause_ms);
    assert_eq!(a.state(), SphereState::Spinning);
}

#[test]
fn shutdown_stops_everything() {
    let flag = SharedFlag::new(false);
    let mut a = desktop(0.0).with_hover_flag(flag.clone());
    a.pointer_moved(Vec2::ZERO, true, 0.0);
    a.shutdown();
    assert!(!a.is_alive());
    assert!(!flag.get());
    assert!(a.tick(100.0).is_none());
    a.pointer_moved(Vec2::ZERO, true, 200.0);
    assert!(!flag.get());
    assert!(!a.click(true, 300.0));
}

#[test]
fn invalid_configs_are_rejected() {
    let mut c = SphereConfig::desktop();
    c.radius = 0.0;
    assert!(matches!(
        SphereAnimator::new(c, 0.0),
        Err(FolioError::InvalidConfig(_))
    ));

    let mut c = SphereConfig::desktop();
    c.segments = 2;
    assert!(c.validate().is_err());

    let mut c = SphereConfig::desktop();
    c.camera_z = 0.5;
    assert!(c.validate().is_err());
}

#[test]
fn scale_rules() {
    assert_eq!(ScaleRule::Fixed(1.0).scale_for(300.0), 1.0);
    let desktop = SphereConfig::desktop();
    assert!((desktop.scale_for(1600.0) - 1.25).abs() < 1e-5);
    assert!((SphereConfig::mobile().scale_for(400.0) - 0.6).abs() < 1e-5);
    assert!(ScaleRule::Linear { per_px: -1.0, offset: 0.0 }.scale_for(100.0) > 0.0);
}
