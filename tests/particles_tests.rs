// Host-side tests for the particle network.

use folio_core::particles::{FieldConfig, ParticleField};
use folio_core::FolioError;
use glam::Vec2;

const FRAME: f64 = 1000.0 / 60.0;

fn field(seed: u64) -> ParticleField {
    let mut f = ParticleField::new(FieldConfig::default(), seed).unwrap();
    f.resize(800.0, 600.0);
    f
}

fn inside(p: Vec2, size: Vec2) -> bool {
    p.x >= 0.0 && p.y >= 0.0 && p.x <= size.x && p.y <= size.y
}

#[test]
fn resize_spawns_configured_count_inside_bounds() {
    let f = field(7);
    assert_eq!(f.particles().len(), 60);
    assert_eq!(f.size(), Vec2::new(800.0, 600.0));
    for p in f.particles() {
        assert!(inside(p.pos, f.size()));
        assert!(p.radius >= 1.0 && p.radius <= 3.0);
        assert!(p.vel.x.abs() <= 0.25 && p.vel.y.abs() <= 0.25);
    }
}

#[test]
fn same_seed_same_field() {
    let a = field(42);
    let b = field(42);
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn particles_stay_inside_while_stepping() {
    let mut f = field(3);
    f.set_pointer(Some(Vec2::new(400.0, 300.0)));
    for _ in 0..600 {
        f.step(FRAME);
    }
    for p in f.particles() {
        assert!(inside(p.pos, f.size()), "{:?}", p.pos);
    }
}

#[test]
fn pointer_pushes_particles_away() {
    let config = FieldConfig {
        count: 1,
        max_speed: 0.0,
        ..FieldConfig::default()
    };
    let mut f = ParticleField::new(config, 11).unwrap();
    f.resize(400.0, 400.0);
    let before = f.particles()[0].pos;
    // Push toward the middle so the bounds never clamp the move.
    let side = if before.x < 200.0 { -10.0 } else { 10.0 };
    let pointer = before + Vec2::new(side, 0.0);
    f.set_pointer(Some(pointer));
    f.step(FRAME);
    let after = f.particles()[0].pos;
    assert!(after.distance(pointer) > before.distance(pointer));
    assert!((after.y - before.y).abs() < 1e-4);

    f.set_pointer(None);
    f.step(FRAME);
    assert_eq!(f.particles()[0].pos, after);
}

#[test]
fn long_frames_are_capped() {
    let config = FieldConfig {
        count: 1,
        ..FieldConfig::default()
    };
    let mut a = ParticleField::new(config.clone(), 5).unwrap();
    let mut b = ParticleField::new(config, 5).unwrap();
    a.resize(10_000.0, 10_000.0);
    b.resize(10_000.0, 10_000.0);
    a.step(FRAME * 5.0);
    b.step(10_000.0);
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn links_fade_with_distance() {
    let f = field(9);
    let links = f.links();
    assert!(!links.is_empty());
    let ps = f.particles();
    for l in &links {
        assert!(l.a < l.b);
        let d = ps[l.a].pos.distance(ps[l.b].pos);
        assert!(d < 150.0);
        assert!((l.alpha - (1.0 - d / 150.0)).abs() < 1e-5);
        assert!(l.alpha > 0.0 && l.alpha <= 1.0);
    }
}

#[test]
fn bad_configs_are_rejected() {
    let bad = FieldConfig {
        radius_range: (0.0, 1.0),
        ..FieldConfig::default()
    };
    assert!(matches!(ParticleField::new(bad, 0), Err(FolioError::InvalidConfig(_))));
    let bad = FieldConfig {
        link_distance: -1.0,
        ..FieldConfig::default()
    };
    assert!(bad.validate().is_err());
}
