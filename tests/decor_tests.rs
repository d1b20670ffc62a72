// Host-side tests for intro classes, the scan line and parallax offsets.

use folio_core::decor::{hero_parallax, pointer_parallax, IntroSequence, ScanLine, ScanLineConfig, ScanStep};
use folio_core::FolioError;
use glam::Vec2;

#[test]
fn project_intro_adds_classes_in_order() {
    let mut intro = IntroSequence::project(1000.0);
    assert!(intro.poll(1000.0).is_empty());
    assert_eq!(intro.next_due_ms(), Some(1300.0));
    assert_eq!(intro.poll(1300.0).as_slice(), &["animate"]);
    assert!(intro.poll(1500.0).is_empty());
    assert_eq!(intro.next_due_ms(), Some(2100.0));
    assert_eq!(intro.poll(2100.0).as_slice(), &["ready"]);
    assert!(intro.is_done());
    assert_eq!(intro.next_due_ms(), None);
    assert!(intro.poll(10_000.0).is_empty());
}

#[test]
fn late_intro_tick_catches_up() {
    let mut intro = IntroSequence::project(0.0);
    assert_eq!(intro.poll(5000.0).as_slice(), &["animate", "ready"]);
    assert!(intro.is_done());
}

#[test]
fn work_intro_is_immediate_and_unknown_pages_have_none() {
    let mut intro = IntroSequence::for_page(" work ", 50.0).unwrap();
    assert_eq!(intro.poll(50.0).as_slice(), &["loaded"]);
    assert!(intro.is_done());
    assert!(IntroSequence::for_page("home", 0.0).is_none());
}

#[test]
fn scan_line_cycle_runs_in_order() {
    let config = ScanLineConfig::work();
    let mut line = ScanLine::new(config, 0.0).unwrap();
    assert_eq!(line.poll(0.0).as_slice(), &[ScanStep::Reset]);
    assert_eq!(line.next_due_ms(), 50.0);
    assert!(line.poll(49.0).is_empty());
    assert_eq!(line.poll(50.0).as_slice(), &[ScanStep::Sweep]);
    assert_eq!(line.poll(4000.0).as_slice(), &[ScanStep::FadeOut]);
    assert_eq!(line.next_due_ms(), config.period_ms);
    assert!(line.poll(config.period_ms - 1.0).is_empty());
    assert_eq!(line.poll(config.period_ms).as_slice(), &[ScanStep::Reset]);
}

#[test]
fn about_scan_line_waits_for_its_first_run() {
    let mut line = ScanLine::new(ScanLineConfig::about(), 200.0).unwrap();
    assert!(line.poll(1199.0).is_empty());
    assert_eq!(line.next_due_ms(), 1200.0);
    assert_eq!(line.poll(1300.0).as_slice(), &[ScanStep::Reset, ScanStep::Sweep]);
    assert_eq!(line.next_due_ms(), 2800.0);
    assert_eq!(line.poll(2800.0).as_slice(), &[ScanStep::FadeOut]);
}

#[test]
fn stalled_scan_line_skips_missed_sweeps() {
    let config = ScanLineConfig::work();
    let mut line = ScanLine::new(config, 0.0).unwrap();
    line.poll(60.0);
    // Hidden tab: three periods go by without a tick.
    let now = config.period_ms * 3.0 + 10.0;
    assert_eq!(line.poll(now).as_slice(), &[ScanStep::Reset]);
    assert_eq!(line.next_due_ms(), config.period_ms * 3.0 + config.sweep_at_ms);
    assert_eq!(
        line.poll(config.period_ms * 3.0 + 5000.0).as_slice(),
        &[ScanStep::Sweep, ScanStep::FadeOut]
    );
    assert_eq!(line.next_due_ms(), config.period_ms * 4.0);
}

#[test]
fn scan_line_rejects_overlapping_cycles() {
    let mut config = ScanLineConfig::about();
    config.period_ms = 1000.0;
    assert!(matches!(ScanLine::new(config, 0.0), Err(FolioError::InvalidConfig(_))));

    let mut config = ScanLineConfig::work();
    config.sweep_ms = f64::NAN;
    assert!(config.validate().is_err());

    assert!(ScanLineConfig::for_page("about").is_some());
    assert!(ScanLineConfig::for_page("project").is_none());
}

#[test]
fn pointer_parallax_grows_with_depth() {
    let viewport = Vec2::new(1000.0, 800.0);
    assert_eq!(pointer_parallax(Vec2::new(500.0, 400.0), viewport, 3), Vec2::ZERO);

    let corner = Vec2::new(1000.0, 0.0);
    assert_eq!(pointer_parallax(corner, viewport, 0), Vec2::new(5.0, -5.0));
    assert_eq!(pointer_parallax(corner, viewport, 2), Vec2::new(15.0, -15.0));
    assert_eq!(pointer_parallax(corner, Vec2::ZERO, 2), Vec2::ZERO);
}

#[test]
fn hero_parallax_stops_below_the_hero() {
    assert_eq!(hero_parallax(0.0, 600.0, 0), Some(0.0));
    let first = hero_parallax(100.0, 600.0, 0).unwrap();
    let third = hero_parallax(100.0, 600.0, 2).unwrap();
    assert!((first - 10.0).abs() < 1e-4);
    assert!((third - 20.0).abs() < 1e-4);
    assert_eq!(hero_parallax(600.0, 600.0, 0), None);
    assert_eq!(hero_parallax(900.0, 600.0, 1), None);
}
