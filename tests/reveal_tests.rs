// Host-side tests for the one-shot reveal registry.

use folio_core::reveal::{parse_level, stagger_delay, RevealRegistry, RevealSpec, RevealStyle};

#[test]
fn reveals_once_at_threshold() {
    let mut reg = RevealRegistry::new();
    assert!(reg.observe(1u32, RevealSpec::default()));
    assert!(reg.intersect(&1, 0.1).is_none());
    assert!(reg.is_pending(&1));

    let reveal = reg.intersect(&1, 0.15).unwrap();
    assert_eq!(reveal.key, 1);
    assert_eq!(reveal.style, RevealStyle::Class);
    assert!(reg.is_revealed(&1));
    assert!(!reg.is_pending(&1));

    assert!(reg.intersect(&1, 1.0).is_none());
    assert!(!reg.observe(1, RevealSpec::default()));
}

#[test]
fn duplicate_observe_is_ignored() {
    let mut reg = RevealRegistry::new();
    assert!(reg.observe("a", RevealSpec::default()));
    assert!(!reg.observe("a", RevealSpec::default().with_threshold(0.9)));
    assert_eq!(reg.pending_len(), 1);
}

#[test]
fn rounding_just_under_threshold_still_fires() {
    let mut reg = RevealRegistry::new();
    reg.observe(0u8, RevealSpec::default().with_threshold(0.5));
    assert!(reg.intersect(&0, 0.4995).is_some());
}

#[test]
fn zero_ratio_never_fires() {
    let mut reg = RevealRegistry::new();
    reg.observe(0u8, RevealSpec::default().with_threshold(0.0));
    assert!(reg.intersect(&0, 0.0).is_none());
    assert!(reg.intersect(&0, f32::NAN).is_none());
    assert!(reg.intersect(&0, 0.01).is_some());
}

#[test]
fn unknown_keys_are_ignored() {
    let mut reg: RevealRegistry<u32> = RevealRegistry::new();
    assert!(reg.intersect(&99, 1.0).is_none());
    assert_eq!(reg.revealed_len(), 0);
}

#[test]
fn spec_carries_style_and_delay() {
    let mut reg = RevealRegistry::new();
    let spec = RevealSpec::default()
        .with_threshold(0.5)
        .with_delay(200.0)
        .with_style(RevealStyle::Gauge { level: 80.0 });
    reg.observe(5u32, spec);
    let r = reg.intersect(&5, 0.6).unwrap();
    assert_eq!(r.delay_ms, 200.0);
    assert_eq!(r.style, RevealStyle::Gauge { level: 80.0 });
}

#[test]
fn builders_clamp() {
    let spec = RevealSpec::default().with_threshold(3.0).with_delay(-5.0);
    assert_eq!(spec.threshold, 1.0);
    assert_eq!(spec.delay_ms, 0.0);
}

#[test]
fn stagger_is_100ms_per_item() {
    assert_eq!(stagger_delay(0), 0.0);
    assert_eq!(stagger_delay(3), 300.0);
}

#[test]
fn gauge_levels() {
    assert_eq!(parse_level("72"), Some(72.0));
    assert_eq!(parse_level("72%"), Some(72.0));
    assert_eq!(parse_level(" 40.5 "), Some(40.5));
    assert_eq!(parse_level("150"), Some(100.0));
    assert_eq!(parse_level("-3"), Some(0.0));
    assert_eq!(parse_level("abc"), None);
    assert_eq!(parse_level(""), None);
}
