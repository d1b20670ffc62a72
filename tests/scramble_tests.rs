// Host-side tests for the decode, glitch and digit-scramble text effects.

use folio_core::scramble::{
    scramble_once, Decoder, DigitScrambler, Glitch, ScramblePhase, ScramblerConfig, SCRAMBLE_ALPHABET,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(1234)
}

#[test]
fn decoder_reveals_left_to_right_then_stops() {
    let mut rng = rng();
    let mut d = Decoder::new("DZ-01");
    assert_eq!(d.interval_ms(1000.0), 40.0);

    let mut frames = Vec::new();
    while let Some(text) = d.step(&mut rng) {
        frames.push(text);
    }
    assert_eq!(frames.len(), 26);
    assert!(d.is_finished());
    assert_eq!(frames.last().map(String::as_str), Some("DZ-01"));
    // Tick i keeps the first i characters.
    assert!(frames[3].starts_with("DZ-"));
    for f in &frames {
        assert_eq!(f.chars().count(), 5);
    }
    assert!(d.step(&mut rng).is_none());
}

#[test]
fn scrambled_glyphs_come_from_the_alphabet() {
    let mut rng = rng();
    let out = scramble_once("HELLO WORLD", 1.0, &mut rng);
    assert_eq!(out.chars().nth(5), Some(' '));
    for c in out.chars().filter(|c| *c != ' ') {
        assert!(SCRAMBLE_ALPHABET.contains(&(c as u8)));
    }
    assert_eq!(scramble_once("HELLO", 0.0, &mut rng), "HELLO");
}

#[test]
fn glitch_runs_four_ticks_and_ends_on_original() {
    let mut rng = rng();
    let mut g = Glitch::new("CORE SYSTEM");
    let steps: Vec<String> = std::iter::from_fn(|| g.step(&mut rng)).collect();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[1], "CORE SYSTEM");
    assert_eq!(steps[3], "CORE SYSTEM");
    assert!(g.is_finished());
}

#[test]
fn digit_scrambler_swaps_at_glitch_midpoint() {
    let mut rng = rng();
    let mut s = DigitScrambler::new("AB C", ScramblerConfig::default());
    assert!(s.hover(0.0));
    assert!(!s.hover(5.0));

    // Glyphs are picked at 15, 30 and 45 ms; the first swaps at 15 + 150.
    s.tick(164.0, &mut rng);
    assert_eq!(s.text(), "AB C");
    assert_eq!(s.glyphs().iter().filter(|g| g.glitching).count(), 3);

    let dirty = s.tick(165.0, &mut rng);
    assert_eq!(dirty.len(), 1);
    assert_eq!(s.glyphs().iter().filter(|g| g.is_digit()).count(), 1);
    assert!(matches!(s.phase(), ScramblePhase::Pausing { .. }));
    assert!(!s.glyphs()[2].is_digit());
    assert!(s.glyphs()[2].is_space());
}

#[test]
fn digit_scrambler_restores_and_goes_idle() {
    let mut rng = rng();
    let mut s = DigitScrambler::new("AB C", ScramblerConfig::default());
    s.hover(0.0);
    s.tick(500.0, &mut rng);
    assert_eq!(s.glyphs().iter().filter(|g| g.is_digit()).count(), 3);

    s.tick(10_000.0, &mut rng);
    assert_eq!(s.text(), "AB C");
    assert!(!s.is_running());
    assert_eq!(s.phase(), ScramblePhase::Idle);
    assert!(s.glyphs().iter().all(|g| !g.glitching));
    assert!(s.hover(10_001.0));
}
