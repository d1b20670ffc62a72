//! Text scramble effects.
//!
//! * [`Decoder`] resolves a string out of random noise, left to right.
//! * [`Glitch`] flickers a label between a partly scrambled copy and itself.
//! * [`DigitScrambler`] turns the letters of a title into digits one by one,
//!   pauses, and turns them back.
//!
//! Randomness is injected so tests can seed it.

use rand::Rng;
use smallvec::SmallVec;

pub const SCRAMBLE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const DECODE_EXTRA_TICKS: usize = 20;
pub const GLITCH_TICK_MS: f64 = 50.0;
pub const GLITCH_TICKS: u8 = 4;
pub const GLITCH_FRACTION: f64 = 0.3; // share of non-space characters replaced

fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    SCRAMBLE_ALPHABET[rng.gen_range(0..SCRAMBLE_ALPHABET.len())] as char
}

/// Replaces roughly `fraction` of the non-space characters with random glyphs.
pub fn scramble_once<R: Rng + ?Sized>(text: &str, fraction: f64, rng: &mut R) -> String {
    text.chars()
        .map(|c| {
            if c != ' ' && rng.gen_bool(fraction.clamp(0.0, 1.0)) {
                random_glyph(rng)
            } else {
                c
            }
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct Decoder {
    target: Vec<char>,
    tick: usize,
    finished: bool,
}

impl Decoder {
    pub fn new(text: &str) -> Self {
        Self {
            target: text.chars().collect(),
            tick: 0,
            finished: false,
        }
    }

    /// Timer period that makes the whole decode last `duration_ms`.
    pub fn interval_ms(&self, duration_ms: f64) -> f64 {
        duration_ms / (self.target.len() + DECODE_EXTRA_TICKS) as f64
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Text to show for the next tick, `None` once the final text was shown.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.finished {
            return None;
        }
        let revealed = self.tick;
        self.tick += 1;
        if self.tick > self.target.len() + DECODE_EXTRA_TICKS {
            self.finished = true;
            return Some(self.target.iter().collect());
        }
        Some(
            self.target
                .iter()
                .enumerate()
                .map(|(i, &c)| if i < revealed { c } else { random_glyph(rng) })
                .collect(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct Glitch {
    original: String,
    ticks: u8,
}

impl Glitch {
    pub fn new(text: &str) -> Self {
        Self {
            original: text.to_owned(),
            ticks: 0,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.ticks >= GLITCH_TICKS
    }

    /// Even ticks scramble, odd ticks restore; the last tick is always the
    /// original text.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.is_finished() {
            return None;
        }
        let tick = self.ticks;
        self.ticks += 1;
        if tick % 2 == 0 && !self.is_finished() {
            Some(scramble_once(&self.original, GLITCH_FRACTION, rng))
        } else {
            Some(self.original.clone())
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScramblerConfig {
    pub replace_interval_ms: f64,
    pub glitch_ms: f64,
    pub pause_ms: f64,
    pub reverse_interval_ms: f64,
}

impl Default for ScramblerConfig {
    fn default() -> Self {
        Self {
            replace_interval_ms: 15.0,
            glitch_ms: 300.0,
            pause_ms: 800.0,
            reverse_interval_ms: 15.0,
        }
    }
}

/// One character slot of a [`DigitScrambler`] title.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub original: char,
    pub current: char,
    pub glitching: bool,
    swap: Option<(f64, char)>,
    unglitch_at_ms: Option<f64>,
}

impl Glyph {
    fn new(c: char) -> Self {
        Self {
            original: c,
            current: c,
            glitching: false,
            swap: None,
            unglitch_at_ms: None,
        }
    }

    #[inline]
    pub fn is_space(&self) -> bool {
        self.original.is_whitespace()
    }

    /// Shows a digit that replaced a letter.
    #[inline]
    pub fn is_digit(&self) -> bool {
        self.current.is_ascii_digit() && self.current != self.original
    }

    fn can_scramble(&self) -> bool {
        !self.is_space() && !self.current.is_ascii_digit() && self.swap.is_none()
    }

    fn can_restore(&self) -> bool {
        self.is_digit() && self.swap.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScramblePhase {
    Idle,
    Scrambling { next_ms: f64 },
    Pausing { until_ms: f64 },
    Reversing { next_ms: f64 },
}

#[derive(Clone, Debug)]
pub struct DigitScrambler {
    config: ScramblerConfig,
    glyphs: Vec<Glyph>,
    phase: ScramblePhase,
}

impl DigitScrambler {
    pub fn new(text: &str, config: ScramblerConfig) -> Self {
        Self {
            config,
            glyphs: text.chars().map(Glyph::new).collect(),
            phase: ScramblePhase::Idle,
        }
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn phase(&self) -> ScramblePhase {
        self.phase
    }

    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.current).collect()
    }

    /// True while any phase or per-glyph glitch is still pending.
    pub fn is_running(&self) -> bool {
        self.phase != ScramblePhase::Idle
            || self.glyphs.iter().any(|g| g.swap.is_some() || g.glitching)
    }

    /// Pointer entered the card. Ignored while a cycle is in progress.
    pub fn hover(&mut self, now_ms: f64) -> bool {
        if self.phase != ScramblePhase::Idle {
            return false;
        }
        self.phase = ScramblePhase::Scrambling {
            next_ms: now_ms + self.config.replace_interval_ms,
        };
        true
    }

    /// Runs every step due by `now_ms`; returns the indices of glyphs whose
    /// text or glitch state changed.
    pub fn tick<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> SmallVec<[usize; 8]> {
        let mut dirty = SmallVec::new();
        while let Some(at) = self.due_at().filter(|at| *at <= now_ms) {
            self.resolve(at, &mut dirty);
            self.phase = self.step(at, rng, &mut dirty);
        }
        self.resolve(now_ms, &mut dirty);
        dirty
    }

    fn due_at(&self) -> Option<f64> {
        match self.phase {
            ScramblePhase::Idle => None,
            ScramblePhase::Scrambling { next_ms } | ScramblePhase::Reversing { next_ms } => Some(next_ms),
            ScramblePhase::Pausing { until_ms } => Some(until_ms),
        }
    }

    fn step<R: Rng + ?Sized>(&mut self, at: f64, rng: &mut R, dirty: &mut SmallVec<[usize; 8]>) -> ScramblePhase {
        match self.phase {
            ScramblePhase::Idle => ScramblePhase::Idle,
            ScramblePhase::Scrambling { .. } => {
                let digit = char::from(b'0' + rng.gen_range(0..10u8));
                if self.begin_swap(at, |g| g.can_scramble(), |_| digit, rng, dirty) {
                    ScramblePhase::Scrambling {
                        next_ms: at + self.config.replace_interval_ms,
                    }
                } else {
                    ScramblePhase::Pausing {
                        until_ms: at + self.config.pause_ms,
                    }
                }
            }
            ScramblePhase::Pausing { .. } => ScramblePhase::Reversing {
                next_ms: at + self.config.reverse_interval_ms,
            },
            ScramblePhase::Reversing { .. } => {
                if self.begin_swap(at, |g| g.can_restore(), |g| g.original, rng, dirty) {
                    ScramblePhase::Reversing {
                        next_ms: at + self.config.reverse_interval_ms,
                    }
                } else {
                    ScramblePhase::Idle
                }
            }
        }
    }

    // Picks a random eligible glyph, starts its glitch, and schedules the
    // character swap halfway through it.
    fn begin_swap<R: Rng + ?Sized>(
        &mut self,
        at: f64,
        eligible: impl Fn(&Glyph) -> bool,
        replacement: impl Fn(&Glyph) -> char,
        rng: &mut R,
        dirty: &mut SmallVec<[usize; 8]>,
    ) -> bool {
        let candidates: SmallVec<[usize; 32]> = self
            .glyphs
            .iter()
            .enumerate()
            .filter(|(_, g)| eligible(g))
            .map(|(i, _)| i)
            .collect();
        if candidates.is_empty() {
            return false;
        }
        let index = candidates[rng.gen_range(0..candidates.len())];
        let half = self.config.glitch_ms / 2.0;
        let glyph = &mut self.glyphs[index];
        glyph.glitching = true;
        glyph.swap = Some((at + half, replacement(glyph)));
        glyph.unglitch_at_ms = Some(at + self.config.glitch_ms);
        mark(dirty, index);
        true
    }

    fn resolve(&mut self, now_ms: f64, dirty: &mut SmallVec<[usize; 8]>) {
        for (i, glyph) in self.glyphs.iter_mut().enumerate() {
            if let Some((at, to)) = glyph.swap {
                if at <= now_ms {
                    glyph.current = to;
                    glyph.swap = None;
                    mark(dirty, i);
                }
            }
            if glyph.unglitch_at_ms.is_some_and(|at| at <= now_ms) {
                glyph.glitching = false;
                glyph.unglitch_at_ms = None;
                mark(dirty, i);
            }
        }
    }
}

#[inline]
fn mark(dirty: &mut SmallVec<[usize; 8]>, index: usize) {
    if !dirty.contains(&index) {
        dirty.push(index);
    }
}
