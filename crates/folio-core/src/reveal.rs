//! One-shot scroll reveals.
//!
//! Keys are whatever the caller uses to identify observed elements (the web
//! side uses a per-element index). A key reveals at most once; afterwards it
//! is dropped from the pending set and further intersections are ignored.

use crate::constants::{REVEAL_STAGGER_MS, REVEAL_THRESHOLD};
use fnv::{FnvHashMap, FnvHashSet};
use std::hash::Hash;

// Observers report ratios rounded by layout; accept a hair under the threshold.
const RATIO_TOLERANCE: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealStyle {
    /// Add the `reveal` class and let CSS animate.
    Class,
    /// Inline fade and slide up from `offset_px`.
    Fade { offset_px: f32 },
    /// Fill a gauge to `level` percent.
    Gauge { level: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub threshold: f32,
    pub style: RevealStyle,
    pub delay_ms: f64,
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            style: RevealStyle::Class,
            delay_ms: 0.0,
        }
    }
}

impl RevealSpec {
    pub fn with_style(mut self, style: RevealStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }
}

/// What to do for a key that just became visible.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal<K> {
    pub key: K,
    pub style: RevealStyle,
    pub delay_ms: f64,
}

#[derive(Debug)]
pub struct RevealRegistry<K> {
    pending: FnvHashMap<K, RevealSpec>,
    revealed: FnvHashSet<K>,
}

impl<K> Default for RevealRegistry<K> {
    fn default() -> Self {
        Self {
            pending: FnvHashMap::default(),
            revealed: FnvHashSet::default(),
        }
    }
}

impl<K: Eq + Hash + Clone> RevealRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts watching `key`. Returns `false` when it is already pending or
    /// has been revealed before.
    pub fn observe(&mut self, key: K, spec: RevealSpec) -> bool {
        if self.revealed.contains(&key) || self.pending.contains_key(&key) {
            return false;
        }
        self.pending.insert(key, spec);
        true
    }

    /// Reports the visible fraction of `key`. Yields a reveal the first time
    /// the fraction reaches the key's threshold, and never again.
    pub fn intersect(&mut self, key: &K, ratio: f32) -> Option<Reveal<K>> {
        let spec = self.pending.get(key)?;
        if !ratio.is_finite() || ratio + RATIO_TOLERANCE < spec.threshold || ratio <= 0.0 {
            return None;
        }
        let spec = self.pending.remove(key)?;
        self.revealed.insert(key.clone());
        Some(Reveal {
            key: key.clone(),
            style: spec.style,
            delay_ms: spec.delay_ms,
        })
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn revealed_len(&self) -> usize {
        self.revealed.len()
    }
}

/// Transition delay for the `index`-th item of a staggered group.
#[inline]
pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * REVEAL_STAGGER_MS
}

/// Parses a gauge `data-level` attribute ("72", "72%", " 40.5 ") into a
/// percentage clamped to \[0, 100\].
pub fn parse_level(raw: &str) -> Option<f32> {
    let trimmed = raw.trim().trim_end_matches('%').trim();
    let level: f32 = trimmed.parse().ok()?;
    level.is_finite().then(|| level.clamp(0.0, 100.0))
}
