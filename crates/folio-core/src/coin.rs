//! Back-to-top flip coin.

use crate::constants::{COIN_FLIP_MS, COIN_SETTLE_MS, COIN_SHOW_SCROLL};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoinStep {
    /// Flip animation over; switch to settling.
    Settle,
    /// Settling over; back to rest.
    Rest,
}

#[derive(Debug, Default)]
pub struct FlipCoin {
    visible: bool,
    flip_started_ms: Option<f64>,
    settle_started_ms: Option<f64>,
}

impl FlipCoin {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_flipping(&self) -> bool {
        self.flip_started_ms.is_some()
    }

    /// Returns the new visibility when it changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
        let visible = scroll_y > COIN_SHOW_SCROLL;
        (visible != self.visible).then(|| {
            self.visible = visible;
            visible
        })
    }

    /// Starts a flip; the caller scrolls to the top when this returns `true`.
    pub fn click(&mut self, now_ms: f64) -> bool {
        if self.is_flipping() {
            return false;
        }
        self.flip_started_ms = Some(now_ms);
        true
    }

    pub fn tick(&mut self, now_ms: f64) -> SmallVec<[CoinStep; 2]> {
        let mut steps = SmallVec::new();
        if let Some(start) = self.flip_started_ms {
            if now_ms - start >= COIN_FLIP_MS {
                self.flip_started_ms = None;
                self.settle_started_ms = Some(start + COIN_FLIP_MS);
                steps.push(CoinStep::Settle);
            }
        }
        if let Some(start) = self.settle_started_ms {
            if now_ms - start >= COIN_SETTLE_MS {
                self.settle_started_ms = None;
                steps.push(CoinStep::Rest);
            }
        }
        steps
    }

    pub fn is_idle(&self) -> bool {
        self.flip_started_ms.is_none() && self.settle_started_ms.is_none()
    }
}
