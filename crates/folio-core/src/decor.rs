//! Ambient decoration: intro body classes, the periodic scan line and the
//! parallax offsets of decorative blocks.

use crate::constants::*;
use crate::error::{FolioError, Result};
use glam::Vec2;
use smallvec::SmallVec;

/// Body classes added at fixed delays after load.
#[derive(Debug)]
pub struct IntroSequence {
    started_ms: f64,
    steps: &'static [(f64, &'static str)],
    next: usize,
}

impl IntroSequence {
    /// Project pages: `animate` starts the entrance, `ready` ends it.
    pub fn project(now_ms: f64) -> Self {
        Self::new(INTRO_PROJECT_STEPS, now_ms)
    }

    /// Work page: a single `loaded` class right away.
    pub fn work(now_ms: f64) -> Self {
        Self::new(INTRO_WORK_STEPS, now_ms)
    }

    pub fn for_page(name: &str, now_ms: f64) -> Option<Self> {
        match name.trim() {
            "project" => Some(Self::project(now_ms)),
            "work" => Some(Self::work(now_ms)),
            _ => None,
        }
    }

    fn new(steps: &'static [(f64, &'static str)], now_ms: f64) -> Self {
        Self {
            started_ms: now_ms,
            steps,
            next: 0,
        }
    }

    /// Classes that became due by `now_ms`, in order; each is returned once.
    pub fn poll(&mut self, now_ms: f64) -> SmallVec<[&'static str; 2]> {
        let mut due = SmallVec::new();
        while let Some(&(delay, class)) = self.steps.get(self.next) {
            if now_ms - self.started_ms < delay {
                break;
            }
            due.push(class);
            self.next += 1;
        }
        due
    }

    pub fn next_due_ms(&self) -> Option<f64> {
        self.steps.get(self.next).map(|&(delay, _)| self.started_ms + delay)
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.next >= self.steps.len()
    }
}

/// Timing of one scan-line sweep, relative to the start of its cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanLineConfig {
    pub first_run_ms: f64,
    pub sweep_at_ms: f64,
    pub sweep_ms: f64,
    pub fade_in_ms: f64,
    pub fade_out_at_ms: f64,
    pub period_ms: f64,
}

impl ScanLineConfig {
    /// Slow sweep that starts with the page.
    pub fn work() -> Self {
        Self {
            first_run_ms: 0.0,
            sweep_at_ms: 50.0,
            sweep_ms: 4000.0,
            fade_in_ms: 300.0,
            fade_out_at_ms: 4000.0,
            period_ms: SCAN_LINE_PERIOD_MS,
        }
    }

    /// Quicker sweep, one second after load.
    pub fn about() -> Self {
        Self {
            first_run_ms: 1000.0,
            sweep_at_ms: 100.0,
            sweep_ms: 2000.0,
            fade_in_ms: 500.0,
            fade_out_at_ms: 1600.0,
            period_ms: SCAN_LINE_PERIOD_MS,
        }
    }

    pub fn for_page(name: &str) -> Option<Self> {
        match name.trim() {
            "work" => Some(Self::work()),
            "about" => Some(Self::about()),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let times = [
            self.first_run_ms,
            self.sweep_at_ms,
            self.sweep_ms,
            self.fade_in_ms,
            self.fade_out_at_ms,
            self.period_ms,
        ];
        if times.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return Err(FolioError::InvalidConfig("scan line timings must be finite and non-negative"));
        }
        if self.fade_out_at_ms < self.sweep_at_ms {
            return Err(FolioError::InvalidConfig("scan line fades out before it sweeps"));
        }
        if self.period_ms <= self.fade_out_at_ms {
            return Err(FolioError::InvalidConfig("scan line period shorter than one sweep"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStep {
    /// Jump to the top, hidden, with transitions off.
    Reset,
    /// Turn transitions on, fade in and move to the bottom.
    Sweep,
    /// Fade out where it stands.
    FadeOut,
}

const SCAN_STEPS: [ScanStep; 3] = [ScanStep::Reset, ScanStep::Sweep, ScanStep::FadeOut];

/// A line that sweeps down the viewport once per period.
#[derive(Debug)]
pub struct ScanLine {
    config: ScanLineConfig,
    first_ms: f64,
    cycle: u64,
    phase: usize,
}

impl ScanLine {
    pub fn new(config: ScanLineConfig, now_ms: f64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            first_ms: now_ms + config.first_run_ms,
            cycle: 0,
            phase: 0,
        })
    }

    #[inline]
    pub fn config(&self) -> &ScanLineConfig {
        &self.config
    }

    fn cycle_start(&self, cycle: u64) -> f64 {
        self.first_ms + cycle as f64 * self.config.period_ms
    }

    fn offset(&self, phase: usize) -> f64 {
        match phase {
            0 => 0.0,
            1 => self.config.sweep_at_ms,
            _ => self.config.fade_out_at_ms,
        }
    }

    /// Steps due by `now_ms`, in order. After a long stall the sweeps that
    /// were missed entirely are skipped and the latest cycle starts fresh.
    pub fn poll(&mut self, now_ms: f64) -> SmallVec<[ScanStep; 3]> {
        let mut steps = SmallVec::new();
        let since_first = now_ms - self.first_ms;
        if since_first < 0.0 {
            return steps;
        }
        let latest = (since_first / self.config.period_ms).floor() as u64;
        if latest > self.cycle {
            self.cycle = latest;
            self.phase = 0;
        }
        let start = self.cycle_start(self.cycle);
        while self.phase < SCAN_STEPS.len() && now_ms >= start + self.offset(self.phase) {
            steps.push(SCAN_STEPS[self.phase]);
            self.phase += 1;
        }
        steps
    }

    /// When the next step falls due.
    pub fn next_due_ms(&self) -> f64 {
        if self.phase < SCAN_STEPS.len() {
            self.cycle_start(self.cycle) + self.offset(self.phase)
        } else {
            self.cycle_start(self.cycle + 1)
        }
    }
}

/// Pointer parallax of the `index`-th decorative block, in px. Deeper blocks
/// move further.
pub fn pointer_parallax(client: Vec2, viewport: Vec2, index: usize) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    let centred = client / viewport - Vec2::splat(0.5);
    centred * (index as f32 + 1.0) * PARALLAX_POINTER_SPEED
}

/// Vertical drift of the `index`-th hero layer, or `None` once the hero has
/// scrolled out of view and the layers can stay where they are.
pub fn hero_parallax(scroll_y: f32, hero_height: f32, index: usize) -> Option<f32> {
    if scroll_y >= hero_height {
        return None;
    }
    let rate = PARALLAX_HERO_BASE_RATE + PARALLAX_HERO_RATE_STEP * index as f32;
    Some(scroll_y.max(0.0) * rate)
}
