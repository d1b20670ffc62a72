//! Custom cursor: a dot that tracks the pointer and a ring that trails it.

use crate::constants::*;
use crate::shared::SharedFlag;
use crate::state::Breakpoint;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    /// Share of the dot-to-ring gap that remains after one reference frame.
    /// `0.0` pins the ring to the dot.
    pub lag: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self { lag: 0.85 }
    }
}

impl CursorConfig {
    pub fn zero_lag() -> Self {
        Self { lag: 0.0 }
    }
}

/// Page-link transition cues, each emitted once by [`CursorModel::tick`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionStep {
    Expand,
    Shrink,
    Navigate(String),
}

#[derive(Clone, Debug)]
struct Transition {
    started_ms: f64,
    href: String,
    emitted: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorFrame {
    pub dot: Vec2,
    pub ring: Vec2,
    pub scale: f32,
    pub step: Option<TransitionStep>,
}

pub struct CursorModel {
    config: CursorConfig,
    breakpoint: Breakpoint,
    sphere_hover: SharedFlag,
    target: Vec2,
    ring: Vec2,
    hovered: bool,
    pressed: bool,
    seen_pointer: bool,
    transition: Option<Transition>,
}

impl CursorModel {
    pub fn new(config: CursorConfig, sphere_hover: SharedFlag, breakpoint: Breakpoint, start: Vec2) -> Self {
        Self {
            config,
            breakpoint,
            sphere_hover,
            target: start,
            ring: start,
            hovered: false,
            pressed: false,
            seen_pointer: false,
            transition: None,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.breakpoint.is_desktop()
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.transition.is_some()
    }

    #[inline]
    fn accepts_input(&self) -> bool {
        self.is_visible() && !self.is_locked()
    }

    pub fn has_seen_pointer(&self) -> bool {
        self.seen_pointer
    }

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.breakpoint = breakpoint;
    }

    /// Moves both dot and ring to `pos` until the pointer is first seen.
    pub fn recenter(&mut self, pos: Vec2) {
        if self.seen_pointer || !self.is_visible() {
            return;
        }
        self.target = pos;
        self.ring = pos;
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        if !self.accepts_input() {
            return;
        }
        self.seen_pointer = true;
        self.target = pos;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        if self.accepts_input() {
            self.hovered = hovered;
        }
    }

    /// Primary button down, either over an interactive element or anywhere
    /// while the sphere is hovered.
    pub fn press(&mut self, on_interactive: bool) {
        if self.accepts_input() && (on_interactive || self.sphere_hover.get()) {
            self.pressed = true;
        }
    }

    pub fn release(&mut self) {
        if self.accepts_input() {
            self.pressed = false;
        }
    }

    pub fn scale(&self) -> f32 {
        if self.pressed {
            CURSOR_PRESSED_SCALE
        } else if self.hovered || self.sphere_hover.get() {
            CURSOR_HOVER_SCALE
        } else {
            1.0
        }
    }

    /// Freezes the cursor and starts the expand/shrink sequence that ends in
    /// navigating to `href`. Returns `false` on narrow screens or when a
    /// transition is already running.
    pub fn begin_transition(&mut self, href: &str, now_ms: f64) -> bool {
        if !self.accepts_input() || href.is_empty() {
            return false;
        }
        log::debug!("[cursor] page transition to {href}");
        self.target = self.ring;
        self.transition = Some(Transition {
            started_ms: now_ms,
            href: href.to_owned(),
            emitted: 0,
        });
        true
    }

    pub fn tick(&mut self, now_ms: f64, dt_ms: f64) -> CursorFrame {
        let step = self.transition.as_mut().and_then(|t| {
            let elapsed = now_ms - t.started_ms;
            let due = if elapsed >= CURSOR_EXPAND_MS + CURSOR_SHRINK_MS {
                3
            } else if elapsed >= CURSOR_EXPAND_MS {
                2
            } else {
                1
            };
            if t.emitted >= due {
                return None;
            }
            t.emitted += 1;
            Some(match t.emitted {
                1 => TransitionStep::Expand,
                2 => TransitionStep::Shrink,
                _ => TransitionStep::Navigate(t.href.clone()),
            })
        });

        if !self.is_locked() {
            let frames = (dt_ms / REFERENCE_FRAME_MS).max(0.0) as f32;
            let keep = self.config.lag.clamp(0.0, 0.999).powf(frames);
            self.ring = self.target + (self.ring - self.target) * keep;
        }

        CursorFrame {
            dot: self.target,
            ring: self.ring,
            scale: self.scale(),
            step,
        }
    }
}
