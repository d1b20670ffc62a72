//! Page-transition shutter.
//!
//! A full-screen panel slides down over the page on an internal navigation
//! click, the navigation happens while the page is covered, and the next page
//! starts covered and slides the panel away. The hand-off between the two
//! pages is a session flag.

use crate::constants::SHUTTER_FALLBACK_MS;
use crate::state::Breakpoint;
use crate::storage::KeyValueStore;

pub const TRANSITION_FLAG_KEY: &str = "pageTransition";
pub const TRANSITION_FLAG_VALUE: &str = "1";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShutterPhase {
    Idle,
    Covering,
    Covered,
    Revealing,
}

/// A clicked link, already resolved against the current location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkTarget {
    pub href: String,
    pub hash: String,
    pub same_origin: bool,
    pub same_path: bool,
    pub same_url: bool,
}

impl LinkTarget {
    /// Same document, only scrolling to an anchor.
    pub fn is_same_page_hash(&self) -> bool {
        self.same_path && !self.hash.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Let the browser follow the link.
    PassThrough,
    /// Cancel the default action and do nothing else.
    Swallow,
    /// Cancel the default action and start covering.
    Cover,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoverAction {
    RevealInPlace { hash: String },
    Navigate { href: String },
    Reload,
}

#[derive(Debug)]
pub struct Shutter {
    phase: ShutterPhase,
    pending: Option<LinkTarget>,
    cover_started_ms: f64,
}

impl Default for Shutter {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutter {
    pub fn new() -> Self {
        Self {
            phase: ShutterPhase::Idle,
            pending: None,
            cover_started_ms: 0.0,
        }
    }

    #[inline]
    pub fn phase(&self) -> ShutterPhase {
        self.phase
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.phase != ShutterPhase::Idle
    }

    /// Reads the hand-off flag once at page load. Returns `true` when the page
    /// should start covered and play the reveal.
    pub fn on_load(&mut self, store: &mut dyn KeyValueStore, breakpoint: Breakpoint) -> bool {
        let flagged = store.get(TRANSITION_FLAG_KEY).as_deref() == Some(TRANSITION_FLAG_VALUE);
        if !breakpoint.is_desktop() {
            clear_flag(store);
            return false;
        }
        if !flagged {
            return false;
        }
        log::debug!("[shutter] arriving covered");
        self.phase = ShutterPhase::Revealing;
        true
    }

    pub fn click(&mut self, target: LinkTarget, breakpoint: Breakpoint, now_ms: f64) -> ClickOutcome {
        if !breakpoint.is_desktop() || !target.same_origin {
            return ClickOutcome::PassThrough;
        }
        if self.is_animating() {
            return ClickOutcome::Swallow;
        }
        log::debug!("[shutter] covering for {}", target.href);
        self.phase = ShutterPhase::Covering;
        self.pending = Some(target);
        self.cover_started_ms = now_ms;
        ClickOutcome::Cover
    }

    /// The cover animation ended; decides what happens under the shutter.
    pub fn cover_finished(&mut self, store: &mut dyn KeyValueStore) -> Option<CoverAction> {
        if self.phase != ShutterPhase::Covering {
            return None;
        }
        let target = self.pending.take()?;
        if target.is_same_page_hash() {
            self.phase = ShutterPhase::Revealing;
            return Some(CoverAction::RevealInPlace { hash: target.hash });
        }
        if let Err(e) = store.set(TRANSITION_FLAG_KEY, TRANSITION_FLAG_VALUE) {
            log::warn!("[shutter] could not store transition flag: {e}");
        }
        self.phase = ShutterPhase::Covered;
        if target.same_url {
            Some(CoverAction::Reload)
        } else {
            Some(CoverAction::Navigate { href: target.href })
        }
    }

    /// The reveal animation ended; the shutter is idle and the flag is gone.
    pub fn reveal_finished(&mut self, store: &mut dyn KeyValueStore) {
        if self.phase != ShutterPhase::Revealing {
            return;
        }
        self.phase = ShutterPhase::Idle;
        clear_flag(store);
    }

    /// Aborts a cover whose animation never reported completion. Returns
    /// `true` when it fired and the panel should be lifted.
    pub fn check_fallback(&mut self, now_ms: f64, store: &mut dyn KeyValueStore) -> bool {
        if self.phase != ShutterPhase::Covering || now_ms - self.cover_started_ms < SHUTTER_FALLBACK_MS {
            return false;
        }
        log::warn!("[shutter] cover did not finish, resetting");
        self.phase = ShutterPhase::Idle;
        self.pending = None;
        clear_flag(store);
        true
    }
}

fn clear_flag(store: &mut dyn KeyValueStore) {
    if let Err(e) = store.remove(TRANSITION_FLAG_KEY) {
        log::warn!("[shutter] could not clear transition flag: {e}");
    }
}
