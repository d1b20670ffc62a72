//! Overlay-menu hand-off across page loads.
//!
//! Following a link from the overlay menu makes the next page open with the
//! overlay already shown and the previous page highlighted, then close it and
//! move the highlight to the page that was actually loaded.

use crate::constants::{MENU_CLOSE_DELAY_MS, MENU_RESTORE_DELAY_MS};
use crate::storage::KeyValueStore;
use smallvec::SmallVec;

pub const MENU_FLAG_KEY: &str = "menuTransition";
pub const MENU_FLAG_VALUE: &str = "true";
pub const ORIGIN_PAGE_KEY: &str = "originPage";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuStep {
    /// Show the overlay without its opening transition.
    OpenInstantly,
    /// Highlight the entry with this label.
    Highlight(String),
    /// Start the closing transition.
    Close,
    /// Remove the instant-setup state.
    FinishSetup,
}

/// Called when an overlay link is clicked on the page being left.
pub fn record_departure(store: &mut dyn KeyValueStore, current_page: Option<&str>) {
    if let Err(e) = store.set(MENU_FLAG_KEY, MENU_FLAG_VALUE) {
        log::warn!("[menu] could not store hand-off flag: {e}");
    }
    if let Some(page) = current_page {
        if let Err(e) = store.set(ORIGIN_PAGE_KEY, page) {
            log::warn!("[menu] could not store origin page: {e}");
        }
    }
}

#[derive(Debug)]
pub struct MenuHandoff {
    arrived_ms: f64,
    current_page: Option<String>,
    closed: bool,
    restored: bool,
}

impl MenuHandoff {
    /// Consumes the hand-off flag. Returns `None` when this load did not come
    /// from the overlay menu, otherwise the model plus the steps to apply now.
    pub fn arrive(
        store: &mut dyn KeyValueStore,
        current_page: Option<String>,
        now_ms: f64,
    ) -> Option<(Self, SmallVec<[MenuStep; 2]>)> {
        if store.get(MENU_FLAG_KEY).as_deref() != Some(MENU_FLAG_VALUE) {
            return None;
        }
        if let Err(e) = store.remove(MENU_FLAG_KEY) {
            log::warn!("[menu] could not clear hand-off flag: {e}");
        }
        let mut steps = SmallVec::new();
        steps.push(MenuStep::OpenInstantly);
        if let Some(origin) = store.get(ORIGIN_PAGE_KEY) {
            if let Err(e) = store.remove(ORIGIN_PAGE_KEY) {
                log::warn!("[menu] could not clear origin page: {e}");
            }
            steps.push(MenuStep::Highlight(origin));
        }
        log::debug!("[menu] arrived from overlay menu");
        Some((
            Self {
                arrived_ms: now_ms,
                current_page,
                closed: false,
                restored: false,
            },
            steps,
        ))
    }

    /// Steps that became due by `now_ms`; each is returned once.
    pub fn poll(&mut self, now_ms: f64) -> SmallVec<[MenuStep; 2]> {
        let elapsed = now_ms - self.arrived_ms;
        let mut steps = SmallVec::new();
        if !self.closed && elapsed >= MENU_CLOSE_DELAY_MS {
            self.closed = true;
            steps.push(MenuStep::Close);
        }
        if !self.restored && elapsed >= MENU_RESTORE_DELAY_MS {
            self.restored = true;
            steps.push(MenuStep::FinishSetup);
            if let Some(page) = self.current_page.take() {
                steps.push(MenuStep::Highlight(page));
            }
        }
        steps
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.closed && self.restored
    }
}
