//! Scroll-driven page chrome: navbar auto-hide, reading progress, uptime.

use crate::constants::NAV_HIDE_MIN_SCROLL;

/// Hides the navbar while scrolling down and shows it again on the way up.
///
/// Scroll events only mark an update as pending; the caller applies it on the
/// next animation frame, so bursts of events cost one update per frame.
#[derive(Debug, Default)]
pub struct NavAutoHide {
    last_y: f64,
    hidden: bool,
    pending: bool,
}

impl NavAutoHide {
    pub fn new(initial_y: f64) -> Self {
        Self {
            last_y: initial_y,
            hidden: false,
            pending: false,
        }
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns `true` when a frame must be requested for this event.
    pub fn on_scroll(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Applies the latest scroll offset. Returns the new hidden state when it
    /// changed.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        self.pending = false;
        let hidden = if scroll_y > NAV_HIDE_MIN_SCROLL {
            if scroll_y > self.last_y {
                true
            } else if scroll_y < self.last_y {
                false
            } else {
                self.hidden
            }
        } else {
            false
        };
        self.last_y = scroll_y;
        (hidden != self.hidden).then(|| {
            self.hidden = hidden;
            hidden
        })
    }
}

/// Reading progress in percent; 0 when the document does not scroll.
pub fn progress_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0) * 100.0
}

/// `HH:MM:SS` for an elapsed duration; hours keep counting past 99.
pub fn format_uptime(elapsed_ms: f64) -> String {
    let secs = if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
        (elapsed_ms / 1000.0).floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
