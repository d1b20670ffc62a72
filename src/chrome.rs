//! Page chrome that follows the scroll position: the auto-hiding navbar, the
//! reading progress bar and the uptime clock.

use crate::constants::*;
use crate::dom::{self, Interval};
use folio_core::scroll::{format_uptime, progress_percent, NavAutoHide};
use folio_core::UPTIME_REFRESH_MS;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn init_navbar(document: &web::Document) -> anyhow::Result<()> {
    let nav = dom::query(document, NAV_SELECTOR).ok_or_else(|| anyhow::anyhow!("missing {NAV_SELECTOR}"))?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let model = Rc::new(RefCell::new(NavAutoHide::new(dom::scroll_y())));

    dom::on(window.as_ref(), "scroll", move |_| {
        if !model.borrow_mut().on_scroll() {
            return;
        }
        let model = model.clone();
        let nav = nav.clone();
        dom::next_frame(move || {
            if let Some(hidden) = model.borrow_mut().update(dom::scroll_y()) {
                dom::set_class(&nav, NAV_HIDDEN_CLASS, hidden);
            }
        });
    })?;
    Ok(())
}

pub fn init_progress(document: &web::Document) -> anyhow::Result<()> {
    let bar = dom::query(document, PROGRESS_SELECTOR)
        .ok_or_else(|| anyhow::anyhow!("missing {PROGRESS_SELECTOR}"))?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let update = move || {
        let (_, viewport_h) = dom::viewport_size();
        let pct = progress_percent(dom::scroll_y(), dom::scroll_height(), viewport_h);
        dom::set_style(&bar, "width", &format!("{pct}%"));
    };
    update();
    let update = Rc::new(update);
    for kind in ["scroll", "resize"] {
        let update = update.clone();
        dom::on(window.as_ref(), kind, move |_| update())?;
    }
    Ok(())
}

pub fn init_uptime(document: &web::Document) -> anyhow::Result<()> {
    let Some(el) = document.get_element_by_id(UPTIME_ID) else {
        return Ok(());
    };
    let started = dom::now_ms();
    let refresh = move || el.set_text_content(Some(&format_uptime(dom::now_ms() - started)));
    refresh();
    let interval = Interval::new(refresh, UPTIME_REFRESH_MS)?;
    // Ticks for the life of the page.
    std::mem::forget(interval);
    Ok(())
}
