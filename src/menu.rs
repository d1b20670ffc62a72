use crate::constants::*;
use crate::dom::{self, BrowserStore, StorageKind};
use crate::frame::RafLoop;
use folio_core::menu::{record_departure, MenuHandoff, MenuStep};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct Overlay {
    root: web::Element,
    links: Vec<web::Element>,
    document: web::Document,
}

impl Overlay {
    fn label(link: &web::Element) -> Option<(web::Element, String)> {
        let p = link.query_selector("p").ok().flatten()?;
        let text = p.text_content().unwrap_or_default().trim().to_owned();
        Some((p, text))
    }

    /// Label of the entry currently shown as active.
    fn current_page(&self) -> Option<String> {
        self.links.iter().find_map(|link| {
            let (p, text) = Self::label(link)?;
            (!p.class_list().contains(MENU_INACTIVE_CLASS)).then_some(text)
        })
    }

    fn highlight(&self, name: &str) {
        for link in &self.links {
            let Some((p, text)) = Self::label(link) else {
                continue;
            };
            let active = text == name;
            dom::set_class(&p, MENU_INACTIVE_CLASS, !active);
            if let Ok(Some(icon)) = link.query_selector("div") {
                dom::set_style(&icon, "opacity", if active { "1" } else { "0" });
            }
        }
    }

    fn apply(&self, step: &MenuStep) {
        match step {
            MenuStep::OpenInstantly => {
                dom::set_class(&self.root, MENU_OPEN_CLASS, true);
                dom::set_class(&self.root, MENU_INSTANT_CLASS, true);
                if let Some(html) = self.document.document_element() {
                    dom::set_class(&html, MENU_HTML_TRANSITION_CLASS, false);
                }
                if let Some(el) = self.root.dyn_ref::<web::HtmlElement>() {
                    _ = el.offset_width();
                }
                dom::set_style(&self.root, "transition", "");
            }
            MenuStep::Highlight(name) => self.highlight(name),
            MenuStep::Close => dom::set_class(&self.root, MENU_OPEN_CLASS, false),
            MenuStep::FinishSetup => dom::set_class(&self.root, MENU_INSTANT_CLASS, false),
        }
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let root = document
        .get_element_by_id(MENU_OVERLAY_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{MENU_OVERLAY_ID}"))?;
    let overlay = Overlay {
        root,
        links: dom::query_all(document, MENU_LINK_SELECTOR),
        document: document.clone(),
    };

    let mut store = BrowserStore::open(StorageKind::Session);
    if let Some((mut handoff, steps)) =
        MenuHandoff::arrive(&mut store, overlay.current_page(), dom::now_ms())
    {
        for step in &steps {
            overlay.apply(step);
        }
        let overlay = overlay.clone();
        RafLoop::start(move |ts| {
            for step in handoff.poll(ts) {
                overlay.apply(&step);
            }
            !handoff.is_done()
        })
        .detach();
    }

    let trigger = MENU_OPEN_SELECTORS
        .iter()
        .find_map(|sel| dom::query(document, sel));
    if let Some(trigger) = trigger {
        let root = overlay.root.clone();
        let is_anchor = trigger.tag_name().eq_ignore_ascii_case("a");
        dom::on(trigger.as_ref(), "click", move |ev| {
            if is_anchor {
                ev.prevent_default();
            }
            dom::set_class(&root, MENU_OPEN_CLASS, true);
        })?;
    }

    if let Some(close) = document.get_element_by_id(MENU_CLOSE_ID) {
        let root = overlay.root.clone();
        dom::on(close.as_ref(), "click", move |_| {
            dom::set_class(&root, MENU_OPEN_CLASS, false);
        })?;
    }

    for link in &overlay.links {
        let overlay = overlay.clone();
        dom::on(link.as_ref(), "click", move |_| {
            let mut store = BrowserStore::open(StorageKind::Session);
            record_departure(&mut store, overlay.current_page().as_deref());
        })?;
    }

    log::info!("[menu] ready, {} overlay links", overlay.links.len());
    Ok(())
}
