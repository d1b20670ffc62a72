use crate::constants::*;
use crate::dom::{self, BrowserStore, StorageKind};
use folio_core::shutter::{ClickOutcome, CoverAction, LinkTarget, Shutter, ShutterPhase};
use folio_core::SHUTTER_FALLBACK_MS;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ShutterView {
    panel: web::HtmlElement,
    model: Shutter,
    store: BrowserStore,
    fallback: Option<i32>,
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let mut store = BrowserStore::open(StorageKind::Session);
    let mut model = Shutter::new();
    let breakpoint = dom::breakpoint();
    let arriving = model.on_load(&mut store, breakpoint);
    if !breakpoint.is_desktop() {
        log::info!("[shutter] narrow viewport, transitions disabled");
        return Ok(());
    }

    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let panel: web::HtmlElement = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    panel.set_class_name(SHUTTER_CLASS);
    body.append_child(&panel)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    if arriving {
        // Start covered without animating, then slide away on the next frame.
        let style = panel.style();
        _ = style.set_property("transition", "none");
        dom::set_class(&panel, SHUTTER_DOWN_CLASS, true);
        panel.get_bounding_client_rect();
        _ = style.set_property("transition", "");
        let lift = panel.clone();
        dom::next_frame(move || dom::set_class(&lift, SHUTTER_DOWN_CLASS, false));
    }

    let view = Rc::new(RefCell::new(ShutterView {
        panel: panel.clone(),
        model,
        store,
        fallback: None,
    }));

    let view_end = view.clone();
    dom::on(panel.as_ref(), "transitionend", move |ev| {
        let is_transform = ev
            .dyn_ref::<web::TransitionEvent>()
            .is_some_and(|te| te.property_name() == "transform");
        if is_transform {
            transition_ended(&view_end);
        }
    })?;

    let links = transition_links(document);
    for link in &links {
        let view = view.clone();
        let anchor = link.clone();
        dom::on(link.as_ref(), "click", move |ev| link_clicked(&view, &anchor, &ev))?;
    }
    log::info!("[shutter] ready, {} links, arriving covered: {}", links.len(), arriving);
    Ok(())
}

fn transition_links(document: &web::Document) -> Vec<web::HtmlAnchorElement> {
    let mut links: Vec<web::HtmlAnchorElement> = dom::query_all(document, SHUTTER_LINK_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into().ok())
        .collect();
    let footer_home = dom::query(document, SHUTTER_FOOTER_HOME_SELECTOR)
        .and_then(|el| el.closest("a").ok().flatten())
        .and_then(|a| a.dyn_into::<web::HtmlAnchorElement>().ok());
    if let Some(a) = footer_home {
        links.push(a);
    }
    links
}

fn resolve(href: &str) -> Option<LinkTarget> {
    let location = web::window()?.location();
    let here = location.href().ok()?;
    let url = web::Url::new_with_base(href, &here).ok()?;
    Some(LinkTarget {
        href: url.href(),
        hash: url.hash(),
        same_origin: location.origin().ok()? == url.origin(),
        same_path: location.pathname().ok()? == url.pathname(),
        same_url: url.href() == here,
    })
}

fn link_clicked(view: &Rc<RefCell<ShutterView>>, anchor: &web::HtmlAnchorElement, ev: &web::Event) {
    let href = anchor.href();
    if href.is_empty() {
        return;
    }
    let Some(target) = resolve(&href) else {
        return;
    };
    let mut v = view.borrow_mut();
    match v.model.click(target, dom::breakpoint(), dom::now_ms()) {
        ClickOutcome::PassThrough => {}
        ClickOutcome::Swallow => ev.prevent_default(),
        ClickOutcome::Cover => {
            ev.prevent_default();
            dom::set_class(&v.panel, SHUTTER_DOWN_CLASS, true);
            let view_fb = view.clone();
            v.fallback = dom::set_timeout(
                move || {
                    let mut v = view_fb.borrow_mut();
                    v.fallback = None;
                    let ShutterView { model, store, .. } = &mut *v;
                    if model.check_fallback(dom::now_ms(), store) {
                        dom::set_class(&v.panel, SHUTTER_DOWN_CLASS, false);
                    }
                },
                SHUTTER_FALLBACK_MS as i32,
            );
        }
    }
}

fn transition_ended(view: &Rc<RefCell<ShutterView>>) {
    let mut v = view.borrow_mut();
    match v.model.phase() {
        ShutterPhase::Covering => {
            if let Some(handle) = v.fallback.take() {
                dom::clear_timeout(handle);
            }
            let ShutterView { model, store, .. } = &mut *v;
            let Some(action) = model.cover_finished(store) else {
                return;
            };
            let Some(window) = web::window() else {
                return;
            };
            let location = window.location();
            match action {
                CoverAction::RevealInPlace { hash } => {
                    _ = location.set_hash(&hash);
                    let panel = v.panel.clone();
                    dom::next_frame(move || dom::set_class(&panel, SHUTTER_DOWN_CLASS, false));
                }
                CoverAction::Navigate { href } => {
                    _ = location.set_href(&href);
                }
                CoverAction::Reload => {
                    _ = location.reload();
                }
            }
        }
        ShutterPhase::Revealing => {
            let ShutterView { model, store, panel, .. } = &mut *v;
            model.reveal_finished(store);
            dom::set_class(panel, SHUTTER_DOWN_CLASS, false);
        }
        ShutterPhase::Idle | ShutterPhase::Covered => {}
    }
}
