use crate::constants::*;
use crate::dom;
use crate::frame::RafLoop;
use crate::input;
use folio_core::cursor::{CursorConfig, CursorFrame, CursorModel, TransitionStep};
use folio_core::{Breakpoint, SharedFlag, CURSOR_EXPAND_MS, CURSOR_SHRINK_MS};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const TRANSITION_CURVE: &str = "ease-in-out";

struct CursorView {
    el: web::HtmlElement,
    original_width: String,
}

impl CursorView {
    fn place(&self, frame: &CursorFrame) {
        let style = self.el.style();
        _ = style.set_property("left", &format!("{}px", frame.ring.x));
        _ = style.set_property("top", &format!("{}px", frame.ring.y));
        _ = style.set_property(
            "transform",
            &format!("translate(-50%, -50%) scale({})", frame.scale),
        );
    }

    fn animate_width(&self, width: &str, duration_ms: f64) {
        let style = self.el.style();
        _ = style.set_property(
            "transition",
            &format!("width {duration_ms}ms {TRANSITION_CURVE}, height {duration_ms}ms {TRANSITION_CURVE}"),
        );
        _ = style.set_property("width", width);
        _ = style.set_property("height", "auto");
    }

    fn apply(&self, step: &TransitionStep) {
        match step {
            TransitionStep::Expand => self.animate_width("100%", CURSOR_EXPAND_MS),
            TransitionStep::Shrink => self.animate_width(&self.original_width, CURSOR_SHRINK_MS),
            TransitionStep::Navigate(href) => {
                if let Some(w) = web::window() {
                    _ = w.location().set_href(href);
                }
            }
        }
    }
}

pub fn init(document: &web::Document, sphere_hover: SharedFlag) -> anyhow::Result<()> {
    let el: web::HtmlElement = dom::query(document, CURSOR_SELECTOR)
        .ok_or_else(|| anyhow::anyhow!("missing {CURSOR_SELECTOR}"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = el.style().set_property("aspect-ratio", "1");

    let original_width = web::window()
        .and_then(|w| w.get_computed_style(&el).ok().flatten())
        .and_then(|s| s.get_property_value("width").ok())
        .filter(|w| !w.is_empty())
        .unwrap_or_else(|| "50px".to_owned());
    let view = Rc::new(CursorView { el, original_width });

    let model = Rc::new(RefCell::new(CursorModel::new(
        CursorConfig::default(),
        sphere_hover,
        dom::breakpoint(),
        start_position(document),
    )));
    apply_breakpoint(document, &view, &model);

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    {
        let document = document.clone();
        let view = view.clone();
        let model = model.clone();
        dom::on(window.as_ref(), "resize", move |_| {
            apply_breakpoint(&document, &view, &model);
        })?;
    }

    for kind in ["mousemove", "pointermove"] {
        let model = model.clone();
        dom::on(document.as_ref(), kind, move |ev| {
            if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
                let pos = Vec2::new(me.client_x() as f32, me.client_y() as f32);
                model.borrow_mut().pointer_moved(pos);
            }
        })?;
    }

    wire_interactive(document, &model)?;
    wire_transition_links(document, &model)?;

    let last_ts = Cell::new(None::<f64>);
    RafLoop::start(move |ts| {
        let dt = last_ts.replace(Some(ts)).map_or(0.0, |prev| ts - prev);
        let frame = model.borrow_mut().tick(ts, dt);
        let m = model.borrow();
        if m.is_visible() && !m.is_locked() {
            view.place(&frame);
        }
        if let Some(step) = &frame.step {
            view.apply(step);
        }
        true
    })
    .detach();

    log::info!("[cursor] ready");
    Ok(())
}

fn start_position(document: &web::Document) -> Vec2 {
    let anchor = dom::query(document, CURSOR_ANCHOR_SELECTOR).map(|el| dom::client_rect(&el));
    let (w, h) = dom::viewport_size();
    input::cursor_start(anchor, Vec2::new(w as f32, h as f32))
}

// Narrow screens get the native cursor back everywhere.
fn apply_breakpoint(document: &web::Document, view: &CursorView, model: &RefCell<CursorModel>) {
    let breakpoint = dom::breakpoint();
    model.borrow_mut().set_breakpoint(breakpoint);
    let body = document.body();
    let style = view.el.style();
    match breakpoint {
        Breakpoint::Mobile => {
            _ = style.set_property("display", "none");
            if let Some(b) = &body {
                _ = b.style().set_property("cursor", "auto");
            }
            if document.get_element_by_id(CURSOR_MOBILE_STYLE_ID).is_none() {
                if let Ok(fix) = document.create_element("style") {
                    fix.set_id(CURSOR_MOBILE_STYLE_ID);
                    fix.set_text_content(Some("* { cursor: auto !important; }"));
                    if let Some(head) = document.head() {
                        _ = head.append_child(&fix);
                    }
                }
            }
        }
        Breakpoint::Desktop => {
            _ = style.set_property("display", "block");
            _ = style.set_property("opacity", "1");
            if let Some(b) = &body {
                _ = b.style().set_property("cursor", "none");
            }
            if let Some(fix) = document.get_element_by_id(CURSOR_MOBILE_STYLE_ID) {
                fix.remove();
            }
            model.borrow_mut().recenter(start_position(document));
        }
    }
}

fn wire_interactive(document: &web::Document, model: &Rc<RefCell<CursorModel>>) -> anyhow::Result<()> {
    for el in dom::query_all(document, CURSOR_INTERACTIVE_SELECTOR) {
        let target: &web::EventTarget = el.as_ref();
        for (kind, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let model = model.clone();
            dom::on(target, kind, move |_| model.borrow_mut().set_hovered(hovered))?;
        }
        let model_down = model.clone();
        dom::on(target, "pointerdown", move |ev| {
            let primary = ev
                .dyn_ref::<web::PointerEvent>()
                .map_or(true, |pe| pe.button() == 0);
            if primary {
                model_down.borrow_mut().press(true);
            }
        })?;
    }

    // Anywhere else a press only counts while the sphere is hovered.
    let model_down = model.clone();
    dom::on(document.as_ref(), "pointerdown", move |_| {
        model_down.borrow_mut().press(false);
    })?;
    let model_up = model.clone();
    dom::on(document.as_ref(), "pointerup", move |_| {
        model_up.borrow_mut().release();
    })?;
    Ok(())
}

fn wire_transition_links(document: &web::Document, model: &Rc<RefCell<CursorModel>>) -> anyhow::Result<()> {
    for el in dom::query_all(document, CURSOR_TRANSITION_SELECTOR) {
        let model = model.clone();
        let button = el.clone();
        let document = document.clone();
        dom::on(el.as_ref(), "click", move |ev| {
            if !model.borrow().is_visible() {
                return;
            }
            ev.prevent_default();
            ev.stop_propagation();
            let Some(href) = transition_href(&button) else {
                return;
            };
            if model.borrow_mut().begin_transition(&href, dom::now_ms()) {
                if let Some(body) = document.body() {
                    _ = body.style().set_property("pointer-events", "none");
                }
            }
        })?;
    }
    Ok(())
}

// Enclosing anchor first, then `data-href` on the button itself.
fn transition_href(button: &web::Element) -> Option<String> {
    button
        .closest("a")
        .ok()
        .flatten()
        .and_then(|a| a.dyn_into::<web::HtmlAnchorElement>().ok())
        .map(|a| a.href())
        .filter(|h| !h.is_empty())
        .or_else(|| button.get_attribute("data-href"))
}
