//! Decoration switched on by `data-*` hooks on `<body>`: intro classes, the
//! periodic scan line and parallax on fine pointers.

use crate::constants::*;
use crate::dom;
use folio_core::decor::{hero_parallax, pointer_parallax, IntroSequence, ScanLine, ScanLineConfig, ScanStep};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn body(document: &web::Document) -> anyhow::Result<web::Element> {
    document
        .body()
        .map(Into::into)
        .ok_or_else(|| anyhow::anyhow!("no body"))
}

// Milliseconds until `due`, for `set_timeout`.
fn wait_until(due: f64) -> i32 {
    (due - dom::now_ms()).max(0.0).ceil() as i32
}

pub fn init_intro(document: &web::Document) -> anyhow::Result<()> {
    let body = body(document)?;
    let Some(page) = body.get_attribute(INTRO_ATTR) else {
        return Ok(());
    };
    let intro = IntroSequence::for_page(&page, dom::now_ms())
        .ok_or_else(|| anyhow::anyhow!("unknown intro {page:?}"))?;
    run_intro(body, intro);
    Ok(())
}

fn run_intro(body: web::Element, mut intro: IntroSequence) {
    for class in intro.poll(dom::now_ms()) {
        dom::set_class(&body, class, true);
    }
    if let Some(due) = intro.next_due_ms() {
        dom::set_timeout(move || run_intro(body, intro), wait_until(due));
    }
}

pub fn init_scan_line(document: &web::Document) -> anyhow::Result<()> {
    let body = body(document)?;
    let Some(page) = body.get_attribute(SCAN_LINE_ATTR) else {
        return Ok(());
    };
    let config = ScanLineConfig::for_page(&page).ok_or_else(|| anyhow::anyhow!("unknown scan line {page:?}"))?;
    let scan = ScanLine::new(config, dom::now_ms())?;

    let line = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    line.set_class_name(SCAN_LINE_CLASS);
    body.append_child(&line).map_err(|e| anyhow::anyhow!("{:?}", e))?;

    log::info!("[scan-line] {page} sweep every {}s", config.period_ms / 1000.0);
    run_scan_line(line, scan);
    Ok(())
}

// Timers chain for the life of the page.
fn run_scan_line(line: web::Element, mut scan: ScanLine) {
    for step in scan.poll(dom::now_ms()) {
        apply_scan_step(&line, step, scan.config());
    }
    let wait = wait_until(scan.next_due_ms());
    dom::set_timeout(move || run_scan_line(line, scan), wait);
}

fn apply_scan_step(line: &web::Element, step: ScanStep, config: &ScanLineConfig) {
    match step {
        ScanStep::Reset => {
            dom::set_style(line, "transition", "none");
            dom::set_style(line, "top", "0");
            dom::set_style(line, "opacity", "0");
            // Flush styles so the sweep animates from the top.
            if let Some(html) = line.dyn_ref::<web::HtmlElement>() {
                _ = html.offset_height();
            }
        }
        ScanStep::Sweep => {
            let transition = format!(
                "top {}ms linear, opacity {}ms ease",
                config.sweep_ms, config.fade_in_ms
            );
            dom::set_style(line, "transition", &transition);
            dom::set_style(line, "opacity", "1");
            dom::set_style(line, "top", "100vh");
        }
        ScanStep::FadeOut => dom::set_style(line, "opacity", "0"),
    }
}

fn coarse_pointer() -> bool {
    web::window()
        .and_then(|w| w.match_media(COARSE_POINTER_QUERY).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn init_parallax(document: &web::Document) -> anyhow::Result<()> {
    if coarse_pointer() {
        log::info!("[parallax] coarse pointer, skipped");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let blocks = dom::query_all(document, PARALLAX_DECORATION_SELECTOR);
    if !blocks.is_empty() {
        for block in &blocks {
            dom::set_style(block, "transition", PARALLAX_TRANSITION);
        }
        dom::on(document.as_ref(), "mousemove", move |ev: web::Event| {
            let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let client = Vec2::new(me.client_x() as f32, me.client_y() as f32);
            let (w, h) = dom::viewport_size();
            let viewport = Vec2::new(w as f32, h as f32);
            for (i, block) in blocks.iter().enumerate() {
                let offset = pointer_parallax(client, viewport, i);
                dom::set_style(block, "transform", &format!("translate({}px, {}px)", offset.x, offset.y));
            }
        })?;
    }

    let Some(hero) = dom::query(document, PARALLAX_HERO_SELECTOR) else {
        return Ok(());
    };
    let layers = Rc::new(dom::query_all(document, PARALLAX_HERO_LAYERS));
    if layers.is_empty() {
        return Ok(());
    }
    let pending = Rc::new(Cell::new(false));
    dom::on(window.as_ref(), "scroll", move |_| {
        if pending.replace(true) {
            return;
        }
        let pending = pending.clone();
        let hero = hero.clone();
        let layers = layers.clone();
        dom::next_frame(move || {
            pending.set(false);
            let height = hero
                .dyn_ref::<web::HtmlElement>()
                .map(|h| h.offset_height() as f32)
                .unwrap_or(0.0);
            let scroll = dom::scroll_y() as f32;
            for (i, layer) in layers.iter().enumerate() {
                if let Some(dy) = hero_parallax(scroll, height, i) {
                    dom::set_style(layer, "transform", &format!("translateY({dy}px)"));
                }
            }
        });
    })?;
    Ok(())
}
