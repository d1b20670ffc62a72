//! Scroll reveals on top of `IntersectionObserver`.
//!
//! Each observed element gets a numeric key in `data-reveal-key`; the
//! registry decides when a key fires, this module only applies styles.

use crate::constants::*;
use crate::dom;
use folio_core::reveal::{parse_level, stagger_delay, Reveal, RevealRegistry, RevealSpec, RevealStyle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

struct Reveals {
    registry: RevealRegistry<u32>,
    next_key: u32,
}

impl Reveals {
    fn key_of(el: &web::Element) -> Option<u32> {
        el.get_attribute(REVEAL_KEY_ATTR)?.parse().ok()
    }

    fn register(&mut self, el: &web::Element, spec: RevealSpec) -> bool {
        if Self::key_of(el).is_some() {
            return false;
        }
        let key = self.next_key;
        if !self.registry.observe(key, spec) {
            return false;
        }
        self.next_key += 1;
        _ = el.set_attribute(REVEAL_KEY_ATTR, &key.to_string());
        true
    }
}

/// One observer per threshold, all feeding the same registry.
struct Observers {
    state: Rc<RefCell<Reveals>>,
    by_threshold: Vec<(f32, web::IntersectionObserver)>,
}

impl Observers {
    fn observe(&mut self, el: &web::Element, spec: RevealSpec) -> anyhow::Result<()> {
        if !self.state.borrow_mut().register(el, spec) {
            return Ok(());
        }
        prepare(el, &spec);
        self.observer_for(spec.threshold)?.observe(el);
        Ok(())
    }

    fn observer_for(&mut self, threshold: f32) -> anyhow::Result<&web::IntersectionObserver> {
        let idx = match self.by_threshold.iter().position(|(t, _)| *t == threshold) {
            Some(i) => i,
            None => {
                let observer = create_observer(self.state.clone(), threshold)?;
                self.by_threshold.push((threshold, observer));
                self.by_threshold.len() - 1
            }
        };
        Ok(&self.by_threshold[idx].1)
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let mut observers = Observers {
        state: Rc::new(RefCell::new(Reveals {
            registry: RevealRegistry::new(),
            next_key: 0,
        })),
        by_threshold: Vec::new(),
    };

    for selector in REVEAL_SELECTORS {
        let staggered = selector.contains("grid") || *selector == ".brief-item";
        for (i, el) in dom::query_all(document, selector).iter().enumerate() {
            let mut spec = RevealSpec::default();
            if staggered {
                spec = spec.with_delay(stagger_delay(i));
            }
            observers.observe(el, spec)?;
        }
    }

    for grid in dom::query_all(document, REVEAL_STAGGER_GRIDS) {
        let children = grid.children();
        for i in 0..children.length() {
            if let Some(child) = children.item(i) {
                let spec = RevealSpec::default().with_delay(stagger_delay(i as usize));
                observers.observe(&child, spec)?;
            }
        }
    }

    for el in dom::query_all(document, REVEAL_FADE_SELECTOR) {
        let spec = RevealSpec::default()
            .with_threshold(REVEAL_FADE_THRESHOLD)
            .with_style(RevealStyle::Fade {
                offset_px: REVEAL_FADE_OFFSET_PX,
            });
        observers.observe(&el, spec)?;
    }

    for el in dom::query_all(document, REVEAL_GAUGE_SELECTOR) {
        let Some(level) = el.get_attribute("data-level").as_deref().and_then(parse_level) else {
            log::warn!("[reveal] gauge without a usable data-level");
            continue;
        };
        let spec = RevealSpec::default()
            .with_threshold(REVEAL_GAUGE_THRESHOLD)
            .with_delay(REVEAL_GAUGE_DELAY_MS)
            .with_style(RevealStyle::Gauge { level });
        observers.observe(&el, spec)?;
    }

    let pending = observers.state.borrow().registry.pending_len();
    log::info!(
        "[reveal] watching {} elements with {} observers",
        pending,
        observers.by_threshold.len()
    );
    Ok(())
}

// Initial inline state before the element comes into view.
fn prepare(el: &web::Element, spec: &RevealSpec) {
    match spec.style {
        RevealStyle::Class => {
            if spec.delay_ms > 0.0 {
                dom::set_style(el, "transition-delay", &format!("{}ms", spec.delay_ms));
            }
        }
        RevealStyle::Fade { offset_px } => {
            dom::set_style(el, "opacity", "0");
            dom::set_style(el, "transform", &format!("translateY({offset_px}px)"));
            dom::set_style(el, "transition", "opacity 0.6s ease, transform 0.6s ease");
        }
        RevealStyle::Gauge { .. } => {}
    }
}

fn apply(el: &web::Element, reveal: &Reveal<u32>) {
    match reveal.style {
        RevealStyle::Class => dom::set_class(el, REVEAL_CLASS, true),
        RevealStyle::Fade { .. } => {
            dom::set_style(el, "opacity", "1");
            dom::set_style(el, "transform", "translateY(0)");
        }
        RevealStyle::Gauge { level } => {
            let el = el.clone();
            dom::set_timeout(
                move || dom::set_style(&el, "width", &format!("{level}%")),
                reveal.delay_ms as i32,
            );
        }
    }
}

fn create_observer(state: Rc<RefCell<Reveals>>, threshold: f32) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(key) = Reveals::key_of(&target) else {
                    continue;
                };
                let fired = state
                    .borrow_mut()
                    .registry
                    .intersect(&key, entry.intersection_ratio() as f32);
                if let Some(reveal) = fired {
                    observer.unobserve(&target);
                    apply(&target, &reveal);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold as f64));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();
    Ok(observer)
}
