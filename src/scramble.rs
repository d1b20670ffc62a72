use crate::constants::*;
use crate::dom;
use crate::frame::RafLoop;
use folio_core::scramble::{Decoder, DigitScrambler, Glitch, Glyph, ScramblerConfig, GLITCH_TICK_MS};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let decoded = init_decoders(document);
    let glitched = init_glitches(document)?;
    let cards = init_scramblers(document)?;
    log::info!(
        "[scramble] {} decoders, {} glitch labels, {} cards",
        decoded,
        glitched,
        cards
    );
    Ok(())
}

// Codes decode once on load.
fn init_decoders(document: &web::Document) -> usize {
    let mut count = 0;
    for el in dom::query_all(document, DECODE_SELECTOR) {
        let text = el.text_content().unwrap_or_default();
        if !text.contains(DECODE_MARKER) {
            continue;
        }
        let decoder = Decoder::new(&text);
        let interval = decoder.interval_ms(DECODE_DURATION_MS).max(1.0) as i32;
        decode_tick(el, decoder, interval);
        count += 1;
    }
    count
}

fn decode_tick(el: web::Element, mut decoder: Decoder, interval: i32) {
    let Some(text) = decoder.step(&mut rand::thread_rng()) else {
        return;
    };
    el.set_text_content(Some(&text));
    if !decoder.is_finished() {
        dom::set_timeout(move || decode_tick(el, decoder, interval), interval);
    }
}

fn init_glitches(document: &web::Document) -> anyhow::Result<usize> {
    let labels = dom::query_all(document, GLITCH_SELECTOR);
    for el in &labels {
        let original = el.text_content().unwrap_or_default();
        let running = Rc::new(Cell::new(false));
        let target = el.clone();
        dom::on(el.as_ref(), "mouseenter", move |_| {
            if running.replace(true) {
                return;
            }
            glitch_tick(target.clone(), Glitch::new(&original), running.clone());
        })?;
    }
    Ok(labels.len())
}

fn glitch_tick(el: web::Element, mut glitch: Glitch, running: Rc<Cell<bool>>) {
    match glitch.step(&mut rand::thread_rng()) {
        Some(text) => {
            el.set_text_content(Some(&text));
            dom::set_timeout(move || glitch_tick(el, glitch, running), GLITCH_TICK_MS as i32);
        }
        None => {
            el.set_text_content(Some(glitch.original()));
            running.set(false);
        }
    }
}

struct Card {
    scrambler: DigitScrambler,
    spans: Vec<web::Element>,
}

impl Card {
    fn render(&self, index: usize) {
        let (Some(glyph), Some(span)) = (self.scrambler.glyphs().get(index), self.spans.get(index)) else {
            return;
        };
        render_glyph(span, glyph);
    }
}

fn render_glyph(span: &web::Element, glyph: &Glyph) {
    span.set_text_content(Some(&glyph.current.to_string()));
    dom::set_class(span, GLITCHING_CLASS, glyph.glitching);
    dom::set_class(span, IS_DIGIT_CLASS, glyph.is_digit());
}

fn init_scramblers(document: &web::Document) -> anyhow::Result<usize> {
    let mut count = 0;
    for card_el in dom::query_all(document, SCRAMBLE_CARD_SELECTOR) {
        let Ok(Some(title)) = card_el.query_selector(SCRAMBLE_TITLE_SELECTOR) else {
            continue;
        };
        let text = title.text_content().unwrap_or_default();
        let spans = wrap_chars(document, &title, &text)?;
        let card = Rc::new(RefCell::new(Card {
            scrambler: DigitScrambler::new(&text, ScramblerConfig::default()),
            spans,
        }));
        dom::on(card_el.as_ref(), "mouseenter", move |_| {
            if !card.borrow_mut().scrambler.hover(dom::now_ms()) {
                return;
            }
            let card = card.clone();
            RafLoop::start(move |ts| {
                let mut c = card.borrow_mut();
                let dirty = c.scrambler.tick(ts, &mut rand::thread_rng());
                for i in dirty {
                    c.render(i);
                }
                c.scrambler.is_running()
            })
            .detach();
        })?;
        count += 1;
    }
    Ok(count)
}

// One span per character so each can glitch on its own.
fn wrap_chars(document: &web::Document, title: &web::Element, text: &str) -> anyhow::Result<Vec<web::Element>> {
    title.set_text_content(None);
    let mut spans = Vec::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        let span = document
            .create_element("span")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        span.set_class_name(if c == ' ' { "char space" } else { "char" });
        _ = span.set_attribute("data-index", &i.to_string());
        _ = span.set_attribute("data-original", &c.to_string());
        span.set_text_content(Some(&c.to_string()));
        title
            .append_child(&span)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        spans.push(span);
    }
    Ok(spans)
}
