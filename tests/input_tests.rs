// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn ndc_covers_the_rect() {
    let rect = ClientRect::new(100.0, 50.0, 200.0, 100.0);
    assert_eq!(client_to_ndc(Vec2::new(100.0, 50.0), rect), Vec2::new(-1.0, 1.0));
    assert_eq!(client_to_ndc(Vec2::new(300.0, 150.0), rect), Vec2::new(1.0, -1.0));
    assert_eq!(client_to_ndc(Vec2::new(200.0, 100.0), rect), Vec2::ZERO);
    // Outside the rect maps outside [-1, 1].
    assert!(client_to_ndc(Vec2::new(400.0, 100.0), rect).x > 1.0);
}

#[test]
fn ndc_of_empty_rect_is_centre() {
    let rect = ClientRect::new(0.0, 0.0, 0.0, 100.0);
    assert_eq!(client_to_ndc(Vec2::new(10.0, 10.0), rect), Vec2::ZERO);
}

#[test]
fn local_is_offset_from_corner() {
    let rect = ClientRect::new(10.0, 20.0, 50.0, 50.0);
    assert_eq!(client_to_local(Vec2::new(15.0, 30.0), rect), Vec2::new(5.0, 10.0));
}

#[test]
fn backing_size_scales_and_floors() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(100.5, 100.5, 1.0), (100, 100));
    assert_eq!(backing_size(0.0, -5.0, 1.0), (1, 1));
    assert_eq!(backing_size(10.0, 10.0, f64::NAN), (10, 10));
}

#[test]
fn cursor_starts_at_anchor_or_centre() {
    let viewport = Vec2::new(1200.0, 800.0);
    assert_eq!(cursor_start(None, viewport), Vec2::new(600.0, 400.0));

    let anchor = ClientRect::new(37.0, 100.0, 370.0, 385.0);
    let start = cursor_start(Some(anchor), viewport);
    assert!((start - Vec2::new(137.0, 300.0)).length() < 1e-3);
}
