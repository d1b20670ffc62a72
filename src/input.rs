// Pure pointer math; kept free of web_sys so host tests can include it.

use glam::Vec2;

/// Rectangle in CSS pixels, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ClientRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Client coordinates to normalised device coordinates of `rect`
/// (x right, y up, \[-1, 1\] inside the rectangle).
#[inline]
pub fn client_to_ndc(client: Vec2, rect: ClientRect) -> Vec2 {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Vec2::ZERO;
    }
    let x = (client.x - rect.left) / rect.width * 2.0 - 1.0;
    let y = -((client.y - rect.top) / rect.height) * 2.0 + 1.0;
    Vec2::new(x, y)
}

/// Client coordinates to a position relative to the rectangle's corner.
#[inline]
pub fn client_to_local(client: Vec2, rect: ClientRect) -> Vec2 {
    Vec2::new(client.x - rect.left, client.y - rect.top)
}

/// Backing-store size for a canvas of `css` size at `dpr`, at least 1×1.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_width.max(0.0) * dpr) as u32;
    let h = (css_height.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}

/// Where the custom cursor starts before the pointer is seen: a point inside
/// the anchor element when there is one, else the viewport centre.
pub fn cursor_start(anchor: Option<ClientRect>, viewport: Vec2) -> Vec2 {
    match anchor {
        Some(r) => Vec2::new(r.left + r.width / 3.7, r.top + (r.height - 185.0)),
        None => viewport * 0.5,
    }
}
