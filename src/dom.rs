use crate::input::{backing_size, ClientRect};
use folio_core::{FolioError, KeyValueStore};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps.
#[inline]
pub fn now_ms() -> f64 {
    instant::now()
}

pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

#[inline]
pub fn viewport_width() -> f64 {
    viewport_size().0
}

#[inline]
pub fn breakpoint() -> folio_core::Breakpoint {
    folio_core::Breakpoint::for_width(viewport_width())
}

pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_height() -> f64 {
    window_document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(e) => {
            log::warn!("[dom] bad selector {selector}: {:?}", e);
            Vec::new()
        }
    }
}

fn node_list_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document.get_element_by_id(id).and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

pub fn client_rect(el: &web::Element) -> ClientRect {
    let r = el.get_bounding_client_rect();
    ClientRect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

/// Sizes `canvas` to cover the viewport, backing store scaled by the device
/// pixel ratio. Returns the backing size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (css_w, css_h) = viewport_size();
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let (w, h) = backing_size(css_w, css_h, dpr);
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
        let style = canvas.style();
        _ = style.set_property("width", &format!("{css_w}px"));
        _ = style.set_property("height", &format!("{css_h}px"));
    }
    (w, h)
}

/// Attaches a listener for the life of the page.
pub fn on(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("add {kind} listener: {:?}", e))?;
    closure.forget();
    Ok(())
}

/// Event listener that is removed again when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        Self::with_options(target, kind, false, None, handler)
    }

    pub fn with_options(
        target: &web::EventTarget,
        kind: &'static str,
        capture: bool,
        passive: Option<bool>,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_capture(capture);
        if let Some(passive) = passive {
            opts.set_passive(passive);
        }
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| anyhow::anyhow!("add {kind} listener: {:?}", e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            capture,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self.target.remove_event_listener_with_callback_and_bool(
            self.kind,
            self.closure.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// One-shot timer. Returns the handle for `clear_timeout`.
pub fn set_timeout(handler: impl FnOnce() + 'static, ms: i32) -> Option<i32> {
    let window = web::window()?;
    let f = Closure::once_into_js(handler);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(f.unchecked_ref(), ms)
        .ok()
}

/// Runs `handler` once on the next animation frame.
pub fn next_frame(handler: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let f = Closure::once_into_js(move |_ts: f64| handler());
    _ = window.request_animation_frame(f.unchecked_ref());
}

pub fn clear_timeout(handle: i32) {
    if let Some(w) = web::window() {
        w.clear_timeout_with_handle(handle);
    }
}

/// Repeating timer, cleared when dropped.
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(handler: impl FnMut() + 'static, ms: i32) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), ms)
            .map_err(|e| anyhow::anyhow!("setInterval: {:?}", e))?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum StorageKind {
    Session,
    Local,
}

/// Session or local storage behind the model-side store trait. Private
/// browsing modes may deny storage; reads then see nothing and writes fail.
pub struct BrowserStore {
    storage: Option<web::Storage>,
}

impl BrowserStore {
    pub fn open(kind: StorageKind) -> Self {
        let storage = web::window().and_then(|w| match kind {
            StorageKind::Session => w.session_storage().ok().flatten(),
            StorageKind::Local => w.local_storage().ok().flatten(),
        });
        if storage.is_none() {
            log::warn!("[dom] {:?} storage unavailable", kind);
        }
        Self { storage }
    }

    fn storage(&self) -> folio_core::Result<&web::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| FolioError::Storage("unavailable".into()))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> folio_core::Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| FolioError::Storage(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) -> folio_core::Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| FolioError::Storage(format!("{:?}", e)))
    }
}
