use crate::slot::CallbackSlot;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameSlot = CallbackSlot<Closure<dyn FnMut(f64)>>;

/// `requestAnimationFrame` loop with a stored handle.
///
/// The callback gets the frame timestamp in milliseconds and returns whether
/// to keep going. `cancel` must not be called from inside the callback; return
/// `false` there instead. A loop that stops itself frees its callback, so a
/// detached loop leaves nothing behind once it is done.
pub struct RafLoop {
    tick: FrameSlot,
    handle: Rc<Cell<Option<i32>>>,
    alive: Rc<Cell<bool>>,
}

impl RafLoop {
    pub fn start(mut frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let tick = FrameSlot::empty();
        let handle = Rc::new(Cell::new(None));
        let alive = Rc::new(Cell::new(true));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        let alive_tick = alive.clone();
        tick.fill(Closure::wrap(Box::new(move |ts: f64| {
            handle_tick.set(None);
            if !alive_tick.get() {
                return;
            }
            if !frame(ts) {
                alive_tick.set(false);
                // Drops this closure once it returns.
                tick_clone.release();
                return;
            }
            tick_clone.with(|cb| handle_tick.set(request(cb)));
        }) as Box<dyn FnMut(f64)>));

        tick.with(|cb| handle.set(request(cb)));
        Self { tick, handle, alive }
    }

    /// Keeps the loop running until its callback returns `false`.
    pub fn detach(self) {
        std::mem::forget(self);
    }

    /// Stops the loop and releases the callback with everything it captured.
    pub fn cancel(&self) {
        self.alive.set(false);
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.release();
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request(cb: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}
