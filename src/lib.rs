#![cfg(target_arch = "wasm32")]
use folio_core::SharedFlag;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod chrome;
mod coin;
mod constants;
mod cursor;
mod decor;
mod dom;
mod frame;
mod input;
mod menu;
mod particles;
mod reveal;
mod scramble;
mod shutter;
mod slot;
mod sphere;
mod theme;

// Effects are independent; one that cannot start is logged and skipped.
fn start_effect(name: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::info!("[{name}] not started: {:?}", e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Set by the sphere while the pointer is over it, read by the cursor.
    let sphere_hover = SharedFlag::new(false);

    start_effect("theme", theme::init(&document));
    start_effect("shutter", shutter::init(&document));
    start_effect("menu", menu::init(&document));
    start_effect("cursor", cursor::init(&document, sphere_hover.clone()));
    start_effect("sphere", sphere::init(&document, sphere_hover));
    start_effect("particles", particles::init(&document));
    start_effect("reveal", reveal::init(&document));
    start_effect("scramble", scramble::init(&document));
    start_effect("navbar", chrome::init_navbar(&document));
    start_effect("progress", chrome::init_progress(&document));
    start_effect("uptime", chrome::init_uptime(&document));
    start_effect("coin", coin::init(&document));
    start_effect("intro", decor::init_intro(&document));
    start_effect("scan-line", decor::init_scan_line(&document));
    start_effect("parallax", decor::init_parallax(&document));

    log::info!("folio-web ready");
    Ok(())
}
