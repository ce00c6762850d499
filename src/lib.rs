#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod app;
mod constants;
mod content;
mod dom;
mod fetch;
mod pointer;
mod pulse;
mod transform;
mod views;

use constants::MOUNT_ROOT_ID;

fn mount_root(document: &web::Document) -> anyhow::Result<web::Node> {
    if let Some(el) = document.get_element_by_id(MOUNT_ROOT_ID) {
        return Ok(el.unchecked_into());
    }
    log::warn!("[app] missing #{}, mounting into <body>", MOUNT_ROOT_ID);
    document
        .body()
        .map(|b| b.unchecked_into())
        .ok_or_else(|| anyhow::anyhow!("no <body>"))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("antigravity-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = mount_root(&document)?;
    let app = app::App::start(root)?;
    // The app lives for the page lifetime.
    std::mem::forget(app);
    Ok(())
}
