#![cfg(target_arch = "wasm32")]
mod bridge;
mod dom;
mod panel;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pole-panel starting");

    if let Err(e) = panel::init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}
