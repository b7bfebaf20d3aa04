//! Binding to the host-injected `VR` namespace.
//!
//! The host exposes `VR.set_pole_offset(record)` and `VR.save_config()` as
//! promise-returning functions on the page; this is the whole surface the
//! panel consumes.

use pole_core::{BridgeError, PoleBridge, PoleOffset};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = VR, js_name = set_pole_offset)]
    fn vr_set_pole_offset(record: JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = VR, js_name = save_config)]
    fn vr_save_config() -> js_sys::Promise;
}

/// Bridge backed by the injected `VR` object.
///
/// Calls are detached: the promise resolves on the microtask queue and
/// rejections land in the console log, so a slow host never blocks the
/// click handler.
pub struct WebBridge;

impl PoleBridge for WebBridge {
    fn apply_offset(&self, offset: &PoleOffset) -> Result<(), BridgeError> {
        let record =
            JsValue::from_serde(offset).map_err(|e| BridgeError::Apply(e.to_string()))?;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(vr_set_pole_offset(record)).await {
                log::error!("[bridge] set_pole_offset rejected: {e:?}");
            }
        });
        Ok(())
    }

    fn save_config(&self) -> Result<(), BridgeError> {
        spawn_local(async {
            if let Err(e) = JsFuture::from(vr_save_config()).await {
                log::error!("[bridge] save_config rejected: {e:?}");
            }
        });
        Ok(())
    }
}
