//! wasm-bindgen boundary for the Vivify engine.
//!
//! The host forwards its postMessage payloads to `dispatch` verbatim and
//! drives `tick` from requestAnimationFrame while `is_playing()` holds; the
//! returned outputs carry DOM mutations to apply and events to post back.

use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vivify_core::{Command, Engine, Outputs, StyleMap, ROOT_STYLE};

#[wasm_bindgen]
pub struct Vivify {
    core: Engine,
}

impl Default for Vivify {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Vivify {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Vivify {
        console_error_panic_hook::set_once();
        Vivify {
            core: Engine::new(),
        }
    }

    /// Handle one inbound `{ type, data }` message. Returns Outputs JSON:
    /// `{ changes: [{element, attrs}], events: [{type, data}] }`.
    #[wasm_bindgen]
    pub fn dispatch(&mut self, msg: JsValue) -> Result<JsValue, JsError> {
        let cmd: Command =
            swb::from_value(msg).map_err(|e| JsError::new(&format!("message error: {e}")))?;
        let out: &Outputs = self.core.apply(cmd);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Advance playback for one animation-frame callback. `now_ms` is the
    /// host clock (e.g. the requestAnimationFrame timestamp).
    #[wasm_bindgen]
    pub fn tick(&mut self, now_ms: f64) -> Result<JsValue, JsError> {
        let out: &Outputs = self.core.tick(now_ms);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Whether the host should schedule another tick.
    #[wasm_bindgen(js_name = is_playing)]
    pub fn is_playing(&self) -> bool {
        self.core.is_playing()
    }

    /// Markup of the loaded schematic, or undefined before a load.
    #[wasm_bindgen(js_name = schematic_markup)]
    pub fn schematic_markup(&self) -> Option<String> {
        self.core.schematic().map(|s| s.markup().to_string())
    }

    /// Inline style the host must set on the injected SVG root so the
    /// schematic fills its container.
    #[wasm_bindgen(js_name = root_style)]
    pub fn root_style() -> String {
        ROOT_STYLE.to_string()
    }
}

/// Merge a nested `style` attribute map from a change into an element's
/// current inline-style string. Declarations already present are overwritten
/// by property-name prefix, new ones are appended; everything else in
/// `existing` is preserved. The host calls this instead of replacing the
/// attribute wholesale.
#[wasm_bindgen]
pub fn merge_style(existing: &str, updates: JsValue) -> Result<String, JsError> {
    let updates: StyleMap =
        swb::from_value(updates).map_err(|e| JsError::new(&format!("style map error: {e}")))?;
    Ok(vivify_core::merge_style(existing, &updates))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
