//! Copy-to-clipboard buttons for netclip snippet blocks.
//!
//! Server side, [`components::Snippet`] renders the `.snippet > pre` markup.
//! In the browser (`hydrate` feature) the host calls `initialize(root)` once
//! the page is ready; every snippet under `root` gets a copy button.

pub mod components;
pub mod config;
pub mod state;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
mod client {
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::Element;

    use crate::config::InjectorConfig;
    use crate::dom;

    fn run(root: &Element, config: InjectorConfig) -> Result<usize, JsValue> {
        console_error_panic_hook::set_once();

        let config = Rc::new(config);
        let added = dom::inject(root, Rc::clone(&config))?;
        if config.reveal_markup {
            dom::reveal_markup(root, &config)?;
        }
        Ok(added)
    }

    /// Add copy buttons under `root` with the default config.
    /// Returns the number of buttons added.
    #[wasm_bindgen]
    pub fn initialize(root: &Element) -> Result<usize, JsValue> {
        run(root, InjectorConfig::default())
    }

    /// Like `initialize`, with a JSON config object (see `InjectorConfig`).
    #[wasm_bindgen(js_name = initializeWithConfig)]
    pub fn initialize_with_config(root: &Element, config_json: &str) -> Result<usize, JsValue> {
        let config = InjectorConfig::from_json(config_json).map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
        run(root, config)
    }

    /// Remove the copy buttons under `root` and release their handlers.
    /// Containers can be initialized again afterwards.
    #[wasm_bindgen]
    pub fn teardown(root: &Element) -> usize {
        dom::release(root)
    }

    /// Run `initialize` on `document.body`. Does nothing without a document.
    #[wasm_bindgen(js_name = initializePage)]
    pub fn initialize_page() -> Result<usize, JsValue> {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return Ok(0);
        };
        initialize(&body)
    }
}

#[cfg(feature = "hydrate")]
pub use client::*;
