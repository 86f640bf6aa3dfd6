use std::rc::Rc;

use leptos::logging::log;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement};

use super::button::CopyButton;
use crate::config::InjectorConfig;

/// Set on a container once it holds a copy button
pub const INJECTED_ATTR: &str = "data-copy-button";

/// Insert a copy button as the first child of every snippet container under `root`.
///
/// Code blocks are visited in document order. Containers that already carry a
/// button are skipped. Returns how many buttons were added.
pub fn inject(root: &Element, config: Rc<InjectorConfig>) -> Result<usize, JsValue> {
    let document = root
        .owner_document()
        .ok_or_else(|| JsValue::from_str("Root element is not attached to a document"))?;
    let blocks = root.query_selector_all(&config.snippet_selector())?;

    let mut added = 0;
    for i in 0..blocks.length() {
        let Some(code) = blocks.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let Some(container) = code.parent_element() else {
            continue;
        };
        if container.has_attribute(INJECTED_ATTR) {
            continue;
        }

        let button = CopyButton::create(&document, code, Rc::clone(&config))?;
        container.prepend_with_node_1(button.element())?;
        container.set_attribute(INJECTED_ATTR, "")?;
        added += 1;
    }

    if added > 0 {
        log!("[snippets] Added {} copy buttons", added);
    }
    Ok(added)
}
