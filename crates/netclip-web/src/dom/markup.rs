use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement};

use crate::config::InjectorConfig;

/// Set on a code block once its markup has been revealed
pub const REVEALED_ATTR: &str = "data-markup-revealed";

/// Show each code block's inner HTML as literal text.
///
/// Every element matching `code_selector` under `root` is rewritten once;
/// marked elements are left alone so a second pass doesn't escape twice.
/// Returns how many elements were rewritten.
pub fn reveal_markup(root: &Element, config: &InjectorConfig) -> Result<usize, JsValue> {
    let blocks = root.query_selector_all(&config.code_selector)?;

    let mut revealed = 0;
    for i in 0..blocks.length() {
        let Some(block) = blocks.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        if block.has_attribute(REVEALED_ATTR) {
            continue;
        }
        let markup = block.inner_html();
        block.set_inner_text(&markup);
        block.set_attribute(REVEALED_ATTR, "")?;
        revealed += 1;
    }
    Ok(revealed)
}
