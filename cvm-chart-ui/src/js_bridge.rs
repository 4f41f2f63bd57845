//! DOM lookups through `web-sys`.

use cvm_view::layout::{parse_px, ContainerSize};
use wasm_bindgen::JsValue;

/// Rendered size of the element with the given id, read from its computed
/// style. `None` when the element does not exist or has no pixel size.
pub fn container_size(id: &str) -> Option<ContainerSize> {
    let window = web_sys::window()?;
    let element = window.document()?.get_element_by_id(id)?;
    let style = match window.get_computed_style(&element) {
        Ok(style) => style?,
        Err(e) => {
            log::warn!("js_bridge: no computed style for #{}: {}", id, describe(&e));
            return None;
        }
    };
    let width = parse_px(&style.get_property_value("width").ok()?)?;
    let height = parse_px(&style.get_property_value("height").ok()?)?;
    Some(ContainerSize { width, height })
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
