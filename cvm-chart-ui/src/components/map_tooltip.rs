//! Floating tooltip naming the hovered country.

use crate::state::UiState;
use cvm_view::layout::TOOLTIP_ID;
use dioxus::prelude::*;

/// Absolutely positioned at the page coordinates set by the map view.
#[component]
pub fn MapTooltip() -> Element {
    let ui = use_context::<UiState>();
    let tooltip = use_memo(move || ui.hover_scene.read().tooltip().clone());
    let tooltip = tooltip();
    let visibility = if tooltip.visible { "visible" } else { "hidden" };
    let style = format!(
        "position: absolute; visibility: {}; top: {}px; left: {}px; \
         padding: 4px 8px; background: rgba(255, 255, 255, 0.9); border: 1px solid #999; \
         border-radius: 4px; font-size: 12px; pointer-events: none;",
        visibility, tooltip.top, tooltip.left
    );

    rsx! {
        div {
            id: "{TOOLTIP_ID}",
            style: "{style}",
            "{tooltip.text}"
        }
    }
}
