//! The world map svg with hover and click handlers on the countries.

use super::svg::{static_node, PathAttrs};
use crate::state::UiState;
use cvm_view::layout::{MAP_HEIGHT, MAP_WIDTH};
use cvm_view::map_view::is_country_path;
use cvm_view::surface::{Element as SceneElement, PathElement};
use cvm_view::Layer;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapPanelProps {
    /// Called with the id of a clicked country.
    pub on_select: EventHandler<String>,
}

/// Renders the map layer. Hover on any country updates the tooltip through
/// the map view; clicks on keyed countries are handed to `on_select`.
#[component]
pub fn MapPanel(props: MapPanelProps) -> Element {
    let ui = use_context::<UiState>();
    // hover writes go to `hover_scene`, so this only changes on redraw or selection
    let content = use_memo(move || ui.map_scene.read().layer(Layer::Map).cloned());
    let on_select = props.on_select;
    let map_id = Layer::Map.dom_id();

    let Some(content) = content() else {
        return rsx! {
            svg { id: "{map_id}", width: "{MAP_WIDTH}", height: "{MAP_HEIGHT}" }
        };
    };
    let (width, height) = content
        .frame
        .map_or((MAP_WIDTH, MAP_HEIGHT), |f| (f.width, f.height));

    rsx! {
        svg {
            id: "{map_id}",
            width: "{width}",
            height: "{height}",
            {content.elements.iter().map(|element| match element {
                SceneElement::Path(p) if is_country_path(p) => country_node(p, ui, on_select),
                other => static_node(other),
            })}
        }
    }
}

fn country_node(shape: &PathElement, mut ui: UiState, on_select: EventHandler<String>) -> Element {
    let attrs = PathAttrs::from(shape);
    let id = shape.dom_id().map(str::to_string);
    let enter_id = shape.key.clone().unwrap_or_default();
    let click_id = id.clone();

    rsx! {
        path {
            id: id,
            class: "{attrs.class}",
            d: "{attrs.d}",
            fill: "{attrs.fill}",
            stroke: "{attrs.stroke}",
            stroke_width: "{attrs.stroke_width}",
            onmouseenter: move |_| {
                if let Some(map) = ui.map_view.read().as_ref() {
                    map.on_pointer_enter(&mut *ui.hover_scene.write(), &enter_id);
                }
            },
            onmousemove: move |evt: MouseEvent| {
                let point = evt.page_coordinates();
                if let Some(map) = ui.map_view.read().as_ref() {
                    map.on_pointer_move(&mut *ui.hover_scene.write(), point.x, point.y);
                }
            },
            onmouseleave: move |_| {
                if let Some(map) = ui.map_view.read().as_ref() {
                    map.on_pointer_leave(&mut *ui.hover_scene.write());
                }
            },
            onclick: move |_| {
                if let Some(id) = click_id.clone() {
                    on_select.call(id);
                }
            },
        }
    }
}
