//! Chart container with the stacked x-axis, y-axis and lines layers.

use super::svg::layer_svg;
use crate::js_bridge;
use crate::state::UiState;
use cvm_view::layout::{DEFAULT_CONTAINER, LINE_CHART_ID};
use cvm_view::{Layer, LineChartView};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LineChartPanelProps {
    /// Container height in pixels
    #[props(default = 450)]
    pub height: u32,
}

/// The chart view is built when this container mounts, sized from the
/// container's computed style.
#[component]
pub fn LineChartPanel(props: LineChartPanelProps) -> Element {
    let mut ui = use_context::<UiState>();
    let style = format!("position: relative; width: 100%; height: {}px;", props.height);

    let on_mounted = move |_: MountedEvent| {
        let size = js_bridge::container_size(LINE_CHART_ID).unwrap_or_else(|| {
            log::warn!("chart: #{} could not be measured, using default size", LINE_CHART_ID);
            DEFAULT_CONTAINER
        });
        let app = ui.app.read();
        let Some(app) = app.as_ref() else {
            log::warn!("chart: container mounted before data was loaded");
            return;
        };
        let view = LineChartView::new(app, size, &mut *ui.chart_scene.write());
        ui.chart_view.set(Some(view));
    };

    rsx! {
        div {
            id: "{LINE_CHART_ID}",
            style: "{style}",
            onmounted: on_mounted,
            ChartLayer { layer: Layer::XAxis }
            ChartLayer { layer: Layer::YAxis }
            ChartLayer { layer: Layer::Lines }
        }
    }
}

/// One chart layer, stacked over the others.
#[component]
fn ChartLayer(layer: Layer) -> Element {
    let ui = use_context::<UiState>();
    let content = use_memo(move || ui.chart_scene.read().layer(layer).cloned());
    let dom_id = layer.dom_id();

    rsx! {
        div {
            id: "{dom_id}",
            style: "position: absolute; top: 0; left: 0;",
            {layer_svg(content().as_ref())}
        }
    }
}
