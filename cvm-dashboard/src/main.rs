//! Pandemic Cases World Map
//!
//! Displays a choropleth world map colored by total confirmed cases per
//! million and, below it, a line chart of the trend for the country the user
//! clicks. Hovering a country shows its name.
//!
//! Data flow:
//! 1. `build.rs` copies `owid-covid-data.csv` and `countries.geojson` into `OUT_DIR`.
//! 2. `include_str!` embeds both into the WASM binary.
//! 3. On mount, they are parsed into an `ApplicationState` and the map view draws itself.
//! 4. When the chart container mounts, the chart view is sized from it.
//! 5. A click selects the country on the map, then redraws the chart for it.

use cvm_chart_ui::components::{
    ChartHeader, ErrorDisplay, LineChartPanel, LoadingSpinner, MapPanel, MapTooltip,
};
use cvm_chart_ui::state::UiState;
use cvm_data::loader::load_records;
use cvm_data::ApplicationState;
use cvm_geo::load_boundaries;
use cvm_view::MapView;
use dioxus::prelude::*;

/// Per-location, per-date case table (OWID layout).
const RECORDS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/owid-covid-data.csv"));
/// Country outlines keyed by ISO alpha-3 code.
const BOUNDARIES_GEOJSON: &str = include_str!(concat!(env!("OUT_DIR"), "/countries.geojson"));

const PAGE_STYLE: &str = r#"
.countries:hover { stroke-width: 0.5; cursor: pointer; }
.countries.selected { stroke: #d00; stroke-width: 1; }
.line-chart-setting { stroke-width: 2; }
"#;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("covid-map-root"))
        .launch(App);
}

fn load_state() -> anyhow::Result<ApplicationState> {
    let records = load_records(RECORDS_CSV)?;
    let boundaries = load_boundaries(BOUNDARIES_GEOJSON)?;
    Ok(ApplicationState::new(records, boundaries))
}

#[component]
fn App() -> Element {
    let mut ui = use_context_provider(UiState::new);

    // Load the embedded data and draw the map once
    use_effect(move || match load_state() {
        Ok(app) => {
            let map = MapView::new(&app, &mut *ui.map_scene.write());
            ui.map_view.set(Some(map));
            ui.app.set(Some(app));
            ui.loading.set(false);
        }
        Err(e) => {
            log::error!("Failed to load data: {:#}", e);
            ui.error_msg
                .set(Some(format!("Failed to load pandemic data: {:#}", e)));
            ui.loading.set(false);
        }
    });

    // The map only marks the selection; the chart is redrawn from here.
    let on_select = move |location_id: String| {
        let mut app = ui.app.write();
        let Some(app) = app.as_mut() else {
            return;
        };
        if let Some(map) = ui.map_view.read().as_ref() {
            map.select(app, &mut *ui.map_scene.write(), &location_id);
        }
        if let Some(chart) = ui.chart_view.write().as_mut() {
            chart.update_selection(&mut *ui.chart_scene.write(), &location_id);
        }
    };

    rsx! {
        style { "{PAGE_STYLE}" }
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Total COVID-19 Cases per Million".to_string(),
                metric_description: "Darker countries have more confirmed cases per million people. Click a country to plot its trend.".to_string(),
            }

            if let Some(err) = (ui.error_msg)() {
                ErrorDisplay { message: err }
            } else if (ui.loading)() {
                LoadingSpinner {}
            } else {
                MapPanel { on_select: on_select }
                MapTooltip {}

                ChartHeader {
                    title: "Cases per Million over Time".to_string(),
                    metric_description: "Y-axis: total confirmed cases per million people".to_string(),
                }
                LineChartPanel {}
            }
        }
    }
}
