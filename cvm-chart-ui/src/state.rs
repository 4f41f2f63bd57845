//! UI state managed via Dioxus context.
//!
//! `UiState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<UiState>()`.

use cvm_data::ApplicationState;
use cvm_view::{LineChartView, MapView, Scene};
use dioxus::prelude::*;

/// Shared state of the map page.
#[derive(Clone, Copy)]
pub struct UiState {
    /// Records, boundaries and the selection (None until loaded)
    pub app: Signal<Option<ApplicationState>>,
    /// Map view, built once the data is loaded
    pub map_view: Signal<Option<MapView>>,
    /// Chart view, built once its container is mounted and measured
    pub chart_view: Signal<Option<LineChartView>>,
    /// What the map view has drawn
    pub map_scene: Signal<Scene>,
    /// Tooltip drawn by the map view's hover handlers, kept out of `map_scene`
    pub hover_scene: Signal<Scene>,
    /// What the chart view has drawn
    pub chart_scene: Signal<Scene>,
    /// Whether the data is still loading
    pub loading: Signal<bool>,
    /// Error message if loading failed
    pub error_msg: Signal<Option<String>>,
}

impl UiState {
    /// Create a new UiState with default signal values.
    pub fn new() -> Self {
        Self {
            app: Signal::new(None),
            map_view: Signal::new(None),
            chart_view: Signal::new(None),
            map_scene: Signal::new(Scene::new()),
            hover_scene: Signal::new(Scene::new()),
            chart_scene: Signal::new(Scene::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }
}
