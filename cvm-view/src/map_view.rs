//! Choropleth world map.
//!
//! Each boundary feature is drawn as one path keyed by its identifier and
//! filled by the largest total-cases-per-million value seen for it. The map
//! also carries a graticule, the sphere outline and a gradient legend.
//! Hover handlers drive the tooltip; `select` drives the selection marking.
//! Notifying the chart about a selection is left to the caller.

use crate::layout::{MAP_HEIGHT, MAP_WIDTH};
use crate::scale::{ColorScale, Rgb};
use crate::surface::{
    DrawingSurface, Frame, GradientStop, Layer, LegendElement, PathElement, TextElement,
};
use cvm_data::grouping::{location_by_iso, max_metric_by_iso, max_value};
use cvm_data::ApplicationState;
use cvm_geo::{graticule, path, WinkelTripel};
use geo::MultiPolygon;

/// Fill for a zero value.
pub const LOW_COLOR: Rgb = Rgb::new(0xE0, 0xF7, 0xE0);
/// Fill for the largest value.
pub const HIGH_COLOR: Rgb = Rgb::new(0x00, 0x64, 0x00);
/// Display name of a feature with no matching record.
pub const UNKNOWN_NAME: &str = "Unknown";
/// Tooltip position relative to the pointer.
pub const TOOLTIP_OFFSET: (f64, f64) = (10.0, -10.0);
pub const LEGEND_GRADIENT_ID: &str = "legend-gradient";
/// Class of every country path, keyed or not.
pub const COUNTRY_CLASS: &str = "countries";

const COUNTRY_STROKE: &str = "black";
const COUNTRY_STROKE_WIDTH: f64 = 0.1;
const GRATICULE_STROKE: &str = "#ccc";
const GRATICULE_STROKE_WIDTH: f64 = 0.5;
const OUTLINE_STROKE: &str = "#000";

/// Whether `path` is a country shape, which takes the hover handlers.
/// Only keyed ones are selectable.
pub fn is_country_path(path: &PathElement) -> bool {
    path.has_class(COUNTRY_CLASS)
}

/// One feature with its derived metric and display name.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryShape {
    pub id: String,
    pub name: String,
    /// Largest observed value, 0.0 when the feature has no numeric record.
    pub total_cases_per_million: f64,
    pub geometry: MultiPolygon<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    shapes: Vec<CountryShape>,
    max_value: f64,
    color_scale: ColorScale,
    projection: WinkelTripel,
}

impl MapView {
    /// Derive the country shapes from `state` and draw the map onto `surface`.
    pub fn new<S: DrawingSurface>(state: &ApplicationState, surface: &mut S) -> Self {
        let records = state.records();
        let maxima = max_metric_by_iso(records);
        let names = location_by_iso(records);
        let max_value = max_value(maxima.values().copied()).unwrap_or(0.0);

        let shapes: Vec<CountryShape> = state
            .boundaries()
            .iter()
            .map(|feature| CountryShape {
                id: feature.id.clone(),
                name: names
                    .get(feature.id.as_str())
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                total_cases_per_million: maxima.get(feature.id.as_str()).copied().unwrap_or(0.0),
                geometry: feature.geometry.clone(),
            })
            .collect();

        log::info!(
            "map: {} shapes, max total cases per million {}",
            shapes.len(),
            max_value
        );

        let view = Self {
            shapes,
            max_value,
            color_scale: ColorScale::new((0.0, max_value), LOW_COLOR, HIGH_COLOR),
            projection: WinkelTripel::default(),
        };
        view.render(surface);
        view
    }

    pub fn shapes(&self) -> &[CountryShape] {
        &self.shapes
    }

    /// First shape with the given identifier.
    pub fn shape(&self, id: &str) -> Option<&CountryShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Largest per-country value; the top of the color scale.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn color_for(&self, value: f64) -> Rgb {
        self.color_scale.color(value)
    }

    fn render<S: DrawingSurface>(&self, surface: &mut S) {
        surface.clear(Layer::Map);
        surface.set_frame(
            Layer::Map,
            Frame {
                width: MAP_WIDTH,
                height: MAP_HEIGHT,
                offset: (0.0, 0.0),
            },
        );

        for shape in &self.shapes {
            let mut element = PathElement::new(path::multipolygon_path(&self.projection, &shape.geometry))
                .class(COUNTRY_CLASS)
                .class("boundary")
                .fill(self.color_for(shape.total_cases_per_million).to_string())
                .stroke(COUNTRY_STROKE)
                .stroke_width(COUNTRY_STROKE_WIDTH);
            if !shape.id.is_empty() {
                element = element.key(shape.id.clone());
            }
            surface.draw_path(Layer::Map, element);
        }

        let graticule_d: String = graticule::lines()
            .iter()
            .map(|line| path::line_path(&self.projection, line, false))
            .collect();
        surface.draw_path(
            Layer::Map,
            PathElement::new(graticule_d)
                .class("graticule")
                .fill("none")
                .stroke(GRATICULE_STROKE)
                .stroke_width(GRATICULE_STROKE_WIDTH),
        );
        surface.draw_path(
            Layer::Map,
            PathElement::new(path::line_path(&self.projection, &graticule::outline(), true))
                .class("strokeGraticule")
                .fill("none")
                .stroke(OUTLINE_STROKE),
        );

        self.render_legend(surface);
    }

    fn render_legend<S: DrawingSurface>(&self, surface: &mut S) {
        let label_y = MAP_HEIGHT - 75.0;
        surface.draw_legend(
            Layer::Map,
            LegendElement {
                gradient_id: LEGEND_GRADIENT_ID.to_string(),
                stops: vec![
                    GradientStop {
                        offset: 0.0,
                        color: self.color_for(0.0).to_string(),
                    },
                    GradientStop {
                        offset: 100.0,
                        color: self.color_for(self.max_value).to_string(),
                    },
                ],
                x: 10.0,
                y: MAP_HEIGHT - 70.0,
                width: 150.0,
                height: 20.0,
                labels: vec![
                    TextElement {
                        x: 10.0,
                        y: label_y,
                        text: "0".to_string(),
                    },
                    TextElement {
                        x: 100.0,
                        y: label_y,
                        text: format!("{}", self.max_value.ceil()),
                    },
                ],
            },
        );
    }

    /// Show the tooltip with the feature's display name.
    pub fn on_pointer_enter<S: DrawingSurface>(&self, surface: &mut S, id: &str) {
        let name = self.shape(id).map_or(UNKNOWN_NAME, |s| s.name.as_str());
        surface.show_tooltip(name);
    }

    /// Keep the tooltip next to the pointer (page coordinates).
    pub fn on_pointer_move<S: DrawingSurface>(&self, surface: &mut S, page_x: f64, page_y: f64) {
        surface.move_tooltip(page_x + TOOLTIP_OFFSET.0, page_y + TOOLTIP_OFFSET.1);
    }

    pub fn on_pointer_leave<S: DrawingSurface>(&self, surface: &mut S) {
        surface.hide_tooltip();
    }

    /// Make `location_id` the only selected location.
    ///
    /// An empty id leaves both the state and the surface untouched.
    pub fn select<S: DrawingSurface>(
        &self,
        state: &mut ApplicationState,
        surface: &mut S,
        location_id: &str,
    ) {
        if location_id.is_empty() {
            return;
        }
        self.clear_selection(state, surface);
        state.select_location(location_id);
        log::info!("map: select {}", location_id);
        surface.set_selected(Layer::Map, location_id, true);
    }

    /// Unmark every selected location and empty the shared selection.
    pub fn clear_selection<S: DrawingSurface>(&self, state: &mut ApplicationState, surface: &mut S) {
        for id in state.clear_selection() {
            surface.set_selected(Layer::Map, &id, false);
        }
    }
}
