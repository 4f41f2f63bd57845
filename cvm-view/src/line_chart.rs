//! Per-country trend chart.
//!
//! The chart draws into three stacked layers (x axis, y axis, lines), each
//! with its own frame of the container's size. Every redraw starts from a
//! cleared chart; nothing is updated incrementally.

use crate::layout::{ChartArea, ContainerSize, CHART_MARGIN};
use crate::scale::{LinearScale, TimeScale};
use crate::surface::{AxisElement, AxisOrient, DrawingSurface, Frame, Layer, PathElement, Tick};
use crate::ticks::DEFAULT_TICK_COUNT;
use chrono::NaiveDate;
use cvm_data::grouping::{extent, max_value, partition};
use cvm_data::{ApplicationState, ColorAssignment, Record};
use cvm_geo::path::polyline;
use std::collections::HashMap;

/// Stroke used if the palette has no color to give.
const FALLBACK_STROKE: &str = "black";

const CHART_LAYERS: [Layer; 3] = [Layer::XAxis, Layer::YAxis, Layer::Lines];

/// One plotted observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChartView {
    /// Region-level entries keyed by display name.
    aggregates: HashMap<String, Vec<Record>>,
    /// Country entries keyed by iso code.
    countries: HashMap<String, Vec<Record>>,
    area: ChartArea,
    colors: ColorAssignment,
}

impl LineChartView {
    /// Group the records of `state` and start with an empty chart sized to
    /// `container`.
    pub fn new<S: DrawingSurface>(
        state: &ApplicationState,
        container: ContainerSize,
        surface: &mut S,
    ) -> Self {
        let grouped = partition(state.records());
        let area = ChartArea::from_container(container, CHART_MARGIN);
        log::info!(
            "chart: {} countries, {} aggregates, drawing area {}x{}",
            grouped.countries.len(),
            grouped.aggregates.len(),
            area.width,
            area.height
        );
        let mut view = Self {
            aggregates: grouped.aggregates,
            countries: grouped.countries,
            area,
            colors: ColorAssignment::new(),
        };
        view.clear(surface);
        view
    }

    pub fn area(&self) -> ChartArea {
        self.area
    }

    /// Records of a region-level aggregate ("Europe", "World", ...).
    pub fn aggregate(&self, name: &str) -> Option<&[Record]> {
        self.aggregates.get(name).map(Vec::as_slice)
    }

    /// Aggregate names, sorted.
    pub fn aggregate_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.aggregates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Plottable points of a country in date order, `None` for an unknown
    /// country. Records without a valid date or a numeric value are left out.
    pub fn series(&self, country_id: &str) -> Option<Vec<ChartPoint>> {
        let records = self.countries.get(country_id)?;
        let mut points: Vec<ChartPoint> = records
            .iter()
            .filter_map(|r| {
                Some(ChartPoint {
                    date: r.parsed_date()?,
                    value: r.total_cases_per_million?,
                })
            })
            .collect();
        if points.len() < records.len() {
            log::debug!(
                "chart: {} of {} records for {} are not plottable",
                records.len() - points.len(),
                records.len(),
                country_id
            );
        }
        points.sort_by_key(|p| p.date);
        Some(points)
    }

    /// Remove axes and lines and forget color assignments.
    pub fn clear<S: DrawingSurface>(&mut self, surface: &mut S) {
        self.colors.reset();
        for layer in CHART_LAYERS {
            surface.clear(layer);
        }
    }

    /// Clear the chart and draw the trend line of `country_id`.
    ///
    /// An unknown country, or one without plottable points, leaves the
    /// chart empty.
    pub fn redraw<S: DrawingSurface>(&mut self, surface: &mut S, country_id: &str) {
        self.clear(surface);

        let Some(points) = self.series(country_id) else {
            log::info!("chart: no data for selected country {}", country_id);
            return;
        };
        let (Some(date_extent), Some(max)) = (
            extent(points.iter().map(|p| p.date)),
            max_value(points.iter().map(|p| p.value)),
        ) else {
            log::info!("chart: no plottable data for selected country {}", country_id);
            return;
        };

        let area = self.area;
        let x = TimeScale::new(date_extent, (0.0, area.width));
        let y = LinearScale::new((0.0, max), (area.height, 0.0));

        let frame = Frame {
            width: area.outer_width(),
            height: area.outer_height(),
            offset: (area.margin.left, area.margin.top),
        };
        for layer in CHART_LAYERS {
            surface.set_frame(layer, frame);
        }

        surface.draw_axis(
            Layer::XAxis,
            AxisElement {
                orient: AxisOrient::Bottom,
                translate: (0.0, area.height),
                range: x.range,
                ticks: x
                    .ticks(DEFAULT_TICK_COUNT)
                    .into_iter()
                    .map(|(date, label)| Tick {
                        offset: x.scale(date),
                        label,
                    })
                    .collect(),
            },
        );
        surface.draw_axis(
            Layer::YAxis,
            AxisElement {
                orient: AxisOrient::Left,
                translate: (0.0, 0.0),
                range: y.range,
                ticks: y
                    .ticks(DEFAULT_TICK_COUNT)
                    .into_iter()
                    .map(|(value, label)| Tick {
                        offset: y.scale(value),
                        label,
                    })
                    .collect(),
            },
        );

        let screen: Vec<(f64, f64)> = points
            .iter()
            .map(|p| (x.scale(p.date), y.scale(p.value)))
            .collect();
        let color = self
            .colors
            .choose_color_without_repetition()
            .unwrap_or(FALLBACK_STROKE);
        surface.draw_path(
            Layer::Lines,
            PathElement::new(polyline(&screen, false))
                .key(country_id)
                .class("line")
                .class("line-chart-setting")
                .fill("none")
                .stroke(color),
        );
    }

    /// Entry point for a new selection: clear, then redraw for `location_id`.
    pub fn update_selection<S: DrawingSurface>(&mut self, surface: &mut S, location_id: &str) {
        self.clear(surface);
        self.redraw(surface, location_id);
    }
}
