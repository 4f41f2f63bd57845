//! Rendering-backend independent views for the pandemic map and trend chart.
//!
//! This crate provides:
//! - `surface`: the `DrawingSurface` capability and the retained `Scene`
//! - `scale` / `ticks`: linear, time and color scales with axis ticks
//! - `layout`: chart margins, container sizes and DOM ids
//! - `map_view`: the choropleth map, its legend, hover and selection
//! - `line_chart`: the per-country trend chart

pub mod layout;
pub mod line_chart;
pub mod map_view;
pub mod scale;
pub mod surface;
pub mod ticks;

pub use line_chart::LineChartView;
pub use map_view::MapView;
pub use surface::{DrawingSurface, Layer, Scene};
