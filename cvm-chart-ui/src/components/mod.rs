//! Reusable Dioxus RSX components for the map page.

mod chart_header;
mod error_display;
mod line_chart_panel;
mod loading_spinner;
mod map_panel;
mod map_tooltip;
mod svg;

pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use line_chart_panel::LineChartPanel;
pub use loading_spinner::LoadingSpinner;
pub use map_panel::MapPanel;
pub use map_tooltip::MapTooltip;
