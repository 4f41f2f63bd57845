//! Data model for the pandemic map and trend chart.
//!
//! This crate provides:
//! - `record`: the per-location, per-date observation and its metric parsing
//! - `loader`: deserializing the record table from CSV
//! - `state`: `ApplicationState`, owner of records, boundaries and the selection
//! - `grouping`: aggregate/country partitioning and per-country maxima
//! - `palette`: line color assignment without repetition

pub mod grouping;
pub mod loader;
pub mod palette;
pub mod record;
pub mod state;

pub use palette::ColorAssignment;
pub use record::Record;
pub use state::ApplicationState;
