//! Dioxus front end for the pandemic map and trend chart.
//!
//! This crate provides:
//! - `js_bridge`: DOM measurements the views cannot do themselves
//! - `state`: reactive `UiState` with Dioxus Signals
//! - `components`: the map, chart, tooltip and page furniture as RSX components

pub mod components;
pub mod js_bridge;
pub mod state;
