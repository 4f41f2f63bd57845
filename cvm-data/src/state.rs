//! Application state shared by the map and the chart.
//!
//! `ApplicationState` is created once at startup and lives for the page
//! session. Both views receive it by reference; the selection list is only
//! changed through [`ApplicationState::select_location`] and
//! [`ApplicationState::clear_selection`].

use crate::record::Record;
use cvm_geo::BoundaryFeature;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationState {
    records: Vec<Record>,
    boundaries: Vec<BoundaryFeature>,
    /// Selected location identifiers, in insertion order.
    selected_locations: Vec<String>,
}

impl ApplicationState {
    pub fn new(records: Vec<Record>, boundaries: Vec<BoundaryFeature>) -> Self {
        Self {
            records,
            boundaries,
            selected_locations: Vec::new(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn boundaries(&self) -> &[BoundaryFeature] {
        &self.boundaries
    }

    pub fn selected_locations(&self) -> &[String] {
        &self.selected_locations
    }

    pub fn is_selected(&self, location_id: &str) -> bool {
        self.selected_locations.iter().any(|s| s == location_id)
    }

    /// Append a location to the selection.
    pub fn select_location(&mut self, location_id: impl Into<String>) {
        self.selected_locations.push(location_id.into());
    }

    /// Empty the selection, returning what was selected.
    pub fn clear_selection(&mut self) -> Vec<String> {
        std::mem::take(&mut self.selected_locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::MultiPolygon;

    #[test]
    fn test_selection_is_insertion_ordered() {
        let mut state = ApplicationState::default();
        state.select_location("FRA");
        state.select_location("DEU");
        assert_eq!(state.selected_locations(), ["FRA", "DEU"]);
        assert!(state.is_selected("DEU"));
        assert!(!state.is_selected("ITA"));
    }

    #[test]
    fn test_clear_selection_returns_previous() {
        let mut state = ApplicationState::new(
            vec![Record::new("France", "FRA", "2021-01-01", Some(1.0))],
            vec![BoundaryFeature::new("FRA", MultiPolygon::new(vec![]))],
        );
        state.select_location("FRA");
        assert_eq!(state.clear_selection(), vec!["FRA".to_string()]);
        assert!(state.selected_locations().is_empty());
        assert_eq!(state.records().len(), 1);
        assert_eq!(state.boundaries().len(), 1);
    }
}
