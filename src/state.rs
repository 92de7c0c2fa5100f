use std::collections::BTreeSet;

use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, Selection};
use crate::data::model::GdpTable;

/// Countries pre-selected when a table first loads.
const DEFAULT_COUNTRIES: [&str; 2] = ["UK", "Angola"];

/// Year range shown when a table first loads (clamped to the table's extent).
const DEFAULT_YEAR_RANGE: (i32, i32) = (1800, 1900);

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table (None until startup load or File → Open succeeds).
    pub table: Option<GdpTable>,

    /// Current country / year-range selection.
    pub selection: Selection,

    /// Indices of observations passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Stable per-country colours.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            selection: Selection::new(BTreeSet::new(), DEFAULT_YEAR_RANGE.0, DEFAULT_YEAR_RANGE.1),
            visible_indices: Vec::new(),
            color_map: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table, reset the selection to its defaults.
    pub fn set_table(&mut self, table: GdpTable) {
        let countries: BTreeSet<String> = DEFAULT_COUNTRIES
            .iter()
            .filter(|c| table.countries.iter().any(|known| known == *c))
            .map(|c| c.to_string())
            .collect();

        let (lo, hi) = table.year_extent().unwrap_or(DEFAULT_YEAR_RANGE);
        self.selection = Selection::new(
            countries,
            DEFAULT_YEAR_RANGE.0.clamp(lo, hi),
            DEFAULT_YEAR_RANGE.1.clamp(lo, hi),
        );

        self.color_map = Some(ColorMap::new(&table.countries));
        self.table = Some(table);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` after any selection change.
    pub fn refilter(&mut self) {
        if let Some(table) = &self.table {
            self.visible_indices = filtered_indices(table, &self.selection);
        }
    }

    /// Toggle a single country in the selection.
    pub fn toggle_country(&mut self, country: &str) {
        if !self.selection.countries.remove(country) {
            self.selection.countries.insert(country.to_string());
        }
        self.refilter();
    }

    /// Select every country in the table.
    pub fn select_all(&mut self) {
        if let Some(table) = &self.table {
            self.selection.countries = table.countries.iter().cloned().collect();
            self.refilter();
        }
    }

    /// Clear the country selection. An empty selection shows nothing.
    pub fn select_none(&mut self) {
        self.selection.countries.clear();
        self.refilter();
    }

    /// Update the year range from the sliders. The ends may cross while
    /// dragging; the filter treats that as an empty view.
    pub fn set_year_range(&mut self, year_min: i32, year_max: i32) {
        if (self.selection.year_min, self.selection.year_max) != (year_min, year_max) {
            self.selection.year_min = year_min;
            self.selection.year_max = year_max;
            self.refilter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;

    fn table_for(countries: &[&str], years: &[i32]) -> GdpTable {
        let observations = countries
            .iter()
            .flat_map(|&country| {
                years.iter().map(move |&year| Observation {
                    country: country.to_string(),
                    year,
                    gdp_per_capita: 1.0,
                })
            })
            .collect();
        GdpTable::from_observations(observations, 0)
    }

    #[test]
    fn default_selection_intersects_available_countries() {
        let mut state = AppState::default();
        state.set_table(table_for(&["Angola", "Sweden"], &[1800, 1850, 1900]));
        let selected: Vec<&str> = state.selection.countries.iter().map(String::as_str).collect();
        assert_eq!(selected, vec!["Angola"]);
        assert_eq!((state.selection.year_min, state.selection.year_max), (1800, 1900));
        assert_eq!(state.visible_indices.len(), 3);
    }

    #[test]
    fn default_range_clamps_to_table_extent() {
        let mut state = AppState::default();
        state.set_table(table_for(&["UK"], &[1950, 2000]));
        assert_eq!((state.selection.year_min, state.selection.year_max), (1950, 1950));
    }

    #[test]
    fn toggling_a_country_refilters() {
        let mut state = AppState::default();
        state.set_table(table_for(&["Angola", "UK"], &[1800, 1900]));
        assert_eq!(state.visible_indices.len(), 4);

        state.toggle_country("UK");
        assert_eq!(state.visible_indices.len(), 2);

        state.select_none();
        assert!(state.visible_indices.is_empty());

        state.select_all();
        assert_eq!(state.visible_indices.len(), 4);
    }
}
