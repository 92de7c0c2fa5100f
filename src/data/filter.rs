use std::collections::BTreeSet;

use super::model::GdpTable;

// ---------------------------------------------------------------------------
// Selection: which countries and which year span are in view
// ---------------------------------------------------------------------------

/// The two UI inputs the chart is filtered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selected country names. Empty means nothing is shown, not "show all".
    pub countries: BTreeSet<String>,
    /// Inclusive year range.
    pub year_min: i32,
    pub year_max: i32,
}

impl Selection {
    pub fn new(countries: BTreeSet<String>, year_min: i32, year_max: i32) -> Self {
        Selection {
            countries,
            year_min,
            year_max,
        }
    }
}

/// Return indices of observations that fall inside the selection.
///
/// Pure projection over the immutable table: same table and selection always
/// give the same indices, so this is safe to re-run on every UI event.
/// An inverted range (`year_min > year_max`, which happens transiently while
/// a slider is dragged) selects nothing rather than erroring.
pub fn filtered_indices(table: &GdpTable, selection: &Selection) -> Vec<usize> {
    if selection.countries.is_empty() || selection.year_min > selection.year_max {
        return Vec::new();
    }

    table
        .observations
        .iter()
        .enumerate()
        .filter(|(_, obs)| {
            obs.year >= selection.year_min
                && obs.year <= selection.year_max
                && selection.countries.contains(&obs.country)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;

    fn sample_table() -> GdpTable {
        let observations = ["A", "B", "C"]
            .iter()
            .flat_map(|&country| {
                [1800, 1850, 1900, 2000].iter().map(move |&year| Observation {
                    country: country.to_string(),
                    year,
                    gdp_per_capita: year as f64,
                })
            })
            .collect();
        GdpTable::from_observations(observations, 0)
    }

    fn countries(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bounds_are_inclusive() {
        let table = sample_table();
        let indices = filtered_indices(&table, &Selection::new(countries(&["A"]), 1900, 1900));
        assert_eq!(indices.len(), 1);
        let obs = &table.observations[indices[0]];
        assert_eq!((obs.country.as_str(), obs.year), ("A", 1900));
    }

    #[test]
    fn empty_country_set_selects_nothing() {
        let table = sample_table();
        let indices = filtered_indices(&table, &Selection::new(BTreeSet::new(), 1800, 2100));
        assert!(indices.is_empty());
    }

    #[test]
    fn inverted_range_selects_nothing() {
        let table = sample_table();
        let indices = filtered_indices(&table, &Selection::new(countries(&["A", "B"]), 1950, 1850));
        assert!(indices.is_empty());
    }

    #[test]
    fn repeat_invocations_are_identical() {
        let table = sample_table();
        let selection = Selection::new(countries(&["A", "C"]), 1850, 2000);
        assert_eq!(
            filtered_indices(&table, &selection),
            filtered_indices(&table, &selection)
        );
    }

    #[test]
    fn narrower_range_is_a_subset() {
        let table = sample_table();
        let wide = filtered_indices(&table, &Selection::new(countries(&["A", "B"]), 1800, 2000));
        let narrow = filtered_indices(&table, &Selection::new(countries(&["A", "B"]), 1850, 1900));
        assert!(narrow.iter().all(|i| wide.contains(i)));
        assert!(narrow.len() < wide.len());
    }

    #[test]
    fn unknown_countries_match_nothing() {
        let table = sample_table();
        let indices = filtered_indices(&table, &Selection::new(countries(&["Z"]), 1800, 2100));
        assert!(indices.is_empty());
    }
}
