use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Observation – one row of the long-format table
// ---------------------------------------------------------------------------

/// A single (country, year, value) record, the atomic unit of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub country: String,
    pub year: i32,
    pub gdp_per_capita: f64,
}

// ---------------------------------------------------------------------------
// GdpTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full reshaped dataset with pre-computed indexes.
///
/// Built once at startup and never mutated afterwards; the filter engine and
/// the plot only ever read from it.
#[derive(Debug, Clone)]
pub struct GdpTable {
    /// All observations, sorted by (country, year). One entry per
    /// (country, year) pair.
    pub observations: Vec<Observation>,
    /// Sorted distinct country names (options for the multi-select).
    pub countries: Vec<String>,
    /// Distinct years divisible by 100, mapped to their tick label.
    pub year_marks: BTreeMap<i32, String>,
    /// Blank cells excluded during the reshape.
    pub skipped_blank: usize,
}

impl GdpTable {
    /// Build the table and its derived indexes from loader output.
    ///
    /// Sorts by (country, year) so the result is deterministic regardless of
    /// source layout. Duplicate (country, year) pairs keep the first
    /// occurrence; the drop count is logged.
    pub fn from_observations(mut observations: Vec<Observation>, skipped_blank: usize) -> Self {
        observations.sort_by(|a, b| a.country.cmp(&b.country).then(a.year.cmp(&b.year)));

        let before = observations.len();
        observations.dedup_by(|b, a| a.country == b.country && a.year == b.year);
        let duplicates = before - observations.len();
        if duplicates > 0 {
            log::warn!("dropped {duplicates} duplicate (country, year) rows");
        }

        let countries: Vec<String> = observations
            .iter()
            .map(|obs| obs.country.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        let year_marks: BTreeMap<i32, String> = observations
            .iter()
            .map(|obs| obs.year)
            .filter(|year| year % 100 == 0)
            .map(|year| (year, year.to_string()))
            .collect();

        GdpTable {
            observations,
            countries,
            year_marks,
            skipped_blank,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Smallest and largest year present, if any.
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        let mut years = self.observations.iter().map(|obs| obs.year);
        let first = years.next()?;
        let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(country: &str, year: i32, value: f64) -> Observation {
        Observation {
            country: country.to_string(),
            year,
            gdp_per_capita: value,
        }
    }

    #[test]
    fn derives_sorted_distinct_countries() {
        let table = GdpTable::from_observations(
            vec![
                obs("Sweden", 1900, 2.0),
                obs("Angola", 1900, 1.0),
                obs("Sweden", 1901, 2.1),
            ],
            0,
        );
        assert_eq!(table.countries, vec!["Angola", "Sweden"]);
    }

    #[test]
    fn year_marks_keep_only_centuries() {
        let table = GdpTable::from_observations(
            vec![
                obs("A", 1800, 1.0),
                obs("A", 1850, 1.0),
                obs("A", 1900, 1.0),
                obs("A", 2000, 1.0),
            ],
            0,
        );
        let expected: Vec<(i32, String)> = vec![
            (1800, "1800".to_string()),
            (1900, "1900".to_string()),
            (2000, "2000".to_string()),
        ];
        assert_eq!(table.year_marks.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn observations_sorted_and_deduplicated() {
        let table = GdpTable::from_observations(
            vec![
                obs("B", 1900, 5.0),
                obs("A", 1901, 2.0),
                obs("A", 1900, 1.0),
                obs("A", 1900, 9.0),
            ],
            0,
        );
        assert_eq!(table.len(), 3);
        assert_eq!(table.observations[0], obs("A", 1900, 1.0));
        assert_eq!(table.observations[1], obs("A", 1901, 2.0));
        assert_eq!(table.observations[2], obs("B", 1900, 5.0));
    }

    #[test]
    fn year_extent_spans_table() {
        let table =
            GdpTable::from_observations(vec![obs("A", 2100, 1.0), obs("B", 1800, 1.0)], 0);
        assert_eq!(table.year_extent(), Some((1800, 2100)));
        assert_eq!(GdpTable::from_observations(Vec::new(), 0).year_extent(), None);
    }
}
