use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::error::LoadError;
use super::model::{GdpTable, Observation};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a GDP-per-capita CSV and reshape it into the canonical table.
/// Dispatch by header row.
///
/// Supported layouts:
/// * wide – `country,1800,1801,…` – one column per year, melted here
/// * long – `country,year,gdp_per_capita` – already melted (a leading pandas
///   `index` column is tolerated and ignored)
pub fn load_csv(path: &Path) -> Result<GdpTable, LoadError> {
    let reader = csv::Reader::from_path(path)?;
    load_from_reader(reader)
}

/// Reshape an already-materialized CSV source. Split out from [`load_csv`] so
/// the reshape contract can be exercised without touching the filesystem.
pub fn load_from_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<GdpTable, LoadError> {
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let table = if headers.iter().any(|h| h == "gdp_per_capita") {
        load_long(reader)?
    } else {
        load_wide(reader, &headers)?
    };

    if table.skipped_blank > 0 {
        log::warn!("excluded {} blank cells from the dataset", table.skipped_blank);
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// Wide layout: melt one-column-per-year into Observations
// ---------------------------------------------------------------------------

fn load_wide<R: Read>(mut reader: csv::Reader<R>, headers: &[String]) -> Result<GdpTable, LoadError> {
    match headers.first() {
        Some(first) if first == "country" => {}
        _ => return Err(LoadError::MissingColumn("country")),
    }

    // Every header after `country` is a year label; the table has no year
    // axis unless all of them parse.
    let years: Vec<i32> = headers[1..]
        .iter()
        .map(|h| {
            h.parse::<i32>().map_err(|_| LoadError::MalformedHeader {
                header: h.clone(),
            })
        })
        .collect::<Result<_, _>>()?;

    let mut observations = Vec::new();
    let mut skipped_blank = 0usize;

    for result in reader.records() {
        let record = result?;
        let country = record.get(0).unwrap_or("").trim();
        if country.is_empty() {
            skipped_blank += 1;
            continue;
        }

        for (col, &year) in years.iter().enumerate() {
            let raw = record.get(col + 1).unwrap_or("").trim();
            if raw.is_empty() {
                skipped_blank += 1;
                continue;
            }
            let value = parse_gdp_value(raw).ok_or_else(|| LoadError::MalformedValue {
                country: country.to_string(),
                year,
                raw: raw.to_string(),
            })?;
            observations.push(Observation {
                country: country.to_string(),
                year,
                gdp_per_capita: value,
            });
        }
    }

    Ok(GdpTable::from_observations(observations, skipped_blank))
}

// ---------------------------------------------------------------------------
// Long layout: pre-melted rows
// ---------------------------------------------------------------------------

/// One pre-melted row. Values stay as text so the same `k`-suffix coercion
/// applies to both layouts.
#[derive(Debug, Deserialize)]
struct LongRecord {
    country: String,
    year: String,
    gdp_per_capita: String,
}

fn load_long<R: Read>(mut reader: csv::Reader<R>) -> Result<GdpTable, LoadError> {
    let mut observations = Vec::new();
    let mut skipped_blank = 0usize;

    for result in reader.deserialize::<LongRecord>() {
        let record = result?;
        let country = record.country.trim();
        if country.is_empty() {
            skipped_blank += 1;
            continue;
        }

        // A year that fails to parse breaks the year axis, same as a bad
        // wide-layout header.
        let year_label = record.year.trim();
        let year = year_label
            .parse::<i32>()
            .map_err(|_| LoadError::MalformedHeader {
                header: year_label.to_string(),
            })?;

        let raw = record.gdp_per_capita.trim();
        if raw.is_empty() {
            skipped_blank += 1;
            continue;
        }
        let value = parse_gdp_value(raw).ok_or_else(|| LoadError::MalformedValue {
            country: country.to_string(),
            year,
            raw: raw.to_string(),
        })?;
        observations.push(Observation {
            country: country.to_string(),
            year,
            gdp_per_capita: value,
        });
    }

    Ok(GdpTable::from_observations(observations, skipped_blank))
}

// ---------------------------------------------------------------------------
// Value coercion
// ---------------------------------------------------------------------------

/// Parse a GDP cell. `"12.3k"` means 12300.0 (the suffix is case-sensitive);
/// anything else must parse as a plain float. Non-finite results are
/// rejected so the table only ever holds real numbers.
fn parse_gdp_value(raw: &str) -> Option<f64> {
    let value = match raw.strip_suffix('k') {
        Some(prefix) => prefix.trim().parse::<f64>().ok()? * 1000.0,
        None => raw.parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}
