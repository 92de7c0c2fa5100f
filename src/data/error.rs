use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while materializing or reshaping the dataset.
///
/// Retrieval and header errors are fatal at startup; a `MalformedValue` from
/// a File → Open load is shown as a status message and the previous table is
/// kept. Range validation is deliberately absent: an inverted year range is
/// handled by the filter returning an empty view, never an error.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to retrieve dataset from {url}: {source}")]
    Retrieval {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset has no '{0}' column")]
    MissingColumn(&'static str),

    #[error("year column header '{header}' is not an integer")]
    MalformedHeader { header: String },

    #[error("value '{raw}' for {country} in {year} is not numeric")]
    MalformedValue {
        country: String,
        year: i32,
        raw: String,
    },
}
