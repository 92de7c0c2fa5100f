use std::fs;
use std::path::PathBuf;

use super::error::LoadError;

/// Where the published Gapminder extract lives.
pub const DATA_URL: &str = "https://github.com/sek2dcs/assignment5/raw/main/gdp_pcap.csv";

const CACHE_FILE: &str = "gdp_pcap.csv";

/// Materialize the dataset on local disk and return its path.
///
/// The download lands in a cache file under the OS temp directory and is
/// reused on later runs; delete the file to force a fresh download. Failures
/// surface as [`LoadError`] and are fatal at startup; nothing retries here.
pub fn fetch_cached(url: &str) -> Result<PathBuf, LoadError> {
    let cache_dir = std::env::temp_dir().join("gdp-explorer");
    let dest = cache_dir.join(CACHE_FILE);

    if dest.exists() {
        log::info!("using cached dataset at {}", dest.display());
        return Ok(dest);
    }

    fs::create_dir_all(&cache_dir).map_err(|source| LoadError::Io {
        path: cache_dir.clone(),
        source,
    })?;

    log::info!("downloading dataset from {url}");
    let bytes = reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.bytes())
        .map_err(|source| LoadError::Retrieval {
            url: url.to_string(),
            source,
        })?;

    fs::write(&dest, &bytes).map_err(|source| LoadError::Io {
        path: dest.clone(),
        source,
    })?;

    log::info!("cached {} bytes at {}", bytes.len(), dest.display());
    Ok(dest)
}
