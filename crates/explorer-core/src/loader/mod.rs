// crates/explorer-core/src/loader/mod.rs

//! # Data Loader
//!
//! One fetch of the full country list per view activation. No retry, no
//! partial results, no cache: every call goes back to the source.
//!
//! Handles the physical layer (HTTP or file, optional gzip) and delegates the
//! payload to the JSON parser.

use crate::error::Result;
use crate::model::Dataset;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

mod common_io;
#[cfg(feature = "fetch")]
mod fetch;

#[cfg(feature = "fetch")]
pub use self::fetch::fetch;

/// REST Countries endpoint, trimmed to the fields the model reads.
pub const DEFAULT_SOURCE_URL: &str =
    "https://restcountries.com/v3.1/all?fields=cca3,name,region,population,capital,flags";

/// Where a dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    Path(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url(DEFAULT_SOURCE_URL.to_owned())
    }
}

impl FromStr for DataSource {
    type Err = std::convert::Infallible;

    /// `http://` and `https://` are URLs; anything else is a file path.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(DataSource::Url(s.trim().to_owned()))
        } else {
            Ok(DataSource::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(u) => f.write_str(u),
            DataSource::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

impl DataSource {
    /// Loads the dataset this source points at.
    pub fn load(&self) -> Result<Dataset> {
        debug!(source = %self, "loading dataset");
        let dataset = match self {
            #[cfg(feature = "fetch")]
            DataSource::Url(url) => fetch(url)?,
            #[cfg(not(feature = "fetch"))]
            DataSource::Url(url) => {
                return Err(crate::error::LoadError::NotFound(format!(
                    "cannot fetch {url}: built without the 'fetch' feature"
                )))
            }
            DataSource::Path(path) => load_from_path(path)?,
        };
        info!(countries = dataset.len(), source = %self, "dataset loaded");
        Ok(dataset)
    }
}

/// Reads a local JSON dump (plain or `.gz`).
#[cfg(feature = "json")]
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Dataset> {
    let reader = common_io::open_stream(path.as_ref())?;
    from_reader(reader)
}

#[cfg(not(feature = "json"))]
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Dataset> {
    // Still surface a missing file before complaining about the feature.
    common_io::open_stream(path.as_ref())?;
    Err(crate::error::LoadError::NotFound(
        "built without the 'json' feature".into(),
    ))
}

/// Parses a JSON array of country records from any reader.
#[cfg(feature = "json")]
pub fn from_reader(reader: impl std::io::Read) -> Result<Dataset> {
    let raw: crate::model::CountriesRaw = serde_json::from_reader(reader)?;
    crate::model::build_dataset(raw)
}

#[cfg(feature = "json")]
pub fn from_slice(bytes: &[u8]) -> Result<Dataset> {
    let raw: crate::model::CountriesRaw = serde_json::from_slice(bytes)?;
    crate::model::build_dataset(raw)
}

#[cfg(feature = "json")]
pub fn from_json_str(json: &str) -> Result<Dataset> {
    from_slice(json.as_bytes())
}
