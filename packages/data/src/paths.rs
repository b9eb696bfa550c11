//! Document locations.

use std::path::{Path, PathBuf};

/// Directory override for all three documents.
pub const DATA_DIR_ENV: &str = "KENYA_ELECTIONS_DATA_DIR";
/// Per-file override for the election history document.
pub const ELECTION_DATA_ENV: &str = "ELECTION_DATA_PATH";
/// Per-file override for the county document.
pub const COUNTY_DATA_ENV: &str = "COUNTY_DATA_PATH";
/// Per-file override for the boundary document.
pub const BOUNDARY_DATA_ENV: &str = "BOUNDARY_DATA_PATH";

const ELECTION_DATA_FILE: &str = "election_data.json";
const COUNTY_DATA_FILE: &str = "county_data.json";
const BOUNDARY_DATA_FILE: &str = "kenya_counties.geojson";

/// Where the three input documents live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// National election history document.
    pub election_history: PathBuf,
    /// County statistics document.
    pub counties: PathBuf,
    /// County boundary `GeoJSON`.
    pub boundaries: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::with_data_dir(".")
    }
}

impl DataPaths {
    /// Standard file names inside `dir`.
    #[must_use]
    pub fn with_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            election_history: dir.join(ELECTION_DATA_FILE),
            counties: dir.join(COUNTY_DATA_FILE),
            boundaries: dir.join(BOUNDARY_DATA_FILE),
        }
    }

    /// Reads the data directory and per-file overrides from the
    /// environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_env`], but with an explicit data directory taking
    /// precedence over `KENYA_ELECTIONS_DATA_DIR`.
    #[must_use]
    pub fn from_env_with_dir(dir: Option<&Path>) -> Self {
        Self::from_lookup(|key| {
            if key == DATA_DIR_ENV
                && let Some(dir) = dir
            {
                return Some(dir.display().to_string());
            }
            std::env::var(key).ok()
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut paths = non_empty(DATA_DIR_ENV).map_or_else(Self::default, Self::with_data_dir);

        if let Some(path) = non_empty(ELECTION_DATA_ENV) {
            paths.election_history = PathBuf::from(path);
        }
        if let Some(path) = non_empty(COUNTY_DATA_ENV) {
            paths.counties = PathBuf::from(path);
        }
        if let Some(path) = non_empty(BOUNDARY_DATA_ENV) {
            paths.boundaries = PathBuf::from(path);
        }

        paths
    }
}
