//! Page settings.
//!
//! Settings live in a JSON file in the platform config directory, or at
//! the path named by `HEROWARS_SETTINGS`. Every key is optional:
//!
//! ```json
//! {
//!   "output": "index.html",
//!   "title": "Hero Wars",
//!   "data": "heros-output.csv",
//!   "sort": [{ "column": "Power", "desc": true }],
//!   "filters": { "Role": "Tank", "Power": [20000, null] },
//!   "global_filter": "ast"
//! }
//! ```

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use herowars_lib::data;
use herowars_lib::error::{LoadError, TableError};
use herowars_lib::filter::FilterValue;
use herowars_lib::model::Record;
use herowars_lib::sort::SortBy;
use herowars_lib::table::TableView;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;

/// Environment variable overriding the settings file location.
pub const SETTINGS_ENV: &str = "HEROWARS_SETTINGS";

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid settings {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Settings for rendering the hero page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the page is written.
    pub output: PathBuf,
    /// Document title.
    pub title: String,
    /// Alternative dataset; `.csv` files are read as scraper output,
    /// anything else as JSON. `None` uses the bundled dataset.
    pub data: Option<PathBuf>,
    /// Initial sort keys, primary first.
    pub sort: Vec<SortBy>,
    /// Initial column filters by accessor.
    pub filters: BTreeMap<String, FilterValue>,
    /// Initial global filter.
    pub global_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("index.html"),
            title: "Hero Wars".to_string(),
            data: None,
            sort: Vec::new(),
            filters: BTreeMap::new(),
            global_filter: None,
        }
    }
}

impl Settings {
    /// Load settings from `HEROWARS_SETTINGS` or the config directory.
    ///
    /// A missing settings file yields the defaults.
    pub fn load() -> Result<Self, SettingsError> {
        let path = match env::var_os(SETTINGS_ENV) {
            Some(path) => Some(PathBuf::from(path)),
            None => paths::settings_file(),
        };
        match path {
            Some(path) if path.exists() => Self::from_path(&path),
            Some(path) => {
                info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                warn!("Could not determine config directory, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load settings from a file.
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load the configured dataset.
    pub fn load_records(&self) -> Result<Vec<Record>, LoadError> {
        let Some(path) = &self.data else {
            return data::bundled();
        };
        debug!("Loading dataset from {}", path.display());
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            data::from_scraper_csv(&fs::read_to_string(path)?)
        } else {
            data::from_json_reader(io::BufReader::new(File::open(path)?))
        }
    }

    /// Apply the initial filters and sort to a view.
    pub fn apply(&self, view: &mut TableView<'_>) -> Result<(), TableError> {
        for (column, value) in &self.filters {
            view.set_filter(column, value.clone())?;
        }
        if let Some(query) = &self.global_filter {
            view.set_global_filter(query.as_str());
        }
        view.set_sort_keys(self.sort.clone())
    }
}
