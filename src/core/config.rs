//! Catalog location resolution
//!
//! The catalog lives in a single JSON file. Its path is resolved with layered
//! precedence: the `--db` flag, then the `RXCAT_DB` environment variable,
//! then the platform data directory, then `./rxcat.json` as a last resort.

use std::path::{Path, PathBuf};

/// Catalog file name inside the platform data directory
const CATALOG_FILE: &str = "catalog.json";

/// Resolved runtime configuration
#[derive(Debug, Default)]
pub struct Config {
    /// Catalog path from the environment, if set
    pub db_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> Self {
        Self {
            db_path: std::env::var_os("RXCAT_DB").map(PathBuf::from),
        }
    }

    /// Resolve the catalog path, with an explicit flag taking precedence
    pub fn resolve_db_path(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }
        if let Some(ref path) = self.db_path {
            return path.clone();
        }
        Self::default_db_path()
    }

    /// The platform-appropriate default catalog path
    fn default_db_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "rxcat")
            .map(|dirs| dirs.data_dir().join(CATALOG_FILE))
            .unwrap_or_else(|| PathBuf::from("rxcat.json"))
    }
}
