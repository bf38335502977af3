//! Catalog source configuration.

use serde::{Deserialize, Serialize};

/// Where the catalog's local sources live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Include the catalog embedded in the binary. Default: true.
    pub use_bundled: bool,
    /// Local override file (`.json` or `.toml`). Missing file = no overrides.
    pub overrides_path: Option<String>,
    /// Ignore list, one feature name or id per line. Missing file = empty.
    pub ignore_path: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            use_bundled: true,
            overrides_path: None,
            ignore_path: None,
        }
    }
}
