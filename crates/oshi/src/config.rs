//! Theme configuration.

use serde::Deserialize;

use crate::Error;

/// Default storage key holding the persisted theme.
pub(crate) const DEFAULT_STORAGE_KEY: &str = "theme";

/// Default class token marking dark mode on the document root.
pub(crate) const DEFAULT_MARKER_CLASS: &str = "dark";

/// Names the storage entry and root class the theme is reflected into.
///
/// Both fields default to the values the component library ships with, so
/// an empty document is a valid configuration.
///
/// # Example
///
/// ```rust
/// use oshi::ThemeConfig;
///
/// let config = ThemeConfig::from_yaml("storage_key: site-theme").unwrap();
/// assert_eq!(config.storage_key, "site-theme");
/// assert_eq!(config.marker_class, "dark");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Key of the persisted storage entry.
    pub storage_key: String,
    /// Class token toggled on the document root.
    pub marker_class: String,
}

impl ThemeConfig {
    /// Parses a configuration from YAML. Missing fields take their defaults.
    pub fn from_yaml(source: &str) -> Result<Self, Error> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
        }
    }
}
