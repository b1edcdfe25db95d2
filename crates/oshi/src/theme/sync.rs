//! Mirrors the current theme into the host.

use super::preference::ThemePreference;
use super::store::ThemeObserver;
use crate::config::ThemeConfig;
use crate::host::Host;

/// Observer that reflects each theme onto the document root and persists it.
///
/// For every notification the marker class is added (dark) or removed
/// (light), then the theme literal overwrites the storage entry. Missing
/// ports are skipped. A failed storage write is logged and otherwise
/// ignored.
#[derive(Debug)]
pub struct DocumentSync {
    host: Host,
    config: ThemeConfig,
}

impl DocumentSync {
    pub fn new(host: Host, config: ThemeConfig) -> Self {
        Self { host, config }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }
}

impl ThemeObserver for DocumentSync {
    fn theme_changed(&mut self, theme: ThemePreference) {
        if let Some(root) = self.host.root.as_mut() {
            if theme.is_dark() {
                root.add_class(&self.config.marker_class);
            } else {
                root.remove_class(&self.config.marker_class);
            }
        }

        if let Some(storage) = self.host.storage.as_mut() {
            if let Err(err) = storage.set(&self.config.storage_key, theme.as_str()) {
                tracing::warn!(
                    key = %self.config.storage_key,
                    theme = %theme,
                    error = %err,
                    "failed to persist theme"
                );
            }
        }
    }
}
