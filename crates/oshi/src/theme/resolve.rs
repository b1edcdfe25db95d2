//! Startup theme resolution.

use super::preference::ThemePreference;
use crate::config::ThemeConfig;
use crate::host::Host;

/// Determines the theme a freshly mounted store starts with.
///
/// First match wins:
///
/// 1. No storage port: [`ThemePreference::Light`]
/// 2. The storage key holds exactly `"light"` or `"dark"`: that value
/// 3. The document root carries the marker class: [`ThemePreference::Dark`]
/// 4. Otherwise: [`ThemePreference::Light`]
///
/// Malformed stored values and storage read failures are treated as an
/// absent entry. Neither is reported to the caller.
pub fn get_initial(host: &Host, config: &ThemeConfig) -> ThemePreference {
    if host.is_headless() {
        return ThemePreference::Light;
    }

    match host.read(&config.storage_key) {
        Ok(Some(stored)) => match ThemePreference::from_stored(&stored) {
            Some(theme) => return theme,
            None => tracing::debug!(
                key = %config.storage_key,
                value = %stored,
                "ignoring unrecognized persisted theme"
            ),
        },
        Ok(None) => {}
        Err(err) => tracing::debug!(
            key = %config.storage_key,
            error = %err,
            "persisted theme unreadable, treating as absent"
        ),
    }

    if host.root_has_class(&config.marker_class) {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    }
}
