//! OS color scheme detection.
//!
//! Hosts use this to seed the document root marker before resolution, the
//! way a page's pre-paint script honors `prefers-color-scheme`. It never
//! overrides a persisted preference.

use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

use super::preference::ThemePreference;

type SystemDetector = fn() -> ThemePreference;

static SYSTEM_DETECTOR: Lazy<Mutex<SystemDetector>> = Lazy::new(|| Mutex::new(os_detector));

/// Overrides the detector consulted by [`system_theme`].
///
/// Useful for tests, or to force a mode regardless of OS settings.
pub fn set_system_detector(detector: SystemDetector) {
    let mut guard = SYSTEM_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Returns the color scheme the OS currently prefers.
pub fn system_theme() -> ThemePreference {
    let detector = SYSTEM_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_detector() -> ThemePreference {
    match detect_os_theme() {
        OsThemeMode::Dark => ThemePreference::Dark,
        _ => ThemePreference::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_detector_override() {
        set_system_detector(|| ThemePreference::Dark);
        assert_eq!(system_theme(), ThemePreference::Dark);

        set_system_detector(|| ThemePreference::Light);
        assert_eq!(system_theme(), ThemePreference::Light);

        set_system_detector(os_detector);
    }
}
