//! Theme preference, resolution, and change propagation.
//!
//! This module provides:
//!
//! - [`ThemePreference`]: The light/dark display mode
//! - [`get_initial`]: Startup resolution from storage and the document root
//! - [`ThemeStore`]: Owner of the current theme with subscribe/notify
//! - [`DocumentSync`]: The subscriber that mirrors the theme into the host
//! - [`system_theme`]: OS color scheme detection with an overridable detector

mod preference;
mod resolve;
mod store;
mod sync;
mod system;

pub use preference::ThemePreference;
pub use resolve::get_initial;
pub use store::{SubscriptionId, ThemeObserver, ThemeStore};
pub use sync::DocumentSync;
pub use system::{set_system_detector, system_theme};
