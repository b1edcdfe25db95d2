//! # Oshi - light/dark theme toggle
//!
//! `oshi` owns the display-mode preference shared by the Oshi component
//! library and the sites built on it. It resolves the initial theme from
//! persisted storage and the document root, keeps both in sync as the theme
//! changes, and renders the toggle control that flips it.
//!
//! ## Quick Start
//!
//! ```rust
//! use oshi::{Host, MemoryRoot, MemoryStorage, ThemeConfig, ThemePreference, ThemeStore, ThemeToggle};
//!
//! let storage = MemoryStorage::new();
//! let root = MemoryRoot::new();
//! let host = Host::new(storage.clone(), root.clone());
//!
//! let mut store = ThemeStore::mount(host, ThemeConfig::default());
//! assert_eq!(store.theme(), ThemePreference::Light);
//!
//! ThemeToggle::activate(&mut store);
//! assert_eq!(store.theme(), ThemePreference::Dark);
//! assert!(root.contains("dark"));
//! assert_eq!(storage.value("theme").as_deref(), Some("dark"));
//! ```
//!
//! ## Resolution
//!
//! [`get_initial`] picks the starting theme, first match wins:
//!
//! 1. No storage port (headless host): light
//! 2. The storage key holds exactly `"light"` or `"dark"`: that value
//! 3. The document root carries the marker class: dark
//! 4. Otherwise: light
//!
//! ## Hosts
//!
//! Storage and the document root are ports ([`ThemeStorage`], [`RootElement`])
//! bundled in a [`Host`]. [`MemoryStorage`] and [`MemoryRoot`] are in-memory
//! adapters; a browser or terminal host supplies its own.
//!
//! ## Design tokens
//!
//! [`TailwindPreset`] produces the shared token preset whose `darkMode`
//! strategy follows the configured marker class.

mod config;
mod error;
pub mod host;
mod preset;
pub mod theme;
mod toggle;

pub use config::ThemeConfig;
pub use error::Error;
pub use host::{Host, MemoryRoot, MemoryStorage, RootElement, StorageError, ThemeStorage};
pub use preset::{ColorValue, PresetExtend, PresetTheme, TailwindPreset};
pub use theme::{
    get_initial, set_system_detector, system_theme, DocumentSync, SubscriptionId,
    ThemeObserver, ThemePreference, ThemeStore,
};
pub use toggle::ThemeToggle;
