//! Library error type.

use thiserror::Error;

/// Errors surfaced at the library's string and serialization boundaries.
///
/// Theme resolution and mutation never fail; these variants come from parsing
/// user-supplied input, loading configuration, and rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// A string that is not one of the two theme literals.
    #[error("invalid theme '{0}': expected 'light' or 'dark'")]
    InvalidTheme(String),

    #[error("invalid theme configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("failed to render theme toggle: {0}")]
    Render(#[from] minijinja::Error),

    #[error("failed to serialize preset: {0}")]
    Serialize(#[from] serde_json::Error),
}
