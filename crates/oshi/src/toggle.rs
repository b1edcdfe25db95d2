//! The theme toggle control.

use minijinja::{context, AutoEscape, Environment};
use once_cell::sync::Lazy;

use crate::theme::{ThemePreference, ThemeStore};
use crate::Error;

/// Ghost variant, small size.
const BUTTON_CLASS: &str = "inline-flex items-center justify-center rounded-md text-sm font-medium \
transition-colors hover:bg-accent hover:text-accent-foreground focus-visible:outline-none \
focus-visible:ring-2 focus-visible:ring-ring h-9 px-3";

const BUTTON_TEMPLATE: &str = r#"<button type="button" class="{{ class }}" aria-label="{{ label }}" data-theme="{{ theme }}">{{ glyph }}</button>"#;

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env
});

/// A single button showing the current theme and flipping it on activation.
///
/// The control holds no state of its own: it reads the theme from a
/// [`ThemeStore`] when rendered and calls [`ThemeStore::toggle`] when
/// activated. Its accessible label is the same in both themes.
///
/// # Example
///
/// ```rust
/// use oshi::{ThemePreference, ThemeStore, ThemeToggle};
///
/// let mut store = ThemeStore::new(ThemePreference::Light);
/// assert_eq!(ThemeToggle::glyph(store.theme()), "☀️");
///
/// ThemeToggle::activate(&mut store);
/// let html = ThemeToggle::render_html(store.theme()).unwrap();
/// assert!(html.contains("🌙"));
/// assert!(html.contains(r#"aria-label="Toggle theme""#));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeToggle;

impl ThemeToggle {
    /// Accessible label, independent of the current theme.
    pub const LABEL: &'static str = "Toggle theme";

    /// Moon for dark, sun for light.
    pub fn glyph(theme: ThemePreference) -> &'static str {
        match theme {
            ThemePreference::Dark => "🌙",
            ThemePreference::Light => "☀️",
        }
    }

    /// Renders the control as an HTML button.
    pub fn render_html(theme: ThemePreference) -> Result<String, Error> {
        let html = TEMPLATES.render_str(
            BUTTON_TEMPLATE,
            context! {
                class => BUTTON_CLASS,
                label => Self::LABEL,
                theme => theme.as_str(),
                glyph => Self::glyph(theme),
            },
        )?;
        Ok(html)
    }

    /// Handles a click or tap: toggles exactly once.
    pub fn activate(store: &mut ThemeStore) {
        store.toggle();
    }

    /// Handles a key press with button semantics.
    ///
    /// `"Enter"` and `" "` (the Space key value) activate the control;
    /// returns whether the key did.
    pub fn handle_key(key: &str, store: &mut ThemeStore) -> bool {
        match key {
            "Enter" | " " => {
                Self::activate(store);
                true
            }
            _ => false,
        }
    }
}
