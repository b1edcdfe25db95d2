//! Shared design-token preset.
//!
//! Both consumer sites extend the same Tailwind preset. Every color points at
//! a CSS variable so the palette switches with the root marker class, and the
//! `darkMode` strategy is derived from [`ThemeConfig::marker_class`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{ThemeConfig, DEFAULT_MARKER_CLASS};
use crate::Error;

/// Steps in the mauve scale.
const MAUVE_STEPS: u8 = 12;

/// A color entry in the preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// A single CSS value.
    Token(String),
    /// A surface color with its readable foreground.
    Pair {
        #[serde(rename = "DEFAULT")]
        default: String,
        foreground: String,
    },
    /// A numbered scale.
    Scale(BTreeMap<u8, String>),
}

impl ColorValue {
    fn var(name: &str) -> Self {
        ColorValue::Token(css_var(name))
    }

    fn pair(name: &str) -> Self {
        ColorValue::Pair {
            default: css_var(name),
            foreground: css_var(&format!("{name}-foreground")),
        }
    }

    fn scale(name: &str, steps: u8) -> Self {
        ColorValue::Scale(
            (1..=steps)
                .map(|step| (step, css_var(&format!("{name}-{step}"))))
                .collect(),
        )
    }
}

fn css_var(name: &str) -> String {
    format!("var(--{name})")
}

/// The Tailwind preset shared by the component library and its sites.
///
/// # Example
///
/// ```rust
/// use oshi::{TailwindPreset, ThemeConfig};
///
/// let preset = TailwindPreset::new(&ThemeConfig::default());
/// assert_eq!(preset.dark_mode, vec!["class".to_string()]);
///
/// let json = preset.to_json().unwrap();
/// assert!(json.contains("var(--mauve-9)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindPreset {
    pub dark_mode: Vec<String>,
    pub theme: PresetTheme,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetTheme {
    pub extend: PresetExtend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetExtend {
    pub colors: BTreeMap<String, ColorValue>,
    pub border_radius: BTreeMap<String, String>,
}

impl TailwindPreset {
    /// Builds the preset, keyed to the configured marker class.
    pub fn new(config: &ThemeConfig) -> Self {
        let dark_mode = if config.marker_class == DEFAULT_MARKER_CLASS {
            vec!["class".to_string()]
        } else {
            vec!["class".to_string(), format!(".{}", config.marker_class)]
        };

        let mut colors = BTreeMap::new();
        colors.insert("mauve".to_string(), ColorValue::scale("mauve", MAUVE_STEPS));
        for name in ["border", "input", "ring", "background", "foreground"] {
            colors.insert(name.to_string(), ColorValue::var(name));
        }
        for name in ["primary", "secondary", "muted", "accent", "popover", "card"] {
            colors.insert(name.to_string(), ColorValue::pair(name));
        }
        colors.insert(
            "destructive".to_string(),
            ColorValue::Pair {
                default: "var(--destructive, hsl(0 84% 60%))".to_string(),
                foreground: "var(--destructive-foreground, hsl(0 0% 100%))".to_string(),
            },
        );

        let border_radius = BTreeMap::from([
            ("lg".to_string(), "var(--radius)".to_string()),
            ("md".to_string(), "calc(var(--radius) - 2px)".to_string()),
            ("sm".to_string(), "calc(var(--radius) - 4px)".to_string()),
        ]);

        Self {
            dark_mode,
            theme: PresetTheme {
                extend: PresetExtend {
                    colors,
                    border_radius,
                },
            },
        }
    }

    /// Every CSS custom property the preset references, sorted.
    pub fn css_variables(&self) -> Vec<String> {
        let mut values = Vec::new();
        for color in self.theme.extend.colors.values() {
            match color {
                ColorValue::Token(value) => values.push(value.as_str()),
                ColorValue::Pair {
                    default,
                    foreground,
                } => {
                    values.push(default.as_str());
                    values.push(foreground.as_str());
                }
                ColorValue::Scale(steps) => values.extend(steps.values().map(String::as_str)),
            }
        }
        values.extend(self.theme.extend.border_radius.values().map(String::as_str));

        let mut names: Vec<String> = values
            .into_iter()
            .filter_map(|value| {
                let start = value.find("var(--")? + "var(".len();
                let rest = &value[start..];
                let end = rest.find([',', ')'])?;
                Some(rest[..end].to_string())
            })
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Serializes the preset as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for TailwindPreset {
    fn default() -> Self {
        Self::new(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_dark_mode_follows_marker() {
        let preset = TailwindPreset::default();
        assert_eq!(preset.dark_mode, vec!["class"]);

        let config = ThemeConfig {
            marker_class: "night".to_string(),
            ..ThemeConfig::default()
        };
        let preset = TailwindPreset::new(&config);
        assert_eq!(preset.dark_mode, vec!["class", ".night"]);
    }

    #[test]
    fn test_json_shape() {
        let json = TailwindPreset::default().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["darkMode"][0], "class");
        let colors = &value["theme"]["extend"]["colors"];
        assert_eq!(colors["mauve"]["1"], "var(--mauve-1)");
        assert_eq!(colors["mauve"]["12"], "var(--mauve-12)");
        assert!(colors["mauve"]["13"].is_null());
        assert_eq!(colors["ring"], "var(--ring)");
        assert_eq!(colors["primary"]["DEFAULT"], "var(--primary)");
        assert_eq!(colors["primary"]["foreground"], "var(--primary-foreground)");
        assert_eq!(
            colors["destructive"]["DEFAULT"],
            "var(--destructive, hsl(0 84% 60%))"
        );

        let radius = &value["theme"]["extend"]["borderRadius"];
        assert_eq!(radius["lg"], "var(--radius)");
        assert_eq!(radius["sm"], "calc(var(--radius) - 4px)");
    }

    #[test]
    fn test_css_variables() {
        let names = TailwindPreset::default().css_variables();
        assert!(names.contains(&"--mauve-7".to_string()));
        assert!(names.contains(&"--card-foreground".to_string()));
        assert!(names.contains(&"--destructive".to_string()));
        assert!(names.contains(&"--radius".to_string()));
        assert_eq!(names.iter().filter(|n| *n == "--radius").count(), 1);
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }
}
