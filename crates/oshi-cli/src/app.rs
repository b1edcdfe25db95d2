//! Command-line surface and command handlers.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use console::style;
use oshi::{
    system_theme, Host, MemoryRoot, TailwindPreset, ThemeConfig, ThemePreference, ThemeStorage,
    ThemeStore, ThemeToggle,
};

use crate::file_storage::FileStorage;

/// Inspect and flip the Oshi light/dark theme.
#[derive(Debug, Parser)]
#[command(name = "oshi", version)]
pub struct Cli {
    /// JSON file backing theme storage.
    #[arg(long, global = true, default_value = ".oshi-storage.json")]
    pub state: PathBuf,

    /// YAML file overriding the storage key or marker class.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Class present on the document root before the theme mounts (repeatable).
    #[arg(long = "root-class", global = true)]
    pub root_classes: Vec<String>,

    /// Mark the document root dark when the OS prefers a dark color scheme.
    #[arg(long, global = true)]
    pub follow_system: bool,

    /// Run without storage or document, as an off-screen render would.
    #[arg(long, global = true)]
    pub headless: bool,

    /// Increase log verbosity.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the resolved theme and where it is reflected.
    Status,
    /// Activate the toggle once.
    Toggle,
    /// Assign the theme directly.
    Set {
        /// `light` or `dark`.
        theme: String,
    },
    /// Print the toggle button as HTML.
    Render,
    /// Print the shared Tailwind preset as JSON.
    Preset,
}

/// Executes the parsed command, writing its output to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = load_config(&cli)?;

    if let Command::Preset = cli.command {
        let json = TailwindPreset::new(&config).to_json()?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    let root = seeded_root(&cli, &config);
    let storage = FileStorage::new(&cli.state);
    let host = if cli.headless {
        Host::headless()
    } else {
        Host::new(storage.clone(), root.clone())
    };
    let mut store = ThemeStore::mount(host, config.clone());

    match &cli.command {
        Command::Toggle => ThemeToggle::activate(&mut store),
        Command::Set { theme } => {
            let theme: ThemePreference = theme.parse()?;
            store.set_theme(theme);
        }
        Command::Render => {
            writeln!(out, "{}", ThemeToggle::render_html(store.theme())?)?;
            return Ok(());
        }
        Command::Status | Command::Preset => {}
    }

    write_status(out, &cli, &config, &store, &root, &storage)
}

fn load_config(cli: &Cli) -> Result<ThemeConfig> {
    match &cli.config {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ThemeConfig::from_yaml(&source)
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(ThemeConfig::default()),
    }
}

/// The document root as it stands before the theme mounts.
fn seeded_root(cli: &Cli, config: &ThemeConfig) -> MemoryRoot {
    let mut classes = cli.root_classes.clone();
    if cli.follow_system && system_theme().is_dark() {
        tracing::debug!(marker = %config.marker_class, "OS prefers dark, marking root");
        classes.push(config.marker_class.clone());
    }
    MemoryRoot::with_classes(classes)
}

fn write_status(
    out: &mut impl Write,
    cli: &Cli,
    config: &ThemeConfig,
    store: &ThemeStore,
    root: &MemoryRoot,
    storage: &FileStorage,
) -> Result<()> {
    let theme = store.theme();
    let name = match theme {
        ThemePreference::Dark => style(theme.as_str()).magenta().bold(),
        ThemePreference::Light => style(theme.as_str()).yellow().bold(),
    };
    writeln!(out, "{:<8}{} {}", "theme", name, ThemeToggle::glyph(theme))?;

    if cli.headless {
        writeln!(out, "{:<8}{}", "host", style("headless").dim())?;
        return Ok(());
    }

    writeln!(out, "{:<8}class=\"{}\"", "root", root.class_name())?;
    // Read back rather than trusting the store: failed writes are only logged.
    let persisted = match storage.get(&config.storage_key) {
        Ok(Some(value)) => format!("{}={}", config.storage_key, value),
        Ok(None) => format!("{} {}", config.storage_key, style("(not persisted)").red()),
        Err(err) => {
            tracing::debug!(error = %err, "storage unreadable");
            format!("{} {}", config.storage_key, style("(not persisted)").red())
        }
    };
    writeln!(
        out,
        "{:<8}{} ({})",
        "storage",
        persisted,
        style(storage.path().display()).dim()
    )?;
    Ok(())
}
