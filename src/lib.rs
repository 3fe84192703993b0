//! Barlekha Directory: a Zellij plugin for browsing and curating a local
//! business directory.
//!
//! The plugin keeps an in-memory collection of listings (name, category,
//! address, phone, rating, image URL, coordinates) and provides:
//! - Live filtering by free-text query, category and minimum rating
//! - A category option set derived from the collection
//! - Adding, editing and deleting listings through a draft form
//! - Map links for each listing's coordinates
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Key mapping, side effects
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Session state
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store         │   │ Filter        │
//! │ (ui/)         │   │ (store/)      │   │ (filter/)     │
//! │ - Rendering   │   │ - Collection  │   │ - Criteria    │
//! │ - Theming     │   │ - Draft       │   │ - Visible set │
//! │ - Components  │   │ - Edit cursor │   │ - Categories  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Listing, draft, numeric text (domain/)           │
//! │  - Seed data, error types (domain/)                 │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/barlekha-directory.wasm" {
//!         theme "catppuccin-latte"
//!         seed_file "~/directory/listings.toml"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use barlekha_directory::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! assert_eq!(state.store().len(), 2);
//!
//! for event in [Event::SearchMode, Event::Char('c'), Event::Char('a'), Event::Submit] {
//!     handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.visible_rows().len(), 1);
//! # Ok::<(), barlekha_directory::DirectoryError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod filter;
pub mod infrastructure;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{DirectoryError, Listing, ListingId, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

use domain::seed::{builtin_seed, load_seed_file};
use infrastructure::paths::{resolve_config_path, strip_host_prefix};

/// Plugin configuration parsed from Zellij's configuration map.
///
/// ```kdl
/// plugin location="file:/path/to/barlekha-directory.wasm" {
///     theme "catppuccin-mocha"
///     theme_file "~/.config/barlekha/theme.toml"
///     seed_file "~/directory/listings.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    ///
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Path to a TOML seed file replacing the built-in listings.
    pub seed_file: Option<String>,
}

impl Config {
    /// Reads the recognised keys from Zellij's map; blank values count as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use barlekha_directory::Config;
    ///
    /// let map = BTreeMap::from([
    ///     ("theme".to_string(), "catppuccin-latte".to_string()),
    ///     ("seed_file".to_string(), "  ".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.seed_file, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
            seed_file: get("seed_file"),
        }
    }
}

/// Builds the session state: theme and seed listings per `config`.
///
/// Neither a bad theme nor a bad seed file prevents startup; both fall back
/// to the built-in defaults and log why.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize",
        theme = ?config.theme_name,
        seed_file = ?config.seed_file
    ).entered();

    let theme = load_theme(config);
    let listings = load_listings(config);
    tracing::debug!(theme = %theme.name, listing_count = listings.len(), "session initialized");

    AppState::new(listings, theme)
}

/// Resolves the theme from `theme_file`, then `theme_name`, then the default.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = resolve_config_path(theme_file);
        match Theme::from_file(&path) {
            Ok(theme) => return theme,
            Err(e) => tracing::warn!(
                theme_file = %strip_host_prefix(&path.to_string_lossy()),
                error = %e,
                "failed to load theme file, using default"
            ),
        }
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Loads the seed listings from `seed_file`, falling back to the built-in set.
#[must_use]
pub fn load_listings(config: &Config) -> Vec<Listing> {
    let Some(seed_file) = &config.seed_file else {
        return builtin_seed();
    };

    let path = resolve_config_path(seed_file);
    match load_seed_file(&path) {
        Ok(listings) => {
            tracing::debug!(count = listings.len(), "seed file loaded");
            listings
        }
        Err(e) => {
            tracing::warn!(
                seed_file = %strip_host_prefix(&path.to_string_lossy()),
                error = %e,
                "failed to load seed file, using built-in listings"
            );
            builtin_seed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn unknown_keys_are_ignored() {
        let map = BTreeMap::from([
            ("scan_paths".to_string(), "~/Projects".to_string()),
            ("trace_level".to_string(), "debug".to_string()),
        ]);
        let config = Config::from_zellij(&map);
        assert_eq!(
            config,
            Config {
                trace_level: Some("debug".to_string()),
                ..Config::default()
            }
        );
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = NamedTempFile::new().unwrap();
        let mut latte = Theme::from_name("catppuccin-latte").unwrap();
        latte.name = "custom".to_string();
        file.write_all(toml::to_string(&latte).unwrap().as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-mocha".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert_eq!(load_theme(&config).name, "custom");
    }

    #[test]
    fn bad_theme_settings_fall_back() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&config).name, "catppuccin-latte");

        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&config).name, "catppuccin-mocha");
    }

    #[test]
    fn seed_file_replaces_builtin_listings() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[[listings]]\nname = \"Tea Stall\"\ncategory = \"Restaurant\"\n")
            .unwrap();

        let config = Config {
            seed_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.store().len(), 1);
        assert_eq!(state.categories(), ["All", "Restaurant"]);
    }

    #[test]
    fn broken_seed_file_falls_back_to_builtin() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[[listings]]\nname = 3\n").unwrap();

        let config = Config {
            seed_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert_eq!(load_listings(&config), builtin_seed());
    }
}
