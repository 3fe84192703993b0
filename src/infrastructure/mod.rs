//! Infrastructure layer for sandbox filesystem interactions.
//!
//! The Zellij plugin sandbox mounts the host filesystem under `/host`; this
//! layer translates configured paths and locates the plugin's data directory.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_config_path, strip_host_prefix};
