//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is visible under `/host`, which
//! maps to the directory Zellij was started from (usually `$HOME`). Paths
//! given in plugin configuration are written from the host's point of view
//! and must be translated before use.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory for trace files: `/host/.local/share/zellij/barlekha-directory`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("barlekha-directory")
}

/// Maps `~` and `~/...` onto the `/host` mount; other paths pass through.
///
/// # Examples
///
/// ```
/// use barlekha_directory::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/listings.toml"), "/host/listings.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/listings.toml"), "/etc/listings.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_ROOT, 1)
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

/// Resolves a configured file path to its location inside the sandbox.
///
/// Tilde paths are expanded and relative paths are taken relative to `/host`.
#[must_use]
pub fn resolve_config_path(path: &str) -> PathBuf {
    let expanded = PathBuf::from(expand_tilde(path.trim()));
    if expanded.is_absolute() {
        expanded
    } else {
        PathBuf::from(HOST_ROOT).join(expanded)
    }
}

/// Removes the `/host` prefix so log messages show host paths.
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix(HOST_ROOT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_host_share() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/barlekha-directory")
        );
    }

    #[test]
    fn configured_paths_resolve_into_the_sandbox() {
        assert_eq!(
            resolve_config_path("~/seeds/barlekha.toml"),
            PathBuf::from("/host/seeds/barlekha.toml")
        );
        assert_eq!(
            resolve_config_path("themes/mine.toml"),
            PathBuf::from("/host/themes/mine.toml")
        );
        assert_eq!(resolve_config_path(" /etc/x.toml "), PathBuf::from("/etc/x.toml"));
    }

    #[test]
    fn host_prefix_is_shown_as_home() {
        assert_eq!(strip_host_prefix("/host/seeds/a.toml"), "~/seeds/a.toml");
        assert_eq!(strip_host_prefix("/host"), "~");
        assert_eq!(strip_host_prefix("/hostile/a.toml"), "/hostile/a.toml");
        assert_eq!(strip_host_prefix("/etc/a.toml"), "/etc/a.toml");
    }
}
