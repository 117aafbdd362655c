//! Player configuration read from the environment.
//!
//! Native builds load a `.env` file first (see [`load_dotenv`]), so the same
//! variables can live in the environment or in the repo-root `.env`.

use crate::ui::ShellKind;

/// Shell layout: `desktop` or `mobile`.
pub const SHELL_ENV: &str = "DICEBOUND_SHELL";
/// Tracing filter used when `RUST_LOG` is not set.
pub const LOG_ENV: &str = "DICEBOUND_LOG";

pub const DEFAULT_LOG_FILTER: &str = "dicebound_player=debug,dioxus=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub shell: ShellKind,
    pub log_filter: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            shell: ShellKind::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl PlayerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Unknown or blank values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let shell = lookup(SHELL_ENV)
            .and_then(|s| ShellKind::from_name(&s))
            .unwrap_or(defaults.shell);

        let log_filter = lookup(LOG_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Self { shell, log_filter }
    }
}

/// Load `.env` from the working directory or its parents, if present.
///
/// Runs before logging is set up, so the caller logs the returned path.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() -> Option<std::path::PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(e) if e.not_found() => None,
        Err(e) => {
            eprintln!("Ignoring unreadable .env file: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = PlayerConfig::from_lookup(|_| None);
        assert_eq!(config, PlayerConfig::default());
        assert_eq!(config.shell, ShellKind::Desktop);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn shell_is_case_insensitive() {
        let config = PlayerConfig::from_lookup(lookup_from(&[(SHELL_ENV, " Mobile ")]));
        assert_eq!(config.shell, ShellKind::Mobile);
    }

    #[test]
    fn unknown_shell_falls_back_to_desktop() {
        let config = PlayerConfig::from_lookup(lookup_from(&[(SHELL_ENV, "tablet")]));
        assert_eq!(config.shell, ShellKind::Desktop);
    }

    #[test]
    fn log_filter_override() {
        let config =
            PlayerConfig::from_lookup(lookup_from(&[(LOG_ENV, "dicebound_player=trace")]));
        assert_eq!(config.log_filter, "dicebound_player=trace");

        let blank = PlayerConfig::from_lookup(lookup_from(&[(LOG_ENV, "  ")]));
        assert_eq!(blank.log_filter, DEFAULT_LOG_FILTER);
    }
}
