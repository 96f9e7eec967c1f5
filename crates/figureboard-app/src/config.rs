//! Shell configuration.

use crate::error::{ShellError, ShellResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "FIGUREBOARD_CONFIG";

/// Configuration for the console shell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Banner printed once at startup (empty = no banner).
    pub title: String,
    /// Print the command menu before every selection prompt.
    pub show_menu: bool,
    /// Print a message when a command references an unknown figure id.
    pub report_missing: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Figureboard".to_string(),
            show_menu: true,
            report_missing: false,
        }
    }
}

impl AppConfig {
    /// Load the config named by `FIGUREBOARD_CONFIG`, or the defaults when unset.
    pub fn load() -> ShellResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Read a JSON config file. Missing fields take their default values.
    pub fn from_path(path: &Path) -> ShellResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| ShellError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json).map_err(|source| ShellError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Deserialize a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.show_menu);
        assert!(!config.report_missing);
        assert_eq!(config.title, "Figureboard");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "report_missing": true }"#).unwrap();
        assert!(config.report_missing);
        assert!(config.show_menu);
        assert_eq!(config.title, "Figureboard");
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(AppConfig::from_json(r#"{ "colour": "red" }"#).is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "title": "", "show_menu": false }}"#).unwrap();

        let config = AppConfig::from_path(file.path()).unwrap();
        assert!(config.title.is_empty());
        assert!(!config.show_menu);
        assert!(!config.report_missing);
    }

    #[test]
    fn test_from_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            AppConfig::from_path(&missing),
            Err(ShellError::ConfigRead { .. })
        ));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "not json").unwrap();
        assert!(matches!(
            AppConfig::from_path(&bad),
            Err(ShellError::Config { .. })
        ));
    }
}
