//! Shell configuration.
//!
//! A small TOML-deserialized config controlling the simulated identity
//! (user, host, home path) and the default key comment. Every field is
//! optional in the file; missing fields fall back to the defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Session-facing configuration for the Nimbus shell.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Name reported by `whoami` and used in the prompt.
    pub username: String,
    /// Simulated host name, used in the prompt and uname output.
    pub hostname: String,
    /// Initial working path for the session.
    pub home: String,
    /// Comment used by ssh-keygen when `-C` is omitted.
    pub default_key_comment: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            hostname: "nimbus".to_string(),
            home: "/home/admin".to_string(),
            default_key_comment: "admin@nimbus".to_string(),
        }
    }
}

impl ShellConfig {
    /// Parse a config from TOML source.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a config file, falling back to defaults with a warning if the
    /// file is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(source) => match Self::from_toml(&source) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("config {path:?} is invalid ({e}) -- using defaults");
                    Self::default()
                },
            },
            Err(_) => {
                log::warn!("config {path:?} not readable -- using defaults");
                Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_identity() {
        let config = ShellConfig::default();
        assert_eq!(config.username, "admin");
        assert_eq!(config.hostname, "nimbus");
        assert_eq!(config.home, "/home/admin");
        assert_eq!(config.default_key_comment, "admin@nimbus");
    }

    #[test]
    fn from_toml_full() {
        let config = ShellConfig::from_toml(
            r#"
            username = "ada"
            hostname = "lab"
            home = "/home/ada"
            default_key_comment = "ada@lab"
            "#,
        )
        .unwrap();
        assert_eq!(config.username, "ada");
        assert_eq!(config.hostname, "lab");
    }

    #[test]
    fn from_toml_partial_uses_defaults() {
        let config = ShellConfig::from_toml("username = \"ada\"").unwrap();
        assert_eq!(config.username, "ada");
        assert_eq!(config.hostname, "nimbus");
    }

    #[test]
    fn from_toml_invalid_errors() {
        assert!(ShellConfig::from_toml("username = [[[").is_err());
    }

    #[test]
    fn load_missing_file_falls_back() {
        let config = ShellConfig::load_or_default(Path::new("/nonexistent/nimbus.toml"));
        assert_eq!(config.username, "admin");
    }
}
