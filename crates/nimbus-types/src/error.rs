//! Error types for Nimbus.

use std::io;

/// Errors produced by the Nimbus shell.
///
/// `Usage` and `NotFound` are the two recoverable command-level taxonomies:
/// the dispatcher renders them as the command's text output and the session
/// continues. Nothing here is fatal.
#[derive(Debug, thiserror::Error)]
pub enum NimbusError {
    /// Wrong argument count or shape. The payload is the usage hint shown
    /// to the user.
    #[error("{0}")]
    Usage(String),

    /// A referenced instance/repository/key name does not exist. The payload
    /// is the full "<name> not found" message.
    #[error("{0}")]
    NotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NimbusError>;
