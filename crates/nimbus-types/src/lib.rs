//! Foundation types for Nimbus.
//!
//! The simulated control plane manages three entity collections (instances,
//! repositories, SSH key records). This crate defines those model types,
//! the shell configuration, and the error enum shared by all crates.

pub mod config;
pub mod error;
pub mod model;

pub use config::ShellConfig;
pub use error::{NimbusError, Result};
