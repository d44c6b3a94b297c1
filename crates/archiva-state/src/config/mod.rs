//! Startup configuration for the Archiva client.
//!
//! Supplies the defaults a fresh store starts from when no persisted state
//! exists yet. Loaded from `~/.archiva/config.toml`; a missing file is not an
//! error. Values the user has since changed in the UI live in the persisted
//! settings file and take precedence over these defaults.

pub mod loading;
pub mod types;

pub use loading::load_config;
pub use types::{ArchivaConfig, UiDefaults};
