//! Persisted settings: the whitelisted projection of the store.
//!
//! Exactly `{schema_version, theme, sidebar_collapsed, view_mode, sort,
//! main_panel_width_pct}` survives across sessions, stored as a single JSON
//! file. Everything else in the store starts from defaults on each load.

pub mod errors;
pub mod persistence;
pub mod types;

pub use errors::SettingsError;
pub use persistence::{load_settings, save_settings};
pub use types::{PersistedSettings, SETTINGS_SCHEMA_VERSION, SettingsData};
