use serde::{Deserialize, Serialize};

use crate::chrome::Theme;
use crate::nodes::{SortState, ViewMode};
use crate::panels::{MAX_MAIN_WIDTH_PCT, MIN_MAIN_WIDTH_PCT};

/// Current on-disk schema version of the settings file.
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

/// The whitelisted projection of the store that survives across sessions.
///
/// Every field carries a serde default so a file written by an older client
/// (including one without `schema_version`, which is treated as version 1)
/// loads field-by-field instead of failing wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSettings {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub sidebar_collapsed: bool,
    #[serde(default)]
    pub view_mode: ViewMode,
    #[serde(default)]
    pub sort: SortState,
    #[serde(default = "default_main_width")]
    pub main_panel_width_pct: f64,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            schema_version: SETTINGS_SCHEMA_VERSION,
            theme: Theme::default(),
            sidebar_collapsed: false,
            view_mode: ViewMode::default(),
            sort: SortState::default(),
            main_panel_width_pct: default_main_width(),
        }
    }
}

impl PersistedSettings {
    /// Re-establish invariants on values read from disk.
    ///
    /// A hand-edited or stale file may carry an out-of-range width; the
    /// [20, 80] invariant must hold from the first frame, so it is clamped
    /// here rather than trusted. Also stamps the current schema version.
    pub fn normalized(mut self) -> Self {
        let clamped = self
            .main_panel_width_pct
            .clamp(MIN_MAIN_WIDTH_PCT, MAX_MAIN_WIDTH_PCT);
        if clamped != self.main_panel_width_pct {
            tracing::warn!(
                event = "store.settings.width_clamped_on_load",
                stored = self.main_panel_width_pct,
                clamped
            );
            self.main_panel_width_pct = clamped;
        }
        self.schema_version = SETTINGS_SCHEMA_VERSION;
        self
    }
}

/// Result of loading settings from disk.
///
/// `settings` is `None` when no file existed or the file could not be used;
/// `load_error` carries a user-facing message in the latter case.
#[derive(Debug, Clone, Default)]
pub struct SettingsData {
    pub settings: Option<PersistedSettings>,
    pub load_error: Option<String>,
}

fn default_schema_version() -> u32 {
    // Files written before versioning have no schema_version field.
    1
}

fn default_main_width() -> f64 {
    50.0
}
