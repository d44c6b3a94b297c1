//! Configuration type definitions for the Archiva client.
//!
//! These types are deserialized from the user's TOML config file.
//!
//! # Example Configuration
//!
//! ```toml
//! [ui]
//! default_theme = "light"
//! default_view_mode = "grid"
//! default_nav = "documents"
//! ```

use serde::{Deserialize, Serialize};

use crate::chrome::Theme;
use crate::nodes::ViewMode;

/// Main configuration loaded from `~/.archiva/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ArchivaConfig {
    /// Defaults applied to a store with no persisted state.
    #[serde(default)]
    pub ui: UiDefaults,
}

/// UI defaults for a fresh session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiDefaults {
    /// Theme used before the user has ever toggled it.
    #[serde(default)]
    pub default_theme: Theme,

    /// Node list rendering used before the user has ever switched it.
    #[serde(default)]
    pub default_view_mode: ViewMode,

    /// Navigation entry selected at startup.
    #[serde(default = "default_nav")]
    pub default_nav: String,
}

impl Default for UiDefaults {
    fn default() -> Self {
        Self {
            default_theme: Theme::default(),
            default_view_mode: ViewMode::default(),
            default_nav: default_nav(),
        }
    }
}

fn default_nav() -> String {
    "dashboard".to_string()
}
