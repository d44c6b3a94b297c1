use crate::chrome::ChromeState;
use crate::config::ArchivaConfig;
use crate::nodes::NodesState;
use crate::panels::PanelLayout;
use crate::search::SearchState;
use crate::settings::PersistedSettings;
use crate::viewer::ViewerState;

use super::modal::ModalState;

/// The full view-state snapshot: one field per slice.
///
/// Subscribers read this through a shared borrow after each mutation; the
/// fields are public for reading, but all mutation goes through
/// [`AppStore`](super::AppStore) so invariants and persistence hold.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub chrome: ChromeState,
    pub panels: PanelLayout,
    pub viewer: ViewerState,
    pub nodes: NodesState,
    pub search: SearchState,
    pub modal: ModalState,
}

impl AppState {
    /// Build the default state for a fresh session from config defaults.
    pub(crate) fn from_config(config: &ArchivaConfig) -> Self {
        let mut state = AppState::default();
        state.chrome.theme = config.ui.default_theme;
        state.chrome.active_nav = config.ui.default_nav.clone();
        state.nodes.view_mode = config.ui.default_view_mode;
        state
    }

    /// Project the whitelisted fields out for persistence.
    pub fn persisted_settings(&self) -> PersistedSettings {
        PersistedSettings {
            theme: self.chrome.theme,
            sidebar_collapsed: self.chrome.sidebar_collapsed,
            view_mode: self.nodes.view_mode,
            sort: self.nodes.sort,
            main_panel_width_pct: self.panels.main_width_pct,
            ..Default::default()
        }
    }

    /// Overlay the whitelisted fields from a loaded settings file.
    ///
    /// Everything outside the projection keeps its current (default) value.
    pub(crate) fn apply_settings(&mut self, settings: &PersistedSettings) {
        self.chrome.theme = settings.theme;
        self.chrome.sidebar_collapsed = settings.sidebar_collapsed;
        self.nodes.view_mode = settings.view_mode;
        self.nodes.sort = settings.sort;
        self.panels.main_width_pct = settings.main_panel_width_pct;
    }
}
