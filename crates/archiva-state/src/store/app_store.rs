use serde_json::Value;

use crate::chrome::{PendingTask, Tenant, Theme, User};
use crate::config::{self, ArchivaConfig};
use crate::nodes::{NodeItem, SortBy, SortOrder, TreeNode, ViewMode};
use crate::panels::PanelContent;
use crate::search::SearchFilterUpdate;
use crate::settings::{self, PersistedSettings, SettingsData};
use crate::viewer::{Page, ViewerMode};

use super::app_state::AppState;
use super::modal::ModalState;
use super::subscription::{Slice, SubscriberFn, SubscriptionId};

/// The application view-state store.
///
/// Single source of truth for all transient UI state. State is private -
/// views read through the slice accessors and mutate through the methods
/// below, which maintain invariants, persist the whitelisted projection,
/// and notify subscribers synchronously after each change.
///
/// Every operation is a total function over the current state: out-of-range
/// numeric input is clamped, unknown ids are harmless no-ops, nothing
/// returns an error. Fallibility lives in the data-fetching collaborators
/// that feed these slices, not here.
pub struct AppStore {
    state: AppState,
    subscribers: Vec<(SubscriptionId, SubscriberFn)>,
    next_subscription: u64,
    /// Load failures that should be shown to the user in a banner.
    startup_errors: Vec<String>,
    /// Disabled for in-memory stores (tests, embedding hosts that manage
    /// persistence themselves).
    persist_to_disk: bool,
}

impl AppStore {
    /// Create the store for a running application: load config defaults and
    /// the persisted projection from disk, and persist on every change.
    pub fn new() -> Self {
        let config = match config::load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    event = "store.config.load_failed",
                    error = %e,
                    "Falling back to built-in defaults"
                );
                ArchivaConfig::default()
            }
        };
        Self::with_config(config)
    }

    /// Disk-backed store with an explicit config (skips the config file).
    pub fn with_config(config: ArchivaConfig) -> Self {
        Self::from_parts(config, settings::load_settings(), true)
    }

    /// In-memory store seeded from an already-loaded projection.
    ///
    /// Never writes to disk. Used by tests and by hosts that manage
    /// persistence themselves. The settings are normalized the same way as
    /// on a disk load, so invariants hold no matter where they came from.
    pub fn from_settings(settings: PersistedSettings) -> Self {
        Self::from_parts(
            ArchivaConfig::default(),
            SettingsData {
                settings: Some(settings.normalized()),
                load_error: None,
            },
            false,
        )
    }

    fn from_parts(config: ArchivaConfig, data: SettingsData, persist_to_disk: bool) -> Self {
        let mut startup_errors = Vec::new();
        if let Some(load_error) = data.load_error {
            startup_errors.push(load_error);
        }

        let mut state = AppState::from_config(&config);
        if let Some(ref persisted) = data.settings {
            state.apply_settings(persisted);
        }

        Self {
            state,
            subscribers: Vec::new(),
            next_subscription: 0,
            startup_errors,
            persist_to_disk,
        }
    }

    // =========================================================================
    // Read contract
    // =========================================================================

    /// The full current state snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn chrome(&self) -> &crate::chrome::ChromeState {
        &self.state.chrome
    }

    pub fn panels(&self) -> &crate::panels::PanelLayout {
        &self.state.panels
    }

    pub fn viewer(&self) -> &crate::viewer::ViewerState {
        &self.state.viewer
    }

    pub fn nodes(&self) -> &crate::nodes::NodesState {
        &self.state.nodes
    }

    pub fn search(&self) -> &crate::search::SearchState {
        &self.state.search
    }

    pub fn modal(&self) -> &ModalState {
        &self.state.modal
    }

    /// Project the whitelisted fields out for persistence.
    pub fn persisted_settings(&self) -> PersistedSettings {
        self.state.persisted_settings()
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Register a subscriber, notified synchronously after each mutation in
    /// registration order. See [`Slice`] for the notification granularity.
    pub fn subscribe(&mut self, f: impl Fn(&AppState, Slice) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a subscriber. Removing an unknown id is a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    fn notify(&self, slice: Slice) {
        for (_, f) in &self.subscribers {
            f(&self.state, slice);
        }
    }

    /// Write the whitelisted projection after a mutation that touched it.
    /// Fire-and-forget: a failed write is logged, never surfaced.
    fn persist(&self) {
        if !self.persist_to_disk {
            return;
        }
        if let Err(e) = settings::save_settings(&self.state.persisted_settings()) {
            tracing::warn!(
                event = "store.settings.save_failed",
                error = %e,
                "Settings write failed - preferences will not survive this session"
            );
        }
    }

    // =========================================================================
    // Startup error banner facade
    // =========================================================================

    /// Errors from loading persisted state that the user should see.
    pub fn startup_errors(&self) -> &[String] {
        &self.startup_errors
    }

    pub fn has_startup_errors(&self) -> bool {
        !self.startup_errors.is_empty()
    }

    /// Dismiss all startup errors (user acknowledged them).
    pub fn dismiss_startup_errors(&mut self) {
        self.startup_errors.clear();
    }

    // =========================================================================
    // Chrome facade methods
    // =========================================================================

    /// Set the theme. Persisted immediately; the view layer reacts to the
    /// `Chrome` notification by toggling its global dark style flag.
    pub fn set_theme(&mut self, theme: Theme) {
        self.state.chrome.set_theme(theme);
        self.persist();
        self.notify(Slice::Chrome);
    }

    pub fn toggle_theme(&mut self) {
        self.state.chrome.toggle_theme();
        self.persist();
        self.notify(Slice::Chrome);
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.state.chrome.set_user(user);
        self.notify(Slice::Chrome);
    }

    pub fn set_tenant(&mut self, tenant: Option<Tenant>) {
        self.state.chrome.set_tenant(tenant);
        self.notify(Slice::Chrome);
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.state.chrome.set_sidebar_collapsed(collapsed);
        self.persist();
        self.notify(Slice::Chrome);
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.chrome.toggle_sidebar();
        self.persist();
        self.notify(Slice::Chrome);
    }

    pub fn set_active_nav(&mut self, nav: String) {
        self.state.chrome.set_active_nav(nav);
        self.notify(Slice::Chrome);
    }

    pub fn set_pending_tasks(&mut self, tasks: Vec<PendingTask>) {
        self.state.chrome.set_pending_tasks(tasks);
        self.notify(Slice::Chrome);
    }

    // =========================================================================
    // Panel facade methods
    // =========================================================================

    /// Set the main panel width in percent, clamped into [20, 80].
    /// Persisted immediately.
    pub fn set_main_panel_width(&mut self, pct: f64) {
        self.state.panels.set_main_width(pct);
        self.persist();
        self.notify(Slice::Panels);
    }

    pub fn set_secondary_visible(&mut self, visible: bool) {
        self.state.panels.set_secondary_visible(visible);
        self.notify(Slice::Panels);
    }

    pub fn set_main_panel(&mut self, content: PanelContent, node_id: Option<String>) {
        self.state.panels.set_main_panel(content, node_id);
        self.notify(Slice::Panels);
    }

    pub fn set_secondary_panel(&mut self, content: PanelContent, node_id: Option<String>) {
        self.state.panels.set_secondary_panel(content, node_id);
        self.notify(Slice::Panels);
    }

    /// Exchange main and secondary panel contents atomically.
    pub fn swap_panels(&mut self) {
        self.state.panels.swap_panels();
        self.notify(Slice::Panels);
    }

    // =========================================================================
    // Viewer facade methods
    // =========================================================================

    /// Switch the viewer to another document; resets page navigation and
    /// page selection. See [`ViewerState::set_current_document`].
    pub fn set_current_document(&mut self, id: Option<String>) {
        self.state.viewer.set_current_document(id);
        self.notify(Slice::Viewer);
    }

    pub fn set_pages(&mut self, pages: Vec<Page>) {
        self.state.viewer.set_pages(pages);
        self.notify(Slice::Viewer);
    }

    pub fn next_page(&mut self) {
        self.state.viewer.next_page();
        self.notify(Slice::Viewer);
    }

    pub fn previous_page(&mut self) {
        self.state.viewer.previous_page();
        self.notify(Slice::Viewer);
    }

    pub fn go_to_page(&mut self, index: usize) {
        self.state.viewer.go_to_page(index);
        self.notify(Slice::Viewer);
    }

    pub fn set_zoom(&mut self, pct: i32) {
        self.state.viewer.set_zoom(pct);
        self.notify(Slice::Viewer);
    }

    pub fn zoom_in(&mut self) {
        self.state.viewer.zoom_in();
        self.notify(Slice::Viewer);
    }

    pub fn zoom_out(&mut self) {
        self.state.viewer.zoom_out();
        self.notify(Slice::Viewer);
    }

    pub fn rotate_clockwise(&mut self) {
        self.state.viewer.rotate_clockwise();
        self.notify(Slice::Viewer);
    }

    pub fn rotate_counterclockwise(&mut self) {
        self.state.viewer.rotate_counterclockwise();
        self.notify(Slice::Viewer);
    }

    pub fn set_fit_to_width(&mut self, fit: bool) {
        self.state.viewer.set_fit_to_width(fit);
        self.notify(Slice::Viewer);
    }

    pub fn toggle_fit_to_width(&mut self) {
        self.state.viewer.toggle_fit_to_width();
        self.notify(Slice::Viewer);
    }

    pub fn set_viewer_mode(&mut self, mode: ViewerMode) {
        self.state.viewer.set_mode(mode);
        self.notify(Slice::Viewer);
    }

    pub fn toggle_page_selection(&mut self, index: usize) {
        self.state.viewer.toggle_page_selection(index);
        self.notify(Slice::Viewer);
    }

    pub fn select_page_range(&mut self, a: usize, b: usize) {
        self.state.viewer.select_page_range(a, b);
        self.notify(Slice::Viewer);
    }

    pub fn clear_page_selection(&mut self) {
        self.state.viewer.clear_page_selection();
        self.notify(Slice::Viewer);
    }

    // =========================================================================
    // Nodes facade methods
    // =========================================================================

    pub fn set_current_folder(&mut self, id: Option<String>) {
        self.state.nodes.set_current_folder(id);
        self.notify(Slice::Nodes);
    }

    pub fn set_folder_tree(&mut self, tree: Vec<TreeNode>) {
        self.state.nodes.set_folder_tree(tree);
        self.notify(Slice::Nodes);
    }

    pub fn toggle_folder(&mut self, id: &str) {
        self.state.nodes.toggle_folder(id);
        self.notify(Slice::Nodes);
    }

    pub fn expand_folder(&mut self, id: &str) {
        self.state.nodes.expand_folder(id);
        self.notify(Slice::Nodes);
    }

    pub fn collapse_folder(&mut self, id: &str) {
        self.state.nodes.collapse_folder(id);
        self.notify(Slice::Nodes);
    }

    pub fn set_visible_nodes(&mut self, nodes: Vec<NodeItem>) {
        self.state.nodes.set_visible_nodes(nodes);
        self.notify(Slice::Nodes);
    }

    pub fn toggle_node_selection(&mut self, id: &str) {
        self.state.nodes.toggle_node_selection(id);
        self.notify(Slice::Nodes);
    }

    /// Replace the node selection with the given ids.
    pub fn select_nodes(&mut self, ids: impl IntoIterator<Item = String>) {
        self.state.nodes.select_nodes(ids);
        self.notify(Slice::Nodes);
    }

    pub fn clear_node_selection(&mut self) {
        self.state.nodes.clear_node_selection();
        self.notify(Slice::Nodes);
    }

    /// Replace the sort state. Persisted immediately.
    pub fn set_sorting(&mut self, by: SortBy, order: SortOrder) {
        self.state.nodes.set_sorting(by, order);
        self.persist();
        self.notify(Slice::Nodes);
    }

    /// Switch between list and grid rendering. Persisted immediately.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.nodes.set_view_mode(mode);
        self.persist();
        self.notify(Slice::Nodes);
    }

    // =========================================================================
    // Search facade methods
    // =========================================================================

    pub fn set_search_query(&mut self, query: String) {
        self.state.search.set_query(query);
        self.notify(Slice::Search);
    }

    pub fn set_searching(&mut self, searching: bool) {
        self.state.search.set_searching(searching);
        self.notify(Slice::Search);
    }

    pub fn set_search_results(&mut self, results: Vec<NodeItem>) {
        self.state.search.set_results(results);
        self.notify(Slice::Search);
    }

    /// Shallow-merge the provided filter keys, preserving the others.
    pub fn set_search_filters(&mut self, update: SearchFilterUpdate) {
        self.state.search.apply_filter_update(update);
        self.notify(Slice::Search);
    }

    pub fn clear_search_filters(&mut self) {
        self.state.search.clear_filters();
        self.notify(Slice::Search);
    }

    // =========================================================================
    // Modal facade methods
    // =========================================================================

    /// Open a modal. If one is already open it is replaced, payload and all:
    /// last write wins, no stacking, no queueing.
    pub fn open_modal(&mut self, tag: impl Into<String>, data: Option<Value>) {
        self.state.modal = ModalState::open(tag, data);
        self.notify(Slice::Modal);
    }

    /// Close any open modal.
    pub fn close_modal(&mut self) {
        self.state.modal = ModalState::None;
        self.notify(Slice::Modal);
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}
