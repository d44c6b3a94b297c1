//! archiva-state: Client view-state store for the Archiva document management UI
//!
//! This library is the single source of truth for all transient and
//! semi-persistent UI state in the Archiva client: dual-panel layout, document
//! viewer navigation, folder tree, selection sets, search filters, and the
//! modal slot. The view layer reads state through [`AppStore`] accessors,
//! mutates it through [`AppStore`] methods only, and re-renders on synchronous
//! change notifications.
//!
//! # Main Entry Points
//!
//! - [`store`] - The [`AppStore`] facade and its change notification contract
//! - [`settings`] - Persisted projection (load/save of whitelisted fields)
//! - [`config`] - Startup defaults from `~/.archiva/config.toml`
//! - [`logging`] - Structured logging initialization

pub mod chrome;
pub mod config;
pub mod errors;
pub mod logging;
pub mod nodes;
pub mod panels;
pub mod search;
pub mod settings;
pub mod store;
pub mod viewer;

// Re-export commonly used types at crate root for convenience
pub use chrome::{ChromeState, PendingTask, TaskPriority, Tenant, TenantStatus, Theme, User};
pub use config::ArchivaConfig;
pub use errors::{AppError, ConfigError};
pub use nodes::{NodeItem, NodeKind, NodesState, SortBy, SortOrder, SortState, TreeNode, ViewMode};
pub use panels::{PanelContent, PanelLayout};
pub use search::{DateRange, SearchFilterUpdate, SearchFilters, SearchState};
pub use settings::{PersistedSettings, SettingsData, SettingsError};
pub use store::{AppState, AppStore, ModalState, Slice, SubscriptionId};
pub use viewer::{Page, ViewerMode, ViewerState};

// Re-export logging initialization
pub use logging::init_logging;
