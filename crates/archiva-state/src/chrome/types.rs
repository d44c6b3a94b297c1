use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Color theme for the application chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    /// Archiva ships dark-first; this is the out-of-the-box theme.
    #[default]
    Dark,
}

impl Theme {
    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Lifecycle status of a tenant account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    Active,
    Suspended,
    Trial,
    Cancelled,
}

/// Display data for the signed-in user.
///
/// This is view-model state fed by the auth collaborator after login. It is
/// never consulted for authorization decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: Option<String>,
    pub tenant_id: String,
    pub roles: Vec<String>,
}

/// Display data for the active tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub status: TenantStatus,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
}

/// Urgency of a pending workflow task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// A workflow step awaiting action by the signed-in user.
///
/// Shown in the task inbox; refreshed wholesale from the workflow API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTask {
    pub id: String,
    pub instance_id: String,
    pub step_name: String,
    pub document_id: String,
    pub document_title: String,
    pub workflow_name: String,
    pub assigned_at: DateTime<Utc>,
    pub deadline: Option<DateTime<Utc>>,
    pub priority: TaskPriority,
}

/// Chrome slice: theme, session display data, sidebar, navigation, tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeState {
    pub theme: Theme,
    pub user: Option<User>,
    pub tenant: Option<Tenant>,
    pub sidebar_collapsed: bool,
    pub active_nav: String,
    pub pending_tasks: Vec<PendingTask>,
}

impl Default for ChromeState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            user: None,
            tenant: None,
            sidebar_collapsed: false,
            active_nav: "dashboard".to_string(),
            pending_tasks: Vec::new(),
        }
    }
}

impl ChromeState {
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    pub fn set_tenant(&mut self, tenant: Option<Tenant>) {
        self.tenant = tenant;
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.sidebar_collapsed = collapsed;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn set_active_nav(&mut self, nav: String) {
        self.active_nav = nav;
    }

    /// Replace the task inbox wholesale with a fresh list from the API.
    pub fn set_pending_tasks(&mut self, tasks: Vec<PendingTask>) {
        self.pending_tasks = tasks;
    }
}
