//! Cross-cutting application chrome state.
//!
//! Theme, signed-in user/tenant display data, sidebar collapse, active
//! navigation entry, and pending workflow tasks. The `user`/`tenant` fields
//! are informational display state only; authorization decisions belong to
//! the auth collaborator, never to this slice.

pub mod types;

pub use types::{ChromeState, PendingTask, TaskPriority, Tenant, TenantStatus, Theme, User};
