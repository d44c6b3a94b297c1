//! The application view-state store.
//!
//! Centralized state management for the Archiva client. The main type is
//! [`AppStore`], a facade over the per-slice state modules: views read
//! through its accessors, mutate through its methods, and subscribe for
//! synchronous change notifications. Construct one store at application
//! start and pass it by reference; construct a fresh one per test.

pub mod app_state;
pub mod app_store;
pub mod modal;
pub mod subscription;

pub use app_state::AppState;
pub use app_store::AppStore;
pub use modal::ModalState;
pub use subscription::{Slice, SubscriptionId};
