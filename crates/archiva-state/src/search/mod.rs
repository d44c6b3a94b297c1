//! Search state.
//!
//! Query text, result list, in-flight flag, and filters. Filter updates are
//! partial merges: only the keys a caller provides are touched, everything
//! else is preserved.

pub mod types;

pub use types::{DateRange, SearchFilterUpdate, SearchFilters, SearchState};
