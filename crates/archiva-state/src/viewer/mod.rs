//! Document viewer state.
//!
//! Page navigation, zoom, rotation, fit mode, and page selection for the
//! document currently open in the viewer. All numeric input is clamped or
//! normalized silently; no viewer operation can fail.

pub mod types;

pub use types::{
    MAX_ZOOM_PCT, MIN_ZOOM_PCT, Page, ViewerMode, ViewerState, ZOOM_STEP_PCT,
};
