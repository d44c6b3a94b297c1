//! Dual-panel layout state.
//!
//! Two independently addressable content regions (main/secondary) with a
//! draggable divider. The main panel width is a percentage clamped to
//! [20, 80] so neither panel can be dragged out of existence.

pub mod types;

pub use types::{MAX_MAIN_WIDTH_PCT, MIN_MAIN_WIDTH_PCT, PanelContent, PanelLayout};
