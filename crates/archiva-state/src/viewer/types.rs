use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Minimum zoom, in percent.
pub const MIN_ZOOM_PCT: i32 = 25;
/// Maximum zoom, in percent.
pub const MAX_ZOOM_PCT: i32 = 400;
/// Zoom increment for `zoom_in`/`zoom_out`.
pub const ZOOM_STEP_PCT: i32 = 25;

/// A single page of the open document, as served by the rendition API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub thumbnail_url: Option<String>,
    pub image_url: Option<String>,
}

/// How pages are laid out in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerMode {
    #[default]
    Single,
    Continuous,
    Thumbnails,
}

/// Viewer slice.
///
/// Invariants:
/// - `current_page_index` is within `[0, pages.len() - 1]` whenever pages are
///   loaded, and 0 when they are not.
/// - `zoom_pct` is within [25, 400].
/// - `rotation_degrees` is one of {0, 90, 180, 270}.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    pub current_document_id: Option<String>,
    pub pages: Vec<Page>,
    pub current_page_index: usize,
    pub zoom_pct: i32,
    pub rotation_degrees: u16,
    pub fit_to_width: bool,
    pub selected_pages: BTreeSet<usize>,
    pub mode: ViewerMode,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            current_document_id: None,
            pages: Vec::new(),
            current_page_index: 0,
            zoom_pct: 100,
            rotation_degrees: 0,
            fit_to_width: false,
            selected_pages: BTreeSet::new(),
            mode: ViewerMode::default(),
        }
    }
}

impl ViewerState {
    /// Switch the viewer to another document (or close it with `None`).
    ///
    /// Switching discards the previous document's pages, resets the page
    /// index to 0, and clears the page selection. Zoom, rotation, fit and
    /// view mode are viewing preferences and survive the switch. Setting the
    /// id that is already open is a no-op.
    pub fn set_current_document(&mut self, id: Option<String>) {
        if self.current_document_id == id {
            return;
        }
        self.current_document_id = id;
        self.pages.clear();
        self.current_page_index = 0;
        self.selected_pages.clear();
    }

    /// Replace the page list, resetting navigation to the first page and
    /// clearing the page selection.
    pub fn set_pages(&mut self, pages: Vec<Page>) {
        self.pages = pages;
        self.current_page_index = 0;
        self.selected_pages.clear();
    }

    /// Advance one page, stopping at the last page.
    pub fn next_page(&mut self) {
        if self.current_page_index + 1 < self.pages.len() {
            self.current_page_index += 1;
        }
    }

    /// Go back one page, stopping at the first page.
    pub fn previous_page(&mut self) {
        self.current_page_index = self.current_page_index.saturating_sub(1);
    }

    /// Jump to a page, clamping into the valid index range.
    pub fn go_to_page(&mut self, index: usize) {
        self.current_page_index = match self.pages.len() {
            0 => 0,
            len => index.min(len - 1),
        };
    }

    /// Set the zoom level, clamping into [25, 400].
    pub fn set_zoom(&mut self, pct: i32) {
        self.zoom_pct = pct.clamp(MIN_ZOOM_PCT, MAX_ZOOM_PCT);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom_pct + ZOOM_STEP_PCT);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom_pct - ZOOM_STEP_PCT);
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotation_degrees = (self.rotation_degrees + 90) % 360;
    }

    pub fn rotate_counterclockwise(&mut self) {
        // +270 ≡ -90 (mod 360) without an intermediate negative value.
        self.rotation_degrees = (self.rotation_degrees + 270) % 360;
    }

    pub fn set_fit_to_width(&mut self, fit: bool) {
        self.fit_to_width = fit;
    }

    pub fn toggle_fit_to_width(&mut self) {
        self.fit_to_width = !self.fit_to_width;
    }

    pub fn set_mode(&mut self, mode: ViewerMode) {
        self.mode = mode;
    }

    /// Flip membership of one page index in the selection set.
    ///
    /// Toggling an index past the last page is a no-op, so the selection can
    /// only ever contain indices of pages that exist.
    pub fn toggle_page_selection(&mut self, index: usize) {
        if index >= self.pages.len() {
            return;
        }
        if !self.selected_pages.remove(&index) {
            self.selected_pages.insert(index);
        }
    }

    /// Add the inclusive range between two page indices to the selection.
    ///
    /// The endpoints are normalized with min/max, so a reversed drag
    /// direction produces the same set. The range is capped at the last page
    /// index; with no pages loaded this is a no-op.
    pub fn select_page_range(&mut self, a: usize, b: usize) {
        let Some(last) = self.pages.len().checked_sub(1) else {
            return;
        };
        let lo = a.min(b);
        let hi = a.max(b).min(last);
        if lo > hi {
            return;
        }
        self.selected_pages.extend(lo..=hi);
    }

    pub fn clear_page_selection(&mut self) {
        self.selected_pages.clear();
    }
}
