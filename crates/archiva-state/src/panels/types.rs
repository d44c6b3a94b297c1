use serde::{Deserialize, Serialize};

/// Lower bound for the main panel width, in percent of the container.
pub const MIN_MAIN_WIDTH_PCT: f64 = 20.0;
/// Upper bound for the main panel width, in percent of the container.
pub const MAX_MAIN_WIDTH_PCT: f64 = 80.0;

/// What a panel is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelContent {
    Commander,
    Viewer,
    Search,
    Details,
    #[default]
    None,
}

/// Dual-pane layout slice.
///
/// Invariant: `main_width_pct` is always within [20, 80]. Out-of-range input
/// (drag past the container edge, keyboard shortcuts) is clamped silently,
/// never rejected — resize callers do not pre-validate.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub secondary_visible: bool,
    pub main_width_pct: f64,
    pub main_content: PanelContent,
    pub main_node_id: Option<String>,
    pub secondary_content: PanelContent,
    pub secondary_node_id: Option<String>,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            secondary_visible: false,
            main_width_pct: 50.0,
            main_content: PanelContent::Commander,
            main_node_id: None,
            secondary_content: PanelContent::None,
            secondary_node_id: None,
        }
    }
}

impl PanelLayout {
    /// Set the main panel width, clamping into [20, 80].
    pub fn set_main_width(&mut self, pct: f64) {
        self.main_width_pct = pct.clamp(MIN_MAIN_WIDTH_PCT, MAX_MAIN_WIDTH_PCT);
    }

    pub fn set_secondary_visible(&mut self, visible: bool) {
        self.secondary_visible = visible;
    }

    pub fn set_main_panel(&mut self, content: PanelContent, node_id: Option<String>) {
        self.main_content = content;
        self.main_node_id = node_id;
    }

    pub fn set_secondary_panel(&mut self, content: PanelContent, node_id: Option<String>) {
        self.secondary_content = content;
        self.secondary_node_id = node_id;
    }

    /// Exchange the (content, node id) pairs of the two panels atomically.
    ///
    /// Safe to call when the secondary panel is empty; the main panel then
    /// becomes empty and the secondary receives the old main content.
    pub fn swap_panels(&mut self) {
        std::mem::swap(&mut self.main_content, &mut self.secondary_content);
        std::mem::swap(&mut self.main_node_id, &mut self.secondary_node_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_main_width_in_range_is_kept() {
        let mut layout = PanelLayout::default();
        layout.set_main_width(42.5);
        assert_eq!(layout.main_width_pct, 42.5);
    }

    #[test]
    fn test_set_main_width_clamps_low() {
        let mut layout = PanelLayout::default();
        layout.set_main_width(-15.0);
        assert_eq!(layout.main_width_pct, MIN_MAIN_WIDTH_PCT);
        layout.set_main_width(19.99);
        assert_eq!(layout.main_width_pct, MIN_MAIN_WIDTH_PCT);
    }

    #[test]
    fn test_set_main_width_clamps_high() {
        let mut layout = PanelLayout::default();
        layout.set_main_width(250.0);
        assert_eq!(layout.main_width_pct, MAX_MAIN_WIDTH_PCT);
    }

    #[test]
    fn test_set_main_width_keeps_bounds() {
        let mut layout = PanelLayout::default();
        layout.set_main_width(MIN_MAIN_WIDTH_PCT);
        assert_eq!(layout.main_width_pct, MIN_MAIN_WIDTH_PCT);
        layout.set_main_width(MAX_MAIN_WIDTH_PCT);
        assert_eq!(layout.main_width_pct, MAX_MAIN_WIDTH_PCT);
    }

    #[test]
    fn test_swap_panels_exchanges_content_and_node_ids() {
        let mut layout = PanelLayout::default();
        layout.set_main_panel(PanelContent::Viewer, Some("doc-1".to_string()));
        layout.set_secondary_panel(PanelContent::Commander, Some("folder-9".to_string()));

        layout.swap_panels();

        assert_eq!(layout.main_content, PanelContent::Commander);
        assert_eq!(layout.main_node_id.as_deref(), Some("folder-9"));
        assert_eq!(layout.secondary_content, PanelContent::Viewer);
        assert_eq!(layout.secondary_node_id.as_deref(), Some("doc-1"));
    }

    #[test]
    fn test_swap_panels_is_its_own_inverse() {
        let mut layout = PanelLayout::default();
        layout.set_main_panel(PanelContent::Viewer, Some("doc-1".to_string()));
        layout.set_secondary_panel(PanelContent::Search, None);
        let before = layout.clone();

        layout.swap_panels();
        layout.swap_panels();

        assert_eq!(layout, before);
    }

    #[test]
    fn test_swap_panels_with_empty_secondary_is_safe() {
        let mut layout = PanelLayout::default();
        layout.set_main_panel(PanelContent::Viewer, Some("doc-1".to_string()));

        layout.swap_panels();

        assert_eq!(layout.main_content, PanelContent::None);
        assert!(layout.main_node_id.is_none());
        assert_eq!(layout.secondary_content, PanelContent::Viewer);
        assert_eq!(layout.secondary_node_id.as_deref(), Some("doc-1"));
    }

    #[test]
    fn test_swap_does_not_touch_width_or_visibility() {
        let mut layout = PanelLayout::default();
        layout.set_main_width(33.0);
        layout.set_secondary_visible(true);

        layout.swap_panels();

        assert_eq!(layout.main_width_pct, 33.0);
        assert!(layout.secondary_visible);
    }
}
