use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a node is a folder or a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    Document,
}

/// One entry in the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub title: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

/// One row in the commander node list.
///
/// Carries the columns the commander can sort and render by. Folder-only and
/// document-only attributes are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeItem {
    pub id: String,
    pub title: String,
    pub kind: NodeKind,
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub child_count: Option<u32>,
    pub file_type: Option<String>,
    pub file_size: Option<u64>,
    pub page_count: Option<u32>,
    pub thumbnail_url: Option<String>,
}

/// Column the node list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Title,
    CreatedAt,
    UpdatedAt,
    Size,
}

/// Sort direction for the node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Current sorting of the node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub by: SortBy,
    pub order: SortOrder,
}

/// How the node list is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

/// Navigation slice: folder tree, expansion, visible nodes, selection, sort.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodesState {
    pub current_folder_id: Option<String>,
    pub folder_tree: Vec<TreeNode>,
    pub expanded_folders: BTreeSet<String>,
    pub visible_nodes: Vec<NodeItem>,
    pub selected_nodes: BTreeSet<String>,
    pub sort: SortState,
    pub view_mode: ViewMode,
}

impl NodesState {
    pub fn set_current_folder(&mut self, id: Option<String>) {
        self.current_folder_id = id;
    }

    pub fn set_folder_tree(&mut self, tree: Vec<TreeNode>) {
        self.folder_tree = tree;
    }

    /// Flip expansion of one folder.
    pub fn toggle_folder(&mut self, id: &str) {
        if !self.expanded_folders.remove(id) {
            self.expanded_folders.insert(id.to_string());
        }
    }

    /// Expand a folder. Idempotent.
    pub fn expand_folder(&mut self, id: &str) {
        self.expanded_folders.insert(id.to_string());
    }

    /// Collapse a folder. Collapsing one that is not expanded is a no-op.
    pub fn collapse_folder(&mut self, id: &str) {
        self.expanded_folders.remove(id);
    }

    pub fn set_visible_nodes(&mut self, nodes: Vec<NodeItem>) {
        self.visible_nodes = nodes;
    }

    /// Flip membership of one node id in the selection set.
    pub fn toggle_node_selection(&mut self, id: &str) {
        if !self.selected_nodes.remove(id) {
            self.selected_nodes.insert(id.to_string());
        }
    }

    /// Replace the whole selection with the given ids.
    pub fn select_nodes(&mut self, ids: impl IntoIterator<Item = String>) {
        self.selected_nodes = ids.into_iter().collect();
    }

    pub fn clear_node_selection(&mut self) {
        self.selected_nodes.clear();
    }

    /// Replace the sort state unconditionally.
    pub fn set_sorting(&mut self, by: SortBy, order: SortOrder) {
        self.sort = SortState { by, order };
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }
}
