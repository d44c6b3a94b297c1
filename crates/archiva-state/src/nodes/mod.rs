//! Folder/document navigation state.
//!
//! The folder tree, expansion set, the node list visible in the commander,
//! multi-selection, and sort/view preferences. Node data itself comes from
//! the hierarchy API; this slice only holds what the view needs to render.

pub mod types;

pub use types::{
    NodeItem, NodeKind, NodesState, SortBy, SortOrder, SortState, TreeNode, ViewMode,
};
