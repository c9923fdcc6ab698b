//! Shared types describing the generated site structure.
//!
//! The structure tree is rebuilt from scratch on every conversion run and
//! lives only as long as that run: it is reported to the user, never
//! persisted, and file writes do not depend on it.

use std::path::PathBuf;

/// A node in the structure tree returned by one conversion run.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// A mirrored directory and its children, in navigation order.
    Dir {
        /// Directory name as found on disk.
        name: String,
        /// Site path of the directory (`base_url` joined with each level).
        path: String,
        children: Vec<TreeNode>,
    },
    /// A converted markdown page.
    Page {
        /// File name with the `.md` extension stripped.
        name: String,
        /// Site path of the page, without the `.html` extension.
        path: String,
        /// Markdown source the page was converted from.
        source: PathBuf,
    },
}

impl TreeNode {
    /// Entry name used for sibling ordering and display.
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Dir { name, .. } | TreeNode::Page { name, .. } => name,
        }
    }

    /// Site path of the node.
    pub fn path(&self) -> &str {
        match self {
            TreeNode::Dir { path, .. } | TreeNode::Page { path, .. } => path,
        }
    }
}
