//! Shared test utilities for the mdsite test suite.
//!
//! Provides fixture-tree builders and structure-tree lookups used by the
//! convert and posting tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let content = tempfile::TempDir::new().unwrap();
//! write_file(content.path(), "guide/intro.md", "# Intro");
//!
//! let outcome = convert(content.path(), out.path(), &SiteConfig::default());
//! let guide = find_dir(&outcome.tree, "guide");
//! assert_eq!(find_page(guide, "intro").path(), "/guide/intro");
//! ```

use std::path::Path;

use crate::types::TreeNode;

// =========================================================================
// Fixture setup
// =========================================================================

/// Write a file under `root`, creating parent directories as needed.
///
/// `rel` uses forward slashes; tests build whole fixture trees with it.
pub fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

// =========================================================================
// Structure tree lookups. Panic with a clear message on miss.
// =========================================================================

/// Children of the named directory node. Panics if not found.
pub fn find_dir<'a>(nodes: &'a [TreeNode], name: &str) -> &'a [TreeNode] {
    nodes
        .iter()
        .find_map(|node| match node {
            TreeNode::Dir {
                name: n, children, ..
            } if n == name => Some(children.as_slice()),
            _ => None,
        })
        .unwrap_or_else(|| {
            let names = tree_names(nodes);
            panic!("dir '{name}' not found. Available: {names:?}")
        })
}

/// Find a page node by name. Panics if not found.
pub fn find_page<'a>(nodes: &'a [TreeNode], name: &str) -> &'a TreeNode {
    nodes
        .iter()
        .find(|node| matches!(node, TreeNode::Page { name: n, .. } if n == name))
        .unwrap_or_else(|| {
            let names = tree_names(nodes);
            panic!("page '{name}' not found. Available: {names:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All node names at one level, in tree order.
pub fn tree_names(nodes: &[TreeNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.name()).collect()
}
