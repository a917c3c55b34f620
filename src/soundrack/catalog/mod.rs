//! # Catalog Core
//!
//! One scan of the asset root produces a [`CatalogIndex`]: an immutable
//! snapshot holding two views over the same discovery pass.
//!
//! - An **entry map** from case-folded name to [`CatalogEntry`], consumed
//!   by [`resolve`](resolve::resolve). Folding (ASCII lowercase) is the
//!   sole identity used to match user input against filesystem names.
//! - A **display tree** of [`TreeNode`]s preserving filesystem enumeration
//!   order at every level, consumed by [`render`](render::render).
//!
//! The index has no lifecycle beyond the call that produced it: callers
//! scan, resolve or render, and discard. There is no cache to invalidate.

use crate::model::{CatalogEntry, Clip, Group, TreeNode};
use std::collections::HashMap;

pub mod render;
pub mod resolve;
pub mod scan;

/// Case-fold a name for lookup. ASCII lowercasing only; this must stay in
/// sync with what the scanner uses as map keys.
pub fn fold(name: &str) -> String {
    name.to_ascii_lowercase()
}

/// Immutable snapshot of one catalog scan.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: HashMap<String, CatalogEntry>,
    tree: Vec<TreeNode>,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a top-level clip under its folded name.
    ///
    /// Collision policy: the group interpretation wins. A clip never
    /// displaces an existing group under the same folded key; among clips,
    /// the later insertion wins (deterministic in traversal order).
    pub fn insert_clip(&mut self, clip: Clip) {
        let key = fold(&clip.name);
        if matches!(self.entries.get(&key), Some(CatalogEntry::Group(_))) {
            return;
        }
        self.entries.insert(key, CatalogEntry::Clip(clip));
    }

    /// Insert a group under its folded name. Always displaces a clip with
    /// the same folded name; among groups, the later insertion wins.
    pub fn insert_group(&mut self, group: Group) {
        self.entries.insert(fold(&group.name), CatalogEntry::Group(group));
    }

    /// Append a node to the top level of the display tree, keeping
    /// enumeration order.
    pub fn push_node(&mut self, node: TreeNode) {
        self.tree.push(node);
    }

    /// Look up an entry by raw user identifier (folded before matching).
    pub fn lookup(&self, identifier: &str) -> Option<&CatalogEntry> {
        self.entries.get(&fold(identifier))
    }

    /// Look up an entry by an already-folded key.
    pub fn get(&self, folded: &str) -> Option<&CatalogEntry> {
        self.entries.get(folded)
    }

    /// Top-level display nodes in enumeration order.
    pub fn top_level(&self) -> &[TreeNode] {
        &self.tree
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
