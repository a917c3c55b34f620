use crate::catalog::{fold, CatalogIndex};
use crate::model::TreeNode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed indent unit per nesting level.
const INDENT: &str = "    ";

/// Ordering applied within each level of the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortPolicy {
    /// Filesystem enumeration order. Deterministic within one scan but
    /// platform-dependent. The default.
    #[default]
    Enumeration,
    /// Lexicographic by case-folded name.
    Folded,
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortPolicy::Enumeration => write!(f, "enumeration"),
            SortPolicy::Folded => write!(f, "folded"),
        }
    }
}

impl FromStr for SortPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "enumeration" => Ok(SortPolicy::Enumeration),
            "folded" => Ok(SortPolicy::Folded),
            other => Err(format!(
                "Invalid sort policy '{}' (expected 'enumeration' or 'folded')",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// List every nested clip and directory instead of the top level only.
    pub expand_all: bool,
    pub sort: SortPolicy,
}

/// Render the catalog as a flat sequence of pre-formatted lines.
///
/// Directories carry a trailing `/`; clips appear under their display name.
/// An empty index yields an empty vector, never an error; whether that
/// means "nothing found" is the caller's call. Wrapping or truncating for a
/// transport is likewise the caller's concern.
pub fn render(index: &CatalogIndex, options: &ListOptions) -> Vec<String> {
    let mut lines = Vec::new();
    push_level(index.top_level(), 0, options, &mut lines);
    lines
}

fn push_level(nodes: &[TreeNode], depth: usize, options: &ListOptions, lines: &mut Vec<String>) {
    for node in ordered(nodes, options.sort) {
        let indent = INDENT.repeat(depth);
        match node {
            TreeNode::Clip(clip) => lines.push(format!("{}{}", indent, clip.name)),
            TreeNode::Dir(dir) => {
                lines.push(format!("{}{}/", indent, dir.name));
                if options.expand_all {
                    push_level(&dir.children, depth + 1, options, lines);
                }
            }
        }
    }
}

fn ordered<'a>(nodes: &'a [TreeNode], sort: SortPolicy) -> Vec<&'a TreeNode> {
    let mut refs: Vec<&TreeNode> = nodes.iter().collect();
    if sort == SortPolicy::Folded {
        refs.sort_by_key(|node| fold(node.name()));
    }
    refs
}
