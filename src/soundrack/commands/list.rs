use crate::catalog::render::{render, ListOptions};
use crate::catalog::CatalogIndex;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Render the catalog listing. An empty catalog is not an error; the
/// command layer turns it into a user-facing message so the renderer can
/// stay infallible.
pub fn run(index: &CatalogIndex, options: &ListOptions) -> Result<CmdResult> {
    let lines = render(index, options);

    let mut result = CmdResult::default();
    if lines.is_empty() {
        result.add_message(CmdMessage::info("No sound files found."));
    }
    Ok(result.with_lines(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Clip, TreeNode};

    #[test]
    fn empty_catalog_reports_nothing_found() {
        let index = CatalogIndex::new();
        let result = run(&index, &ListOptions::default()).unwrap();
        assert!(result.lines.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "No sound files found.");
    }

    #[test]
    fn non_empty_catalog_has_lines_and_no_message() {
        let mut index = CatalogIndex::new();
        index.push_node(TreeNode::Clip(Clip::new("Foo", "/sounds/Foo.mp3")));

        let result = run(&index, &ListOptions::default()).unwrap();
        assert_eq!(result.lines, vec!["Foo"]);
        assert!(result.messages.is_empty());
    }
}
