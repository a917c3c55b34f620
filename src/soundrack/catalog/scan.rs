//! One-pass directory walk that builds a [`CatalogIndex`].
//!
//! The root is traversed one level first: files with a recognized extension
//! become top-level clips, subdirectories become group candidates. Inside a
//! group directory, files named `<group>_<n>.<ext>` (folded prefix match,
//! trailing numeric suffix) become that group's tracks; everything else with
//! a recognized extension is still captured in the display tree. Deeper
//! subdirectories are walked for the tree only and never produce groups.

use crate::catalog::{fold, CatalogIndex};
use crate::error::{CatalogError, Result};
use crate::model::{Clip, DirNode, Group, Track, TreeNode};
use std::fs;
use std::path::Path;

/// Extension filter for a scan. Extensions are stored folded and without a
/// leading dot; matching is ASCII-case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    extensions: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new(["mp3"])
    }
}

impl ScanOptions {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    pub fn recognizes(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// Scan the asset root and build a fresh index.
///
/// Fails with [`CatalogError::RootUnreadable`] if the root (or any
/// directory reached during the walk) cannot be listed; a failed scan never
/// yields a partially-populated index.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<CatalogIndex> {
    // Canonicalizing up front makes every discovered path absolute and
    // turns a missing root into the same error as an unlistable one.
    let root = root
        .canonicalize()
        .map_err(|source| CatalogError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        })?;

    let mut index = CatalogIndex::new();
    for entry in list_dir(&root)? {
        let path = entry.path();
        if path.is_dir() {
            let (group, node) = scan_group(&path, options)?;
            index.insert_group(group);
            index.push_node(TreeNode::Dir(node));
        } else if let Some(clip) = clip_from(&path, options) {
            index.insert_clip(clip.clone());
            index.push_node(TreeNode::Clip(clip));
        }
    }
    Ok(index)
}

/// Scan a direct child of the root as a group candidate.
///
/// Returns the group (tracks sorted ascending by parsed number, ties kept
/// in enumeration order) together with the directory's display node.
fn scan_group(dir: &Path, options: &ScanOptions) -> Result<(Group, DirNode)> {
    let name = dir_name(dir);
    let folded_name = fold(&name);
    let mut group = Group::new(name.clone());
    let mut node = DirNode::new(name);

    for entry in list_dir(dir)? {
        let path = entry.path();
        if path.is_dir() {
            node.children.push(TreeNode::Dir(scan_tree(&path, options)?));
        } else if let Some(clip) = clip_from(&path, options) {
            let clip = clip.in_group(&group.name);
            if let Some(number) = track_number(&path, &folded_name) {
                group.tracks.push(Track {
                    number,
                    clip: clip.clone(),
                });
            }
            node.children.push(TreeNode::Clip(clip));
        }
    }

    group.tracks.sort_by_key(|track| track.number);
    Ok((group, node))
}

/// Walk a directory below group depth. Display tree only, no group
/// semantics.
fn scan_tree(dir: &Path, options: &ScanOptions) -> Result<DirNode> {
    let mut node = DirNode::new(dir_name(dir));
    for entry in list_dir(dir)? {
        let path = entry.path();
        if path.is_dir() {
            node.children.push(TreeNode::Dir(scan_tree(&path, options)?));
        } else if let Some(clip) = clip_from(&path, options) {
            node.children.push(TreeNode::Clip(clip));
        }
    }
    Ok(node)
}

fn list_dir(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let unreadable = |source| CatalogError::RootUnreadable {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        entries.push(entry.map_err(unreadable)?);
    }
    Ok(entries)
}

fn clip_from(path: &Path, options: &ScanOptions) -> Option<Clip> {
    let ext = path.extension()?.to_str()?;
    if !options.recognizes(ext) {
        return None;
    }
    let name = path.file_stem()?.to_str()?;
    Some(Clip::new(name, path))
}

/// Parse the track number of a group member: the folded file name must
/// start with the folded group name, and the text between the last `_` and
/// the extension must be an unsigned integer. Anything else is not a track.
fn track_number(path: &Path, folded_group: &str) -> Option<u32> {
    let file_name = path.file_name()?.to_str()?;
    if !fold(file_name).starts_with(folded_group) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let (_, suffix) = stem.rsplit_once('_')?;
    suffix.parse().ok()
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CatalogEntry;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    fn group<'a>(index: &'a CatalogIndex, name: &str) -> &'a Group {
        match index.lookup(name) {
            Some(CatalogEntry::Group(group)) => group,
            other => panic!("expected group '{}', got {:?}", name, other),
        }
    }

    #[test]
    fn empty_root_yields_empty_index() {
        let root = TempDir::new().unwrap();
        let index = scan(root.path(), &ScanOptions::default()).unwrap();
        assert!(index.is_empty());
        assert!(index.top_level().is_empty());
    }

    #[test]
    fn missing_root_is_unreadable() {
        let root = TempDir::new().unwrap();
        let gone = root.path().join("nope");
        let err = scan(&gone, &ScanOptions::default()).unwrap_err();
        assert!(matches!(err, CatalogError::RootUnreadable { .. }));
    }

    #[test]
    fn discovers_top_level_clips_and_skips_other_files() {
        let root = TempDir::new().unwrap();
        touch(root.path(), "Foo.mp3");
        touch(root.path(), "readme.txt");

        let index = scan(root.path(), &ScanOptions::default()).unwrap();
        assert_eq!(index.len(), 1);
        match index.lookup("foo") {
            Some(CatalogEntry::Clip(clip)) => {
                assert_eq!(clip.name, "Foo");
                assert!(clip.path.is_absolute());
                assert_eq!(clip.group, None);
            }
            other => panic!("expected clip, got {:?}", other),
        }
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let root = TempDir::new().unwrap();
        touch(root.path(), "Shout.MP3");

        let index = scan(root.path(), &ScanOptions::default()).unwrap();
        assert!(index.lookup("shout").is_some());
    }

    #[test]
    fn configured_extensions_replace_the_default() {
        let root = TempDir::new().unwrap();
        touch(root.path(), "Ping.wav");
        touch(root.path(), "Pong.mp3");

        let index = scan(root.path(), &ScanOptions::new(["wav"])).unwrap();
        assert!(index.lookup("ping").is_some());
        assert!(index.lookup("pong").is_none());
    }

    #[test]
    fn group_tracks_are_sorted_numerically() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("henchman");
        fs::create_dir(&dir).unwrap();
        touch(&dir, "Henchman_2.mp3");
        touch(&dir, "Henchman_10.mp3");
        touch(&dir, "Henchman_9.mp3");

        let index = scan(root.path(), &ScanOptions::default()).unwrap();
        let numbers: Vec<u32> = group(&index, "henchman")
            .tracks
            .iter()
            .map(|track| track.number)
            .collect();
        assert_eq!(numbers, vec![2, 9, 10]);
    }

    #[test]
    fn non_numeric_suffix_is_excluded_from_tracks_but_kept_in_tree() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("henchman");
        fs::create_dir(&dir).unwrap();
        touch(&dir, "Henchman_1.mp3");
        touch(&dir, "Henchman_final.mp3");
        touch(&dir, "Henchman.mp3");

        let index = scan(root.path(), &ScanOptions::default()).unwrap();
        assert_eq!(group(&index, "henchman").tracks.len(), 1);

        let top = index.top_level();
        assert_eq!(top.len(), 1);
        match &top[0] {
            TreeNode::Dir(dir) => assert_eq!(dir.children.len(), 3),
            other => panic!("expected dir node, got {:?}", other),
        }
    }

    #[test]
    fn prefix_mismatch_is_not_a_track() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("henchman");
        fs::create_dir(&dir).unwrap();
        touch(&dir, "Boss_1.mp3");

        let index = scan(root.path(), &ScanOptions::default()).unwrap();
        assert!(group(&index, "henchman").tracks.is_empty());
    }

    #[test]
    fn track_membership_folds_case() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("Henchman");
        fs::create_dir(&dir).unwrap();
        touch(&dir, "HENCHMAN_1.mp3");
        touch(&dir, "henchman_2.mp3");

        let index = scan(root.path(), &ScanOptions::default()).unwrap();
        assert_eq!(group(&index, "henchman").tracks.len(), 2);
    }

    #[test]
    fn track_clips_carry_the_group_back_reference() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("henchman");
        fs::create_dir(&dir).unwrap();
        touch(&dir, "Henchman_1.mp3");

        let index = scan(root.path(), &ScanOptions::default()).unwrap();
        let track = &group(&index, "henchman").tracks[0];
        assert_eq!(track.clip.group.as_deref(), Some("henchman"));
        assert_eq!(track.clip.name, "Henchman_1");
    }

    #[test]
    fn nested_directories_are_tree_only() {
        let root = TempDir::new().unwrap();
        let music = root.path().join("music");
        let ambient = music.join("ambient");
        fs::create_dir_all(&ambient).unwrap();
        touch(&ambient, "Wind.mp3");

        let index = scan(root.path(), &ScanOptions::default()).unwrap();
        // "music" is a group candidate (empty), "ambient" is not resolvable.
        assert!(group(&index, "music").tracks.is_empty());
        assert!(index.lookup("ambient").is_none());
        assert!(index.lookup("wind").is_none());

        match &index.top_level()[0] {
            TreeNode::Dir(music) => match &music.children[0] {
                TreeNode::Dir(ambient) => {
                    assert_eq!(ambient.name, "ambient");
                    assert_eq!(ambient.children.len(), 1);
                }
                other => panic!("expected nested dir, got {:?}", other),
            },
            other => panic!("expected dir node, got {:?}", other),
        }
    }

    #[test]
    fn group_wins_name_collision_with_clip() {
        let root = TempDir::new().unwrap();
        touch(root.path(), "intro.mp3");
        fs::create_dir(root.path().join("Intro")).unwrap();

        let index = scan(root.path(), &ScanOptions::default()).unwrap();
        assert_eq!(index.len(), 1);
        assert!(matches!(
            index.lookup("intro"),
            Some(CatalogEntry::Group(_))
        ));
    }
}
