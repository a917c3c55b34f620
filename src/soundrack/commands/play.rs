use crate::catalog::resolve::resolve;
use crate::catalog::CatalogIndex;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Resolve `identifier` (and 1-based `track` for groups) against a fresh
/// index. The returned result carries the clip for the playback side and a
/// "Playing:" message for the user.
pub fn run(index: &CatalogIndex, identifier: &str, track: usize) -> Result<CmdResult> {
    let clip = resolve(index, identifier, track)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Playing: {}", clip.name)));
    Ok(result.with_clip(clip))
}
