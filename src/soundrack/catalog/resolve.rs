use crate::catalog::CatalogIndex;
use crate::error::{CatalogError, Result};
use crate::model::{CatalogEntry, Clip};

/// Resolve a user identifier to exactly one clip.
///
/// The identifier is folded before lookup. A bare clip resolves directly
/// and the supplied track number is ignored. A group resolves positionally:
/// `track` is 1-based into the sorted track list, so the first track is 1
/// whatever its parsed number happens to be.
///
/// Pure over the index: no filesystem access, no side effects.
pub fn resolve<'a>(index: &'a CatalogIndex, identifier: &str, track: usize) -> Result<&'a Clip> {
    let entry = index
        .lookup(identifier)
        .ok_or_else(|| CatalogError::NotFound(identifier.to_string()))?;

    match entry {
        CatalogEntry::Clip(clip) => Ok(clip),
        CatalogEntry::Group(group) => {
            if group.tracks.is_empty() {
                return Err(CatalogError::EmptyGroup(group.name.clone()));
            }
            if track < 1 || track > group.tracks.len() {
                return Err(CatalogError::TrackOutOfRange {
                    group: group.name.clone(),
                    requested: track,
                    count: group.tracks.len(),
                });
            }
            Ok(&group.tracks[track - 1].clip)
        }
    }
}
