use super::{PersistenceError, ensure_parent_dir};
use crate::artist::MetadataMap;
use std::path::Path;

/// Merges `metadata` into the bincode store at `path` and returns the number
/// of artists it now holds.
///
/// Artists already stored keep their position; their attributes are replaced
/// by the newer ones. New artists follow in discovery order.
pub fn save_attributes(metadata: &MetadataMap, path: &Path) -> Result<usize, PersistenceError> {
    ensure_parent_dir(path)?;

    let merged = if path.exists() {
        let mut stored = load_attributes(path)?;
        for (artist_id, attributes) in metadata {
            stored.insert(artist_id.clone(), attributes.clone());
        }
        stored
    } else {
        metadata.clone()
    };

    let serialized = bincode::serialize(&merged).map_err(|source| PersistenceError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    // Write to temp file first, then atomic rename
    let temp_path = path.with_extension("bin.tmp");
    std::fs::write(&temp_path, serialized).map_err(|e| PersistenceError::io(&temp_path, e))?;
    std::fs::rename(&temp_path, path).map_err(|e| PersistenceError::io(path, e))?;

    Ok(merged.len())
}

pub fn load_attributes(path: &Path) -> Result<MetadataMap, PersistenceError> {
    let file_contents = std::fs::read(path).map_err(|e| PersistenceError::io(path, e))?;

    bincode::deserialize(&file_contents).map_err(|source| PersistenceError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
