pub mod attributes;
pub mod edgelist;

pub use attributes::{load_attributes, save_attributes};
pub use edgelist::{EdgeRecord, append_edgelist, read_edgelist};

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
    #[error("malformed edge on line {line} of {path:?}: {content:?}")]
    MalformedEdge {
        path: PathBuf,
        line: usize,
        content: String,
    },
}

impl PersistenceError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Where the artifacts of one crawl are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub edgelist: PathBuf,
    pub attributes: PathBuf,
    pub dot: PathBuf,
}

impl ArtifactPaths {
    pub fn new(directory: &Path, name: &str) -> Self {
        Self {
            edgelist: directory.join(format!("{}.edgelist", name)),
            attributes: directory.join(format!("{}_attributes.bin", name)),
            dot: directory.join(format!("{}.dot", name)),
        }
    }
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), PersistenceError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| PersistenceError::io(parent, e))
        }
        _ => Ok(()),
    }
}
