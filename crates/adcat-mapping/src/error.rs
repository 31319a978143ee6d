//! Error types for loading the correspondence resource.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a category mapper.
///
/// Only resource access can fail. Malformed lines and unknown category codes
/// are absorbed while the tables are built, and lookups never fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MappingError {
    /// The resource file is missing or unreadable.
    #[error("failed to load category mapping {path}: {source}")]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an in-memory or streamed resource failed.
    #[error("failed to read category mapping: {source}")]
    ResourceRead {
        #[source]
        source: std::io::Error,
    },
}

impl MappingError {
    pub(crate) fn load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ResourceLoad {
            path: path.into(),
            source,
        }
    }
}

/// Result type for mapper construction.
pub type Result<T> = std::result::Result<T, MappingError>;
