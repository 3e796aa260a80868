//! Error types for quest discovery and staging.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors that can occur during quest discovery and archive staging.
///
/// Only [`ContentError::CreateDirFailed`] for a load-bearing root is fatal to
/// a discovery call. Every other condition is logged at the point of failure
/// and the scan continues without the affected item, so these variants are
/// mostly seen in logs rather than returned to callers.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Failed to create a directory.
    #[error("failed to create directory {}: {}", path.display(), source)]
    CreateDirFailed { path: PathBuf, source: io::Error },

    /// Failed to read a file or directory.
    #[error("failed to read {}: {}", path.display(), source)]
    ReadFailed { path: PathBuf, source: io::Error },

    /// Failed to remove a directory tree.
    #[error("failed to remove {}: {}", path.display(), source)]
    RemoveFailed { path: PathBuf, source: io::Error },

    /// Archive extraction failed.
    #[error("failed to extract {}: {}", path.display(), reason)]
    ExtractionFailed { path: PathBuf, reason: String },
}
