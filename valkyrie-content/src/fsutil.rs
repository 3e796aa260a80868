//! Filesystem helpers shared by staging and discovery.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ContentError, ContentResult};

/// Create a directory and any missing ancestors.
///
/// No-op when the directory already exists. A failure here means a
/// load-bearing root (user data or staging) cannot be used, so callers
/// propagate it rather than skipping.
pub fn ensure_dir(path: &Path) -> ContentResult<()> {
    fs::create_dir_all(path).map_err(|e| ContentError::CreateDirFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Recursively delete a directory and its contents.
///
/// Callers treat a failure as best-effort cleanup: log it and carry on.
pub fn remove_tree(path: &Path) -> ContentResult<()> {
    fs::remove_dir_all(path).map_err(|e| ContentError::RemoveFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Every directory transitively nested under `path`, excluding `path` itself.
///
/// Returns an empty list when `path` does not exist. Traversal order is
/// unspecified; no caller depends on it.
pub fn descendant_dirs(path: &Path) -> Vec<PathBuf> {
    if !path.is_dir() {
        return Vec::new();
    }

    WalkDir::new(path)
        .min_depth(1)
        .into_iter()
        .filter_map(readable)
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.into_path())
        .collect()
}

/// Every file transitively under `path` whose extension matches `extension`
/// (compared ASCII case-insensitively, without the leading dot).
pub fn files_with_extension(path: &Path, extension: &str) -> Vec<PathBuf> {
    if !path.is_dir() {
        return Vec::new();
    }

    WalkDir::new(path)
        .min_depth(1)
        .into_iter()
        .filter_map(readable)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .collect()
}

/// Keep readable walk entries, logging and dropping the rest.
fn readable(entry: walkdir::Result<walkdir::DirEntry>) -> Option<walkdir::DirEntry> {
    match entry {
        Ok(e) => Some(e),
        Err(e) => {
            tracing::warn!(error = %e, "Skipping unreadable entry during directory walk");
            None
        }
    }
}
