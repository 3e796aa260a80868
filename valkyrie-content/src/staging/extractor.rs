//! Archive extraction for quest staging.

use std::fs::File;
use std::path::Path;

use crate::error::{ContentError, ContentResult};

/// Extracts a quest archive into a destination directory.
///
/// Staging only needs "extract everything"; the trait keeps that seam narrow
/// so tests can substitute a failing extractor and future archive formats can
/// slot in without touching the staging flow.
pub trait ArchiveExtractor {
    /// Extract all entries of `archive` into `dest_dir`.
    ///
    /// Returns the number of archive entries extracted.
    fn extract(&self, archive: &Path, dest_dir: &Path) -> ContentResult<usize>;
}

/// Zip-based extractor.
///
/// `.valkyrie` archives are plain zip files with a different extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipExtractor;

impl ZipExtractor {
    /// Create a new zip extractor.
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveExtractor for ZipExtractor {
    fn extract(&self, archive: &Path, dest_dir: &Path) -> ContentResult<usize> {
        let file = File::open(archive).map_err(|e| ContentError::ReadFailed {
            path: archive.to_path_buf(),
            source: e,
        })?;

        let mut zip = zip::ZipArchive::new(file).map_err(|e| ContentError::ExtractionFailed {
            path: archive.to_path_buf(),
            reason: e.to_string(),
        })?;

        let entries = zip.len();
        zip.extract(dest_dir)
            .map_err(|e| ContentError::ExtractionFailed {
                path: archive.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(entries)
    }
}
