//! Staging area for packed quest archives.
//!
//! Packed quests ship as `.valkyrie` archives. Before discovery can read
//! their manifests each archive is extracted into its own subdirectory of a
//! staging root, which a later discovery pass scans like any other root.
//!
//! The staging root is shared mutable state between discovery calls: staged
//! contents persist until the next wipe or re-extraction. Concurrent
//! discovery calls racing on the same staging root are not supported; callers
//! either serialize their calls or inject disjoint roots per
//! [`StagingArea::new`].

mod extractor;

pub use extractor::{ArchiveExtractor, ZipExtractor};

use std::env;
use std::path::{Path, PathBuf};

use crate::error::ContentResult;
use crate::fsutil;
use crate::CONTENT_DIR_NAME;

/// File extension marking a packed quest archive (without the dot).
pub const ARCHIVE_EXTENSION: &str = "valkyrie";

/// Staging area rooted at a fixed directory.
#[derive(Debug, Clone)]
pub struct StagingArea<E = ZipExtractor> {
    root: PathBuf,
    extractor: E,
}

impl StagingArea<ZipExtractor> {
    /// Staging area rooted at `root`, extracting with [`ZipExtractor`].
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extractor: ZipExtractor::new(),
        }
    }

    /// Staging area under the platform temp directory
    /// (`$TMPDIR/Valkyrie`), the location shared by all discovery calls in
    /// the process.
    pub fn in_temp() -> Self {
        Self::new(env::temp_dir().join(CONTENT_DIR_NAME))
    }
}

impl<E: ArchiveExtractor> StagingArea<E> {
    /// Swap in a different extractor, keeping the root.
    pub fn with_extractor<X: ArchiveExtractor>(self, extractor: X) -> StagingArea<X> {
        StagingArea {
            root: self.root,
            extractor,
        }
    }

    /// Root directory of the staging area.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Staging subdirectory used for `archive`.
    ///
    /// Keyed by the archive's file name, not its full path or a content
    /// hash: two archives sharing a file name overwrite each other's staged
    /// output. Known limitation, kept for compatibility with existing
    /// staging layouts.
    pub fn stage_dir_for(&self, archive: &Path) -> PathBuf {
        self.root.join(archive.file_name().unwrap_or_default())
    }

    /// Remove the entire staging root for a clean slate.
    ///
    /// A missing root is a no-op; a failed removal is logged and ignored so
    /// the following rescan still runs.
    pub fn wipe(&self) {
        if !self.root.exists() {
            return;
        }

        if let Err(e) = fsutil::remove_tree(&self.root) {
            tracing::warn!(error = %e, "Unable to remove staged quest files");
        }
    }

    /// Find and extract every quest archive under `root_path`.
    ///
    /// Each archive is staged into a fresh subdirectory of the staging root;
    /// any stale staging from a previous run is deleted first, making
    /// repeated staging of the same archive idempotent. A failed stale-delete
    /// or a failed extraction is logged and the archive skipped; only a
    /// directory-creation failure aborts, since without the staging root
    /// nothing downstream can work.
    pub fn stage_archives(&self, root_path: &Path) -> ContentResult<()> {
        for archive in fsutil::files_with_extension(root_path, ARCHIVE_EXTENSION) {
            fsutil::ensure_dir(&self.root)?;

            let dest = self.stage_dir_for(&archive);
            if dest.exists() {
                if let Err(e) = fsutil::remove_tree(&dest) {
                    tracing::warn!(
                        path = %dest.display(),
                        error = %e,
                        "Unable to remove stale staged files"
                    );
                }
            }
            fsutil::ensure_dir(&dest)?;

            match self.extractor.extract(&archive, &dest) {
                Ok(entries) => {
                    tracing::debug!(
                        path = %archive.display(),
                        entries,
                        "Staged quest archive"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        path = %archive.display(),
                        error = %e,
                        "Unable to read quest archive"
                    );
                    fsutil::remove_tree(&dest).ok(); // Best effort cleanup
                }
            }
        }

        Ok(())
    }
}
