//! Discovery root configuration.

use std::env;
use std::path::PathBuf;

use crate::CONTENT_DIR_NAME;

/// Filesystem roots consulted by quest discovery.
///
/// All three roots are explicit so tests (and embedders) can point discovery
/// at isolated temp directories instead of the real platform locations.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Root for user-authored and downloaded quests. Created on demand at
    /// the start of every discovery call.
    pub user_data_dir: PathBuf,

    /// Root for quests shipped with the application. Never created by this
    /// crate; a missing bundled root simply contributes no quests.
    pub bundled_dir: PathBuf,

    /// Staging root for archive extraction.
    pub staging_dir: PathBuf,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        let data_root = dirs::data_dir().unwrap_or_else(env::temp_dir);
        Self {
            user_data_dir: data_root.join(CONTENT_DIR_NAME),
            bundled_dir: PathBuf::from("quests"),
            staging_dir: env::temp_dir().join(CONTENT_DIR_NAME),
        }
    }
}

impl DiscoveryConfig {
    /// Set the user-data root.
    pub fn with_user_data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_data_dir = path.into();
        self
    }

    /// Set the bundled-content root (typically the host's install location).
    pub fn with_bundled_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.bundled_dir = path.into();
        self
    }

    /// Set the staging root.
    pub fn with_staging_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.staging_dir = path.into();
        self
    }
}
