//! The discovery engine tying staging, enumeration, and filtering together.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ContentResult;
use crate::fsutil;
use crate::quest::{self, QuestDescriptor};
use crate::staging::StagingArea;

use super::config::DiscoveryConfig;
use super::context::GameContext;

/// Discovers quest packages and aggregates them by install path.
///
/// Each call rebuilds its result from scratch; nothing is cached between
/// calls except the staged archive contents on disk. Calls mutate the shared
/// staging root, so concurrent discovery over the same staging root is a
/// caller-side error (see the `staging` module docs).
#[derive(Debug, Clone)]
pub struct QuestDiscovery {
    config: DiscoveryConfig,
    staging: StagingArea,
}

impl QuestDiscovery {
    /// Engine over the roots in `config`.
    pub fn new(config: DiscoveryConfig) -> Self {
        let staging = StagingArea::new(&config.staging_dir);
        Self { config, staging }
    }

    /// The configured roots.
    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Full discovery: bundled + user + staged quests.
    ///
    /// Archives found under the user and bundled roots are staged before the
    /// staging root is scanned. Admits quests whose type matches the game's
    /// content type and whose required packs are all enabled.
    ///
    /// # Errors
    ///
    /// Only when the user-data or staging root cannot be created.
    pub fn find_all(
        &self,
        game: &GameContext,
    ) -> ContentResult<HashMap<PathBuf, QuestDescriptor>> {
        fsutil::ensure_dir(&self.config.user_data_dir)?;

        let mut candidates = self.scan_root(&self.config.user_data_dir, true)?;
        candidates.extend(self.scan_root(&self.config.bundled_dir, true)?);
        candidates.extend(self.scan_root(self.staging.root(), false)?);

        Ok(self.collect(candidates, game, true))
    }

    /// User discovery: user + staged quests, no expansion-pack filter.
    ///
    /// Wipes the staging area first, so only archives present under the user
    /// root in this run surface as staged quests.
    ///
    /// # Errors
    ///
    /// Only when the user-data or staging root cannot be created.
    pub fn find_user(
        &self,
        game: &GameContext,
    ) -> ContentResult<HashMap<PathBuf, QuestDescriptor>> {
        self.staging.wipe();
        fsutil::ensure_dir(&self.config.user_data_dir)?;

        let mut candidates = self.scan_root(&self.config.user_data_dir, true)?;
        candidates.extend(self.scan_root(self.staging.root(), false)?);

        Ok(self.collect(candidates, game, false))
    }

    /// Already-unpacked user quests only.
    ///
    /// Scans the user-data root without staging any archives and without the
    /// expansion-pack filter. The staging area is never touched.
    ///
    /// # Errors
    ///
    /// Only when the user-data root cannot be created.
    pub fn find_user_unpacked(
        &self,
        game: &GameContext,
    ) -> ContentResult<HashMap<PathBuf, QuestDescriptor>> {
        fsutil::ensure_dir(&self.config.user_data_dir)?;

        let candidates = self.scan_root(&self.config.user_data_dir, false)?;

        Ok(self.collect(candidates, game, false))
    }

    /// List candidate quest directories under `root`, optionally staging any
    /// archives found there first.
    ///
    /// A missing root contributes no candidates.
    fn scan_root(&self, root: &Path, stage: bool) -> ContentResult<Vec<PathBuf>> {
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        if stage {
            self.staging.stage_archives(root)?;
        }

        Ok(fsutil::descendant_dirs(root)
            .into_iter()
            .filter(|dir| quest::has_manifest(dir))
            .collect())
    }

    /// Parse each candidate's manifest, apply the filters, and key the
    /// survivors by install path.
    fn collect(
        &self,
        candidates: Vec<PathBuf>,
        game: &GameContext,
        check_packs: bool,
    ) -> HashMap<PathBuf, QuestDescriptor> {
        let mut quests = HashMap::new();

        for dir in candidates {
            let descriptor = match quest::read_quest(&dir) {
                Some(q) => q,
                None => continue,
            };

            if descriptor.quest_type != game.content_type() {
                tracing::debug!(
                    quest = %descriptor,
                    wanted = game.content_type(),
                    "Skipping quest for another ruleset"
                );
                continue;
            }

            if check_packs && !game.packs_enabled(&descriptor.required_packs) {
                tracing::debug!(
                    quest = %descriptor,
                    "Skipping quest with disabled required packs"
                );
                continue;
            }

            quests.insert(dir, descriptor);
        }

        quests
    }
}
