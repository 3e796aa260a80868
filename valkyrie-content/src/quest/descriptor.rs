//! Normalized view of one discoverable quest package.

use std::fmt;
use std::path::PathBuf;

/// A quest package discovered on disk.
///
/// Descriptors are produced by [`crate::quest::read_quest`] and are plain
/// data: they hold no handle back to the discovery engine. `install_path` may
/// point into the staging area, whose contents only live until the next wipe
/// or re-extraction, so callers consuming staged files should do so before
/// triggering another discovery pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestDescriptor {
    /// Directory holding the manifest. Identity key during aggregation:
    /// same-named quests from different directories both surface.
    pub install_path: PathBuf,

    /// Display name from the manifest. Always non-empty; manifests without a
    /// name never produce a descriptor.
    pub name: String,

    /// Free-text description. Empty when the manifest omits it.
    pub description: String,

    /// Ruleset tag this quest targets (e.g. "D2E", "MoM"). Never empty.
    pub quest_type: String,

    /// Expansion packs the quest depends on, in manifest order. May contain
    /// duplicates; no deduplication is applied.
    pub required_packs: Vec<String>,
}

impl fmt::Display for QuestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.quest_type)
    }
}
