//! Quest package model and manifest parsing.
//!
//! A quest is any directory containing a `quest.ini` manifest. The manifest
//! declares the quest's ruleset (`type`), display name, optional description,
//! and the expansion packs it requires. This module owns the descriptor type
//! and the defaulting/validation rules applied while reading manifests; where
//! quests are found is the `discovery` module's concern.

mod descriptor;
mod manifest;

pub use descriptor::QuestDescriptor;
pub use manifest::{has_manifest, read_quest, DEFAULT_QUEST_TYPE, MANIFEST_NAME};
