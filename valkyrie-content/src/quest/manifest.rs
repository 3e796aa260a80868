//! Quest manifest (`quest.ini`) loading and validation.
//!
//! Parsing is deliberately forgiving: a missing or broken manifest yields
//! `None` and a warning rather than an error, so one bad quest never aborts a
//! scan of the remaining candidates.

use std::path::Path;

use ini::Ini;

use super::descriptor::QuestDescriptor;

/// Manifest file name marking a directory as a quest package.
pub const MANIFEST_NAME: &str = "quest.ini";

/// Ruleset tag assumed when a manifest does not declare `type`.
///
/// Quests authored before the `type` key existed are all D2E.
pub const DEFAULT_QUEST_TYPE: &str = "D2E";

/// Manifest section holding quest metadata.
const QUEST_SECTION: &str = "Quest";

/// Whether `dir` contains a quest manifest.
pub fn has_manifest(dir: &Path) -> bool {
    dir.join(MANIFEST_NAME).is_file()
}

/// Load and validate the manifest in `dir`.
///
/// Returns `None` when the manifest is missing, unparsable, or has no
/// non-empty `name`; each case is logged as a warning. On success the
/// descriptor's `quest_type` is guaranteed non-empty (defaulted to
/// [`DEFAULT_QUEST_TYPE`] when absent) and `required_packs` holds the
/// space-delimited `packs` entries in manifest order.
///
/// Pack identifiers must not contain spaces; the split is a plain split on
/// the space character with no escaping.
pub fn read_quest(dir: &Path) -> Option<QuestDescriptor> {
    let manifest_path = dir.join(MANIFEST_NAME);

    let conf = match Ini::load_from_file(&manifest_path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(
                path = %manifest_path.display(),
                error = %e,
                "Invalid quest manifest"
            );
            return None;
        }
    };

    let section = conf.section(Some(QUEST_SECTION));
    let get = |key: &str| section.and_then(|s| s.get(key)).unwrap_or("");

    let mut quest_type = get("type").to_string();
    if quest_type.is_empty() {
        quest_type = DEFAULT_QUEST_TYPE.to_string();
    }

    let name = get("name").to_string();
    if name.is_empty() {
        tracing::warn!(
            path = %manifest_path.display(),
            "Quest manifest has no name, skipping"
        );
        return None;
    }

    let packs_raw = get("packs");
    let required_packs: Vec<String> = if packs_raw.is_empty() {
        Vec::new()
    } else {
        packs_raw.split(' ').map(str::to_string).collect()
    };

    // Missing description is fine.
    let description = get("description").to_string();

    Some(QuestDescriptor {
        install_path: dir.to_path_buf(),
        name,
        description,
        quest_type,
        required_packs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, body: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(MANIFEST_NAME), body).unwrap();
    }

    #[test]
    fn test_full_manifest() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            "[Quest]\ntype=MoM\nname=Into the Dark\npacks=exp1 exp2\ndescription=A short intro quest\n",
        );

        let quest = read_quest(temp.path()).unwrap();
        assert_eq!(quest.install_path, temp.path());
        assert_eq!(quest.name, "Into the Dark");
        assert_eq!(quest.quest_type, "MoM");
        assert_eq!(quest.required_packs, vec!["exp1", "exp2"]);
        assert_eq!(quest.description, "A short intro quest");
    }

    #[test]
    fn test_missing_type_defaults_to_d2e() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "[Quest]\nname=Foo\n");

        let quest = read_quest(temp.path()).unwrap();
        assert_eq!(quest.quest_type, DEFAULT_QUEST_TYPE);
    }

    #[test]
    fn test_empty_type_defaults_to_d2e() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "[Quest]\ntype=\nname=Foo\n");

        let quest = read_quest(temp.path()).unwrap();
        assert_eq!(quest.quest_type, DEFAULT_QUEST_TYPE);
    }

    #[test]
    fn test_missing_name_is_invalid() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "[Quest]\ntype=D2E\npacks=exp1\n");

        assert!(read_quest(temp.path()).is_none());
    }

    #[test]
    fn test_empty_name_is_invalid() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "[Quest]\nname=\n");

        assert!(read_quest(temp.path()).is_none());
    }

    #[test]
    fn test_missing_manifest_is_invalid() {
        let temp = TempDir::new().unwrap();
        assert!(read_quest(temp.path()).is_none());
    }

    #[test]
    fn test_missing_packs_yields_empty_list() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "[Quest]\nname=Foo\n");

        let quest = read_quest(temp.path()).unwrap();
        assert!(quest.required_packs.is_empty());
    }

    #[test]
    fn test_packs_split_is_naive() {
        let temp = TempDir::new().unwrap();
        // Double space produces an empty identifier, matching the historical
        // split-on-space behavior.
        write_manifest(temp.path(), "[Quest]\nname=Foo\npacks=exp1  exp2\n");

        let quest = read_quest(temp.path()).unwrap();
        assert_eq!(quest.required_packs, vec!["exp1", "", "exp2"]);
    }

    #[test]
    fn test_missing_description_is_empty() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "[Quest]\nname=Foo\n");

        let quest = read_quest(temp.path()).unwrap();
        assert!(quest.description.is_empty());
    }

    #[test]
    fn test_has_manifest() {
        let temp = TempDir::new().unwrap();
        assert!(!has_manifest(temp.path()));

        write_manifest(temp.path(), "[Quest]\nname=Foo\n");
        assert!(has_manifest(temp.path()));
    }
}
