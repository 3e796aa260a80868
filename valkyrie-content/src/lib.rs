//! Valkyrie quest content discovery and staging.
//!
//! This library finds installable quest packages for the Valkyrie app across
//! the filesystem roots quests live in: the user's data directory, the
//! content bundled with the application, and a temp staging area that holds
//! extracted `.valkyrie` archives. Discovered quests are validated against
//! their `quest.ini` manifest and filtered by the active game's content type
//! (and, for full discovery, its enabled expansion packs).
//!
//! It only discovers and stages content; installing, verifying, or running
//! quests is the host application's business.
//!
//! # Example
//!
//! ```no_run
//! use valkyrie_content::{DiscoveryConfig, GameContext, QuestDiscovery};
//!
//! let engine = QuestDiscovery::new(DiscoveryConfig::default());
//! let game = GameContext::new("D2E").with_enabled_packs(["exp1", "exp2"]);
//!
//! let quests = engine.find_all(&game)?;
//! for (path, quest) in &quests {
//!     println!("{} at {}", quest, path.display());
//! }
//! # Ok::<(), valkyrie_content::ContentError>(())
//! ```
//!
//! All operations are synchronous and blocking. Discovery calls mutate the
//! shared staging root, so callers run them one at a time (or configure
//! disjoint staging roots).

pub mod discovery;
pub mod error;
pub mod fsutil;
pub mod quest;
pub mod staging;

pub use discovery::{DiscoveryConfig, GameContext, QuestDiscovery};
pub use error::{ContentError, ContentResult};
pub use quest::QuestDescriptor;
pub use staging::StagingArea;

/// Fixed subfolder name appended to the platform data and temp locations to
/// form the default user-data and staging roots.
pub const CONTENT_DIR_NAME: &str = "Valkyrie";
