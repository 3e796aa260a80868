//! Quest discovery across user, bundled, and staging roots.
//!
//! Discovery enumerates candidate directories (any directory containing a
//! `quest.ini`), stages packed archives into the staging area where the mode
//! calls for it, and aggregates the surviving quests into a map keyed by
//! install path.
//!
//! ```text
//! roots ──► stage archives ──► list candidate dirs ──► read manifests
//!                                                          │
//!                       HashMap<install path, descriptor> ◄┘ (filters)
//! ```
//!
//! Three modes share these building blocks:
//!
//! - [`QuestDiscovery::find_all`]: bundled + user + staged quests, filtered
//!   by content type and by the enabled expansion packs.
//! - [`QuestDiscovery::find_user`]: user + staged quests after a staging
//!   wipe; no expansion filter.
//! - [`QuestDiscovery::find_user_unpacked`]: already-unpacked user quests
//!   only; staging is never touched.
//!
//! A single bad candidate or archive is logged and skipped; discovery only
//! fails when a load-bearing root directory cannot be created.

mod config;
mod context;
mod engine;

pub use config::DiscoveryConfig;
pub use context::GameContext;
pub use engine::QuestDiscovery;
