//! The slice of active-game state that discovery filters on.

use std::collections::HashSet;

/// Content-type tag and enabled expansion packs of the running game session.
///
/// The live game object stays outside this crate; callers snapshot the two
/// values discovery needs into a `GameContext` and pass it per call.
#[derive(Debug, Clone, Default)]
pub struct GameContext {
    content_type: String,
    enabled_packs: HashSet<String>,
}

impl GameContext {
    /// Context for a game of the given content type with no expansions
    /// enabled.
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            enabled_packs: HashSet::new(),
        }
    }

    /// Set the enabled expansion packs.
    pub fn with_enabled_packs<I, S>(mut self, packs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled_packs = packs.into_iter().map(Into::into).collect();
        self
    }

    /// Content-type tag of the active ruleset.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Identifiers of the currently enabled expansion packs.
    pub fn enabled_packs(&self) -> &HashSet<String> {
        &self.enabled_packs
    }

    /// Whether every pack in `required` is currently enabled.
    pub fn packs_enabled(&self, required: &[String]) -> bool {
        required.iter().all(|p| self.enabled_packs.contains(p))
    }
}
