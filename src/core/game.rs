//! Active game context
//!
//! The host owns which game is selected. Helpers that need the selection take
//! it as a [`GameContext`] argument and read it at call time.

use serde::{Deserialize, Serialize};

/// A game whose mods are being managed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Game {
    /// URL-safe identifier, e.g. `lethal-company`
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Game {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: None,
        }
    }
}

/// Read access to the currently selected game
pub trait GameContext {
    /// Slug of the selected game, `None` before any selection
    fn active_slug(&self) -> Option<&str>;
}

impl GameContext for Game {
    fn active_slug(&self) -> Option<&str> {
        Some(&self.slug)
    }
}

impl GameContext for Option<Game> {
    fn active_slug(&self) -> Option<&str> {
        self.as_ref().map(|g| g.slug.as_str())
    }
}

impl GameContext for Option<&Game> {
    fn active_slug(&self) -> Option<&str> {
        self.map(|g| g.slug.as_str())
    }
}

impl<T: GameContext + ?Sized> GameContext for &T {
    fn active_slug(&self) -> Option<&str> {
        (**self).active_slug()
    }
}

/// Slug used when building paths and URLs.
///
/// An unselected game yields an empty slug rather than an error.
pub(crate) fn slug_or_empty(game: &impl GameContext) -> &str {
    game.active_slug().unwrap_or_else(|| {
        tracing::debug!("No active game selected, using empty slug");
        ""
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_context_impls() {
        let game = Game::new("lethal-company");
        assert_eq!(game.active_slug(), Some("lethal-company"));
        assert_eq!(Some(game.clone()).active_slug(), Some("lethal-company"));
        assert_eq!(Some(&game).active_slug(), Some("lethal-company"));
        assert_eq!((&game).active_slug(), Some("lethal-company"));
        assert_eq!(None::<Game>.active_slug(), None);
    }

    #[test]
    fn test_slug_or_empty() {
        assert_eq!(slug_or_empty(&Game::new("valheim")), "valheim");
        assert_eq!(slug_or_empty(&None::<Game>), "");
    }
}
