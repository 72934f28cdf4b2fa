//! Thunderstore URL conventions
//!
//! Neither helper escapes its input: package names and slugs coming from the
//! registry are already URL-safe.

use crate::core::game::{GameContext, slug_or_empty};

/// CDN prefix for package icons
pub const ICON_BASE_URL: &str = "https://gcdn.thunderstore.io/live/repository/icons";

/// Community site root
pub const COMMUNITY_BASE_URL: &str = "https://thunderstore.io/c";

/// Icon URL for a package version, e.g. `Bob-CoolMod-1.2.3`
pub fn thunderstore_icon_url(full_name: &str) -> String {
    format!("{ICON_BASE_URL}/{full_name}.png")
}

/// Package page on the community site of the active game.
///
/// `path` is usually `{author}/{name}`.
pub fn community_url(game: &impl GameContext, path: &str) -> String {
    format!("{COMMUNITY_BASE_URL}/{}/p/{path}/", slug_or_empty(game))
}

/// Joins the parts of a package version identifier, keeping their case
pub fn full_name(author: &str, name: &str, version: &str) -> String {
    format!("{author}-{name}-{version}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::Game;

    #[test]
    fn test_icon_url() {
        assert_eq!(
            thunderstore_icon_url("Bob-CoolMod-1.2.3"),
            "https://gcdn.thunderstore.io/live/repository/icons/Bob-CoolMod-1.2.3.png"
        );
    }

    #[test]
    fn test_community_url() {
        let game = Game::new("lethal-company");
        assert_eq!(
            community_url(&game, "Bob/CoolMod"),
            "https://thunderstore.io/c/lethal-company/p/Bob/CoolMod/"
        );
    }

    #[test]
    fn test_community_url_without_game() {
        assert_eq!(
            community_url(&None::<Game>, "Bob/CoolMod"),
            "https://thunderstore.io/c//p/Bob/CoolMod/"
        );
    }

    #[test]
    fn test_full_name_preserves_case() {
        assert_eq!(
            full_name("BepInEx", "BepInExPack", "5.4.2100"),
            "BepInEx-BepInExPack-5.4.2100"
        );
    }
}
