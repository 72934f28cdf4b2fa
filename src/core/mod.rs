//! Core mod presentation logic
//!
//! This module contains the types and decisions behind what the client shows
//! for a mod. It provides:
//!
//! - [`model`]: Mod, dependant and config entry shapes, plus the outdated check
//! - [`game`]: The active game context passed into helpers
//! - [`icon`]: Icon source resolution for mods and dependants
//! - [`separator`]: `ListSeparator=` extraction from config descriptions
//! - [`thunderstore`]: Thunderstore icon and community URL rules
//! - [`error`]: Error types for the fallible edges

pub mod error;
pub mod game;
pub mod icon;
pub mod model;
pub mod separator;
pub mod thunderstore;

#[cfg(test)]
pub mod test_helpers;
