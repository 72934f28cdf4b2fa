//! modhelper - presentation helpers for a Thunderstore mod manager
//!
//! Computes the strings and flags a mod manager UI shows for mods, without
//! fetching, persisting or rendering anything itself.
//!
//! # Architecture
//!
//! - [`core`] - Mod shapes, outdated check, icon resolution, list separators,
//!   Thunderstore URLs
//! - [`helpers`] - File size, number, duration and relative time formatting,
//!   case conversion
//! - [`config`] - Read-only settings (locale, default game, asset protocol)
//! - [`utils`] - Platform config directory lookup
//!
//! # Example
//!
//! ```
//! use modhelper::{Game, Mod, get_list_separator, icon_src, AssetProtocol, ConfigEntry};
//!
//! let m: Mod = serde_json::from_str(
//!     r#"{ "type": "remote", "name": "CoolMod", "author": "Bob", "version": "1.2.3" }"#,
//! ).unwrap();
//! let game = Game::new("lethal-company");
//!
//! assert_eq!(
//!     icon_src(&m, &game, &AssetProtocol::default()),
//!     "https://gcdn.thunderstore.io/live/repository/icons/Bob-CoolMod-1.2.3.png"
//! );
//!
//! let entry = ConfigEntry::new("Keys", Some("Bound keys. ListSeparator=;"));
//! assert_eq!(get_list_separator(&entry).separator, Some(';'));
//! ```

#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod helpers;
pub mod utils;

// Re-export commonly used types
pub use crate::core::error::{Error, Result};
pub use crate::core::game::{Game, GameContext};
pub use crate::core::icon::{AssetProtocol, FileSrcConverter, IconSource, icon_src};
pub use crate::core::model::{ConfigEntry, Dependant, Mod, ModVersion, is_outdated};
pub use crate::core::separator::{ListSeparator, SeparatorKind, get_list_separator};
pub use crate::core::thunderstore::{community_url, thunderstore_icon_url};
