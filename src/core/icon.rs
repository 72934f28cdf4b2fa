//! Icon source resolution for mods and dependants
//!
//! Every mod-like value resolves to one of three icon forms, first match wins:
//!
//! 1. Remote: the Thunderstore CDN icon for its full name
//! 2. Local with an icon file: the file passed through a [`FileSrcConverter`]
//! 3. Local without icon: the bundled artwork of the active game,
//!    `games/{slug}.webp`
//!
//! # Example
//!
//! ```
//! use modhelper::core::game::Game;
//! use modhelper::core::icon::{icon_src, AssetProtocol};
//! use modhelper::core::model::{LocalMod, Mod};
//!
//! let m = Mod::Local(LocalMod {
//!     name: "Patch".into(),
//!     author: None,
//!     version: "1.0.0".into(),
//!     versions: vec![],
//!     icon: None,
//! });
//!
//! let game = Game::new("lethal-company");
//! assert_eq!(icon_src(&m, &game, &AssetProtocol::default()), "games/lethal-company.webp");
//! ```

use crate::core::game::{GameContext, slug_or_empty};
use crate::core::model::{Dependant, Mod};
use crate::core::thunderstore::{full_name, thunderstore_icon_url};
use std::borrow::Cow;
use std::path::Path;

/// Where an icon comes from, before it is turned into a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconTarget<'a> {
    /// Registry package, by full name
    Remote(Cow<'a, str>),
    /// Icon file on disk
    LocalFile(&'a Path),
    /// No icon of its own, use the game artwork
    GameFallback,
}

/// Values that can show a mod icon
pub trait IconSource {
    fn icon_target(&self) -> IconTarget<'_>;
}

impl IconSource for Mod {
    fn icon_target(&self) -> IconTarget<'_> {
        match self {
            Mod::Remote(m) => IconTarget::Remote(match &m.full_name {
                Some(name) => Cow::Borrowed(name.as_str()),
                None => Cow::Owned(full_name(&m.author, &m.name, &m.version)),
            }),
            Mod::Local(m) => match &m.icon {
                Some(path) => IconTarget::LocalFile(path),
                None => IconTarget::GameFallback,
            },
        }
    }
}

impl IconSource for Dependant {
    fn icon_target(&self) -> IconTarget<'_> {
        match self {
            Dependant::Remote(d) => IconTarget::Remote(match &d.full_name {
                Some(name) => Cow::Borrowed(name.as_str()),
                None => Cow::Owned(full_name(&d.author, &d.name, &d.version)),
            }),
            Dependant::Local(d) => match &d.icon {
                Some(path) => IconTarget::LocalFile(path),
                None => IconTarget::GameFallback,
            },
        }
    }
}

/// Turns a local file path into something the rendering surface can load
pub trait FileSrcConverter {
    fn convert_file_src(&self, path: &Path) -> String;
}

impl<F> FileSrcConverter for F
where
    F: Fn(&Path) -> String,
{
    fn convert_file_src(&self, path: &Path) -> String {
        self(path)
    }
}

/// The webview asset protocol
///
/// The path is percent-encoded as a single URI component and served either
/// as `{protocol}://localhost/{path}` or, on Windows and Android webviews,
/// `http://{protocol}.localhost/{path}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetProtocol {
    pub protocol: String,
    pub windows_style: bool,
}

impl AssetProtocol {
    pub const DEFAULT_PROTOCOL: &'static str = "asset";

    pub fn new(protocol: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            windows_style: cfg!(any(windows, target_os = "android")),
        }
    }
}

impl Default for AssetProtocol {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROTOCOL)
    }
}

impl FileSrcConverter for AssetProtocol {
    fn convert_file_src(&self, path: &Path) -> String {
        let path = path.to_string_lossy();
        let encoded = urlencoding::encode(&path);
        if self.windows_style {
            format!("http://{}.localhost/{encoded}", self.protocol)
        } else {
            format!("{}://localhost/{encoded}", self.protocol)
        }
    }
}

/// Fallback artwork for the active game
pub fn game_icon_path(game: &impl GameContext) -> String {
    format!("games/{}.webp", slug_or_empty(game))
}

/// Resolves the icon of a mod or dependant.
///
/// The game context is only read for local values without an icon, and is
/// read on every call. The converter result is returned unchanged.
pub fn icon_src<S, G, C>(item: &S, game: &G, converter: &C) -> String
where
    S: IconSource + ?Sized,
    G: GameContext + ?Sized,
    C: FileSrcConverter + ?Sized,
{
    match item.icon_target() {
        IconTarget::Remote(name) => thunderstore_icon_url(&name),
        IconTarget::LocalFile(path) => converter.convert_file_src(path),
        IconTarget::GameFallback => game_icon_path(&game),
    }
}
