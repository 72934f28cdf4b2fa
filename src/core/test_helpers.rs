//! Shared test utilities for core module tests
//!
//! Provides builders for the host shapes so test suites don't repeat struct
//! literals. This module is only compiled in test mode.

use crate::core::model::{LocalMod, Mod, ModVersion, RemoteMod};
use std::path::{Path, PathBuf};

/// Remote mod without a full name and without version history
pub fn remote_mod(author: &str, name: &str, version: &str) -> Mod {
    Mod::Remote(RemoteMod {
        name: name.to_string(),
        author: author.to_string(),
        version: version.to_string(),
        versions: Vec::new(),
        full_name: None,
    })
}

/// Local mod with an optional icon file
pub fn local_mod(name: &str, icon: Option<&str>) -> Mod {
    Mod::Local(LocalMod {
        name: name.to_string(),
        author: None,
        version: "1.0.0".to_string(),
        versions: Vec::new(),
        icon: icon.map(PathBuf::from),
    })
}

/// Replaces the version history, newest first
pub fn with_versions(mut m: Mod, versions: &[&str]) -> Mod {
    let versions = versions.iter().map(|v| ModVersion::new(*v)).collect();
    match &mut m {
        Mod::Remote(r) => r.versions = versions,
        Mod::Local(l) => l.versions = versions,
    }
    m
}

/// Converter that tags the path, so tests can tell it was called
pub fn tagging_converter(path: &Path) -> String {
    format!("file-src:{}", path.display())
}
