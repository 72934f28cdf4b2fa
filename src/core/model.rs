//! Mod data structures as handed over by the host client
//!
//! The host serializes mods with a `type` discriminator and camelCase field
//! names. This module mirrors that shape as sum types so that callers
//! `match` on the variant instead of probing for attributes.
//!
//! # Example
//!
//! ```
//! use modhelper::core::model::Mod;
//!
//! let json = r#"{
//!     "type": "remote",
//!     "name": "CoolMod",
//!     "author": "Bob",
//!     "version": "1.0.0",
//!     "versions": [{ "name": "2.0.0" }, { "name": "1.0.0" }]
//! }"#;
//!
//! let m: Mod = serde_json::from_str(json).unwrap();
//! assert!(m.is_outdated());
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single published version of a mod
///
/// Only the name takes part in comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModVersion {
    pub name: String,
}

impl ModVersion {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A mod hosted on the Thunderstore registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMod {
    pub name: String,
    pub author: String,
    /// Currently installed version
    pub version: String,
    /// Known versions, newest first. Never re-sorted here.
    #[serde(default)]
    pub versions: Vec<ModVersion>,
    /// Composite `Author-Name-Version` identifier, when the host sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// A mod that only exists in the local install
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalMod {
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub versions: Vec<ModVersion>,
    /// Icon file on disk
    #[serde(default)]
    pub icon: Option<PathBuf>,
}

/// An installed or browsable mod, discriminated by `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Mod {
    Remote(RemoteMod),
    Local(LocalMod),
}

impl Mod {
    pub fn name(&self) -> &str {
        match self {
            Mod::Remote(m) => &m.name,
            Mod::Local(m) => &m.name,
        }
    }

    pub fn author(&self) -> Option<&str> {
        match self {
            Mod::Remote(m) => Some(&m.author),
            Mod::Local(m) => m.author.as_deref(),
        }
    }

    /// The installed version string
    pub fn version(&self) -> &str {
        match self {
            Mod::Remote(m) => &m.version,
            Mod::Local(m) => &m.version,
        }
    }

    pub fn versions(&self) -> &[ModVersion] {
        match self {
            Mod::Remote(m) => &m.versions,
            Mod::Local(m) => &m.versions,
        }
    }

    /// Newest known version, i.e. `versions[0]`
    pub fn latest_version(&self) -> Option<&ModVersion> {
        self.versions().first()
    }

    pub fn icon(&self) -> Option<&Path> {
        match self {
            Mod::Remote(_) => None,
            Mod::Local(m) => m.icon.as_deref(),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Mod::Remote(_))
    }

    /// Whether a newer version than the installed one is known.
    ///
    /// A mod without version history is never outdated, so mods whose
    /// metadata has not loaded yet don't show a spurious update badge.
    /// Versions are compared by exact string equality.
    pub fn is_outdated(&self) -> bool {
        match self.latest_version() {
            Some(latest) => self.version() != latest.name,
            None => false,
        }
    }
}

/// Free-function form of [`Mod::is_outdated`]
pub fn is_outdated(m: &Mod) -> bool {
    m.is_outdated()
}

/// Remote reference to a mod inside a dependency list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteDependant {
    pub name: String,
    pub author: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Local reference to a mod inside a dependency list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalDependant {
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub icon: Option<PathBuf>,
}

/// Lightweight mod reference used in dependency views
///
/// Same discriminated shape as [`Mod`] without version history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Dependant {
    Remote(RemoteDependant),
    Local(LocalDependant),
}

impl Dependant {
    pub fn name(&self) -> &str {
        match self {
            Dependant::Remote(d) => &d.name,
            Dependant::Local(d) => &d.name,
        }
    }

    pub fn version(&self) -> &str {
        match self {
            Dependant::Remote(d) => &d.version,
            Dependant::Local(d) => &d.version,
        }
    }
}

/// A key/value record from a mod's config file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigEntry {
    #[serde(default)]
    pub name: String,
    /// Free text that may embed a `ListSeparator=` marker
    #[serde(default)]
    pub description: Option<String>,
}

impl ConfigEntry {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(version: &str, versions: &[&str]) -> Mod {
        Mod::Remote(RemoteMod {
            name: "CoolMod".to_string(),
            author: "Bob".to_string(),
            version: version.to_string(),
            versions: versions.iter().map(|v| ModVersion::new(*v)).collect(),
            full_name: None,
        })
    }

    #[test]
    fn test_empty_history_is_never_outdated() {
        assert!(!remote("1.0.0", &[]).is_outdated());
        assert!(!remote("", &[]).is_outdated());
    }

    #[test]
    fn test_latest_installed_is_not_outdated() {
        assert!(!remote("1.0.0", &["1.0.0"]).is_outdated());
    }

    #[test]
    fn test_older_installed_is_outdated() {
        assert!(remote("1.0.0", &["2.0.0", "1.0.0"]).is_outdated());
    }

    #[test]
    fn test_only_first_version_is_compared() {
        // Installed matches an older entry, which doesn't count
        assert!(remote("1.0.0", &["1.1.0", "1.0.0"]).is_outdated());
        // Installed matches the head even though the list is not sorted
        assert!(!remote("0.9.0", &["0.9.0", "3.0.0"]).is_outdated());
    }

    #[test]
    fn test_version_comparison_is_exact() {
        assert!(remote("v1.0.0", &["1.0.0"]).is_outdated());
        assert!(remote("1.0", &["1.0.0"]).is_outdated());
    }

    #[test]
    fn test_local_mod_outdated_check() {
        let m = Mod::Local(LocalMod {
            name: "Patch".to_string(),
            author: None,
            version: "1.0.0".to_string(),
            versions: vec![],
            icon: None,
        });
        assert!(!is_outdated(&m));
    }

    #[test]
    fn test_deserialize_remote_with_extra_fields() {
        let json = r#"{
            "type": "remote",
            "name": "CoolMod",
            "author": "Bob",
            "version": "1.2.3",
            "downloads": 1200,
            "isPinned": false,
            "fullName": "Bob-CoolMod-1.2.3"
        }"#;
        let m: Mod = serde_json::from_str(json).unwrap();
        let Mod::Remote(r) = &m else {
            panic!("expected remote mod");
        };
        assert_eq!(r.full_name.as_deref(), Some("Bob-CoolMod-1.2.3"));
        assert!(r.versions.is_empty());
        assert!(m.is_remote());
    }

    #[test]
    fn test_deserialize_local_with_null_icon() {
        let json = r#"{ "type": "local", "name": "Patch", "icon": null }"#;
        let m: Mod = serde_json::from_str(json).unwrap();
        assert_eq!(m.icon(), None);
        assert_eq!(m.author(), None);
        assert_eq!(m.version(), "");
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let json = r#"{ "type": "cloud", "name": "X" }"#;
        assert!(serde_json::from_str::<Mod>(json).is_err());
    }

    #[test]
    fn test_serialize_keeps_discriminator() {
        let json = serde_json::to_value(remote("1.0.0", &["1.0.0"])).unwrap();
        assert_eq!(json["type"], "remote");
        assert!(json.get("fullName").is_none());
    }

    #[test]
    fn test_accessors_cover_both_variants() {
        let remote = remote("1.0.0", &["1.1.0"]);
        assert_eq!(remote.name(), "CoolMod");
        assert_eq!(remote.author(), Some("Bob"));
        assert_eq!(remote.latest_version().map(|v| v.name.as_str()), Some("1.1.0"));

        let local: Dependant = serde_json::from_str(
            r#"{ "type": "local", "name": "Patch", "version": "0.2.0" }"#,
        )
        .unwrap();
        assert_eq!(local.name(), "Patch");
        assert_eq!(local.version(), "0.2.0");

        let dep: Dependant = serde_json::from_str(
            r#"{ "type": "remote", "name": "CoolMod", "author": "Bob", "version": "1.2.3" }"#,
        )
        .unwrap();
        assert_eq!(dep.name(), "CoolMod");
        assert_eq!(dep.version(), "1.2.3");
    }

    #[test]
    fn test_config_entry_null_description() {
        let entry: ConfigEntry =
            serde_json::from_str(r#"{ "name": "Keys", "description": null }"#).unwrap();
        assert_eq!(entry.description, None);
    }
}
