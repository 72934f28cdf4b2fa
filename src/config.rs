use crate::core::error::{Error, Result};
use crate::core::game::Game;
use crate::core::icon::AssetProtocol;
use crate::helpers::Locale;
use crate::utils::get_config_path;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the display helpers
///
/// Read-only: modhelper never writes this file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Language of relative time labels
    #[serde(default)]
    pub locale: Locale,
    /// Game used when none is given on the command line
    #[serde(default)]
    pub active_game: Option<Game>,
    /// Webview protocol serving local icon files
    #[serde(default = "default_asset_protocol")]
    pub asset_protocol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            active_game: None,
            asset_protocol: default_asset_protocol(),
        }
    }
}

impl AppConfig {
    /// Converter for local icon files
    pub fn file_src_converter(&self) -> AssetProtocol {
        AssetProtocol::new(self.asset_protocol.clone())
    }
}

fn default_asset_protocol() -> String {
    AssetProtocol::DEFAULT_PROTOCOL.to_string()
}

/// Reads a config file.
///
/// # Errors
///
/// Returns `Err` if the file can't be read or isn't valid config JSON.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Loads the config from the platform config directory, or returns defaults
/// if it is missing or malformed.
pub fn load_config() -> AppConfig {
    let Some(path) = get_config_path() else {
        tracing::debug!("{}", Error::ConfigDirUnavailable);
        return AppConfig::default();
    };

    if !path.exists() {
        return AppConfig::default();
    }

    match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring config at {}: {e}", path.display());
            AppConfig::default()
        }
    }
}
