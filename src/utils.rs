//! Utility functions for locating configuration
//!
//! Directories follow the platform conventions provided by `directories`:
//!
//! - Linux: `~/.config/modhelper/`
//! - macOS: `~/Library/Application Support/io.modhelper.modhelper/`
//! - Windows: `%APPDATA%\modhelper\modhelper\config\`

use directories::ProjectDirs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("io", "modhelper", "modhelper").map(|pd| pd.config_dir().to_path_buf())
}

pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}
