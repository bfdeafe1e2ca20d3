//! Persistence for the theme preference.
//!
//! The preference lives as a small JSON file under the platform config
//! directory. A missing or unreadable file falls back to the default
//! mode so startup never fails on it.

use crate::ui::theme::ThemeMode;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Preferences {
    theme: ThemeMode,
}

/// The application config directory, created on first use.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre!("no config directory on this platform"))?;
    let dir = base.join("folio");
    if !dir.exists() {
        fs::create_dir_all(&dir).wrap_err("failed to create config directory")?;
    }
    Ok(dir)
}

/// Path of the persisted theme preference.
pub fn preferences_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("theme.json"))
}

/// Read the theme preference from `path`.
pub fn load_theme_from(path: &Path) -> Result<ThemeMode> {
    let json = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read preferences from {:?}", path))?;
    let prefs: Preferences =
        serde_json::from_str(&json).wrap_err("failed to deserialize preferences")?;
    Ok(prefs.theme)
}

/// Write the theme preference to `path`, creating parent directories
/// as needed.
pub fn save_theme_to(path: &Path, theme: ThemeMode) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).wrap_err("failed to create preferences directory")?;
        }
    }
    let json = serde_json::to_string_pretty(&Preferences { theme })
        .wrap_err("failed to serialize preferences")?;
    fs::write(path, json).wrap_err_with(|| format!("failed to write preferences to {:?}", path))?;
    Ok(())
}

/// Load the persisted preference, defaulting when absent or invalid.
pub fn load_theme() -> ThemeMode {
    preferences_path()
        .and_then(|path| load_theme_from(&path))
        .unwrap_or_default()
}

/// Persist the preference at the standard location.
pub fn save_theme(theme: ThemeMode) -> Result<()> {
    save_theme_to(&preferences_path()?, theme)
}
