//! Per-portfolio UI preference cache.
//!
//! Files are stored under `.cache/` using a hash of the portfolio path as the
//! directory name to avoid filesystem issues. The format is a tiny TOML file
//! holding the window geometry and theme last used for that document. Errors
//! are ignored throughout to keep the UI responsive.

use crate::config::{AppConfig, ThemeMode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const CACHE_DIR: &str = ".cache";

/// UI state remembered between sessions for one portfolio document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPrefs {
    pub theme: ThemeMode,
    pub window_width: f32,
    pub window_height: f32,
    #[serde(default)]
    pub window_pos_x: Option<f32>,
    #[serde(default)]
    pub window_pos_y: Option<f32>,
}

impl UiPrefs {
    pub fn from_config(config: &AppConfig) -> Self {
        UiPrefs {
            theme: config.theme,
            window_width: config.window_width,
            window_height: config.window_height,
            window_pos_x: config.window_pos_x,
            window_pos_y: config.window_pos_y,
        }
    }

    /// Overlay the remembered values onto a freshly loaded config. The base
    /// config keeps authority over everything not remembered here.
    pub fn apply_to(&self, config: &mut AppConfig) {
        config.theme = self.theme;
        if self.window_width.is_finite() && self.window_width > 0.0 {
            config.window_width = self.window_width;
        }
        if self.window_height.is_finite() && self.window_height > 0.0 {
            config.window_height = self.window_height;
        }
        config.window_pos_x = self.window_pos_x;
        config.window_pos_y = self.window_pos_y;
    }
}

pub fn load_ui_prefs(portfolio_path: &Path) -> Option<UiPrefs> {
    let path = prefs_path(portfolio_path);
    let data = fs::read_to_string(path).ok()?;
    toml::from_str(&data).ok()
}

pub fn save_ui_prefs(portfolio_path: &Path, prefs: &UiPrefs) {
    let path = prefs_path(portfolio_path);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(contents) = toml::to_string(prefs) {
        let _ = fs::write(path, contents);
    }
}

pub fn hash_dir(portfolio_path: &Path) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(portfolio_path.as_os_str().to_string_lossy().as_bytes());
    let hash = format!("{:x}", hasher.finalize());
    Path::new(CACHE_DIR).join(hash)
}

fn prefs_path(portfolio_path: &Path) -> PathBuf {
    hash_dir(portfolio_path).join("prefs.toml")
}
