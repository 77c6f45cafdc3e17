use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load configuration from disk, falling back to defaults when the file is
/// missing or malformed. A malformed file is reported but never fatal.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(raw) => match parse_config(&raw) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), "Ignoring malformed config: {err}");
                AppConfig::default()
            }
        },
        Err(_) => {
            info!(path = %path.display(), "No config file found, using defaults");
            AppConfig::default()
        }
    }
}

pub fn parse_config(raw: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(raw).context("Invalid TOML in config file")?;
    Ok(tables.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn empty_input_yields_defaults() {
        let config = parse_config("").unwrap();
        let defaults = AppConfig::default();
        assert_eq!(config.font_size, defaults.font_size);
        assert_eq!(config.theme, defaults.theme);
        assert_eq!(config.log_level, defaults.log_level);
    }

    #[test]
    fn partial_tables_keep_unrelated_defaults() {
        let config = parse_config(
            "[appearance]\ntheme = \"night\"\n\n[logging]\nlog_level = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.font_size, AppConfig::default().font_size);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let config = parse_config(
            "[appearance]\nfont_size = 18\nglow = true\n\n[future]\nanything = 1\n",
        )
        .unwrap();
        assert_eq!(config.font_size, 18);
    }
}
