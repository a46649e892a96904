use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;
use crate::state::{DEFAULT_CAPTION_HEIGHT, MAX_CAPTION_HEIGHT};

/// Top-level configuration for decor.
///
/// Loaded read-only from `~/.config/decor/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Frame defaults.
    pub frame: FrameConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Defaults applied to managed windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Caption height in logical pixels used when the host passes a
    /// non-positive value.
    pub caption_height: i32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            caption_height: DEFAULT_CAPTION_HEIGHT,
        }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    pub fn validate(&mut self) {
        self.frame.caption_height = self.frame.caption_height.clamp(1, MAX_CAPTION_HEIGHT);
    }
}

/// Returns the config directory: `~/.config/decor/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("decor"))
}

/// Returns the config file path: `~/.config/decor/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Parses and validates configuration text.
pub fn parse(content: &str) -> Result<Config, String> {
    let mut config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
    config.validate();
    Ok(config)
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn try_load() -> Result<Option<Config>, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(format!("{}: {e}", path.display())),
    };
    parse(&content)
        .map(Some)
        .map_err(|e| format!("{}: {e}", path.display()))
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently yields defaults; any other failure prints a
/// warning first.
pub fn load() -> Config {
    match try_load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_frame_constants() {
        // Arrange / Act
        let config = Config::default();

        // Assert
        assert_eq!(config.frame.caption_height, 32);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_sections() {
        // Arrange
        let toml_str = "[logging]\nenabled = true\nlevel = \"debug\"\n";

        // Act
        let config = parse(toml_str).unwrap();

        // Assert
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.frame.caption_height, 32);
    }

    #[test]
    fn caption_height_is_clamped() {
        let config = parse("[frame]\ncaption_height = -4\n").unwrap();
        assert_eq!(config.frame.caption_height, 1);

        let config = parse("[frame]\ncaption_height = 4000\n").unwrap();
        assert_eq!(config.frame.caption_height, 512);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse("[frame\ncaption_height = 3").is_err());
    }
}
