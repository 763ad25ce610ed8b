use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::CONFIG_ENV;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) history_limit: Option<usize>,
    /// Extra named constants, on top of the built-in table
    #[serde(default)]
    pub(crate) constants: BTreeMap<String, f64>,
}

/// Where the active configuration came from
#[derive(Debug)]
pub(crate) enum ConfigSource {
    Defaults,
    File(PathBuf),
    Invalid { path: PathBuf, error: String },
}

impl Config {
    /// Load the first config file found, falling back to defaults.
    ///
    /// Problems are reported through the returned [`ConfigSource`] rather than
    /// logged here, because logging is configured from the result.
    pub(crate) fn load() -> (Self, ConfigSource) {
        if let Ok(explicit) = std::env::var(CONFIG_ENV)
            && !explicit.trim().is_empty()
        {
            let path = PathBuf::from(explicit);
            if !path.exists() {
                return (
                    Self::default(),
                    ConfigSource::Invalid {
                        error: "file not found".to_string(),
                        path,
                    },
                );
            }
            return Self::load_from(&path);
        }

        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        (Self::default(), ConfigSource::Defaults)
    }

    pub(crate) fn load_from(path: &Path) -> (Self, ConfigSource) {
        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str::<Config>(&content).map_err(|e| e.to_string()));
        match parsed {
            Ok(config) => (config, ConfigSource::File(path.to_path_buf())),
            Err(error) => (
                Self::default(),
                ConfigSource::Invalid {
                    path: path.to_path_buf(),
                    error,
                },
            ),
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/scicalc/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("scicalc").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("scicalc").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.scicalc.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".scicalc.toml"));
        }

        paths
    }
}
