use crate::difficulty::Difficulty;
use serde::Deserialize;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings read from `config.toml`
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    pub(crate) game: GameConfig,
    pub(crate) interface: InterfaceConfig,
}

impl Config {
    /// `classnake/config.toml` under the platform's local configuration
    /// directory
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_local_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("classnake").join("config.toml"))
    }

    /// Parse the TOML file at `path`.  When `allow_missing` is set, a file
    /// that does not exist counts as an empty one.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid configuration.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        match fs_err::read_to_string(path) {
            Ok(src) => Ok(toml::from_str(&src)?),
            Err(e) if allow_missing && e.kind() == ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(ConfigError::Read(e)),
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// The difficulty preselected in the difficulty menu
    pub(crate) difficulty: Difficulty,
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct InterfaceConfig {
    /// Whether to capture mouse events so that buttons can be clicked
    pub(crate) mouse: bool,
}

impl Default for InterfaceConfig {
    fn default() -> InterfaceConfig {
        InterfaceConfig { mouse: true }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("could not locate the local configuration directory")]
    NoConfigDir,
    #[error("could not read the configuration file")]
    Read(#[source] io::Error),
    #[error("could not parse the configuration file")]
    Parse(#[from] toml::de::Error),
}
