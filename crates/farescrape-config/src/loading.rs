use crate::error::{ConfigError, Result};
use crate::settings::Settings;
use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "farescrape.toml";

/// Prefix of environment overrides; nesting uses `__`.
pub const ENV_PREFIX: &str = "FARESCRAPE_";

/// Finds `farescrape.toml` in `root`.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    let path = root.join(DEFAULT_CONFIG_FILE);
    path.is_file().then_some(path)
}

impl Settings {
    /// Load settings from defaults, a config file and the environment.
    /// Priority: environment variables > config file > defaults
    ///
    /// With no explicit path, `./farescrape.toml` is used if it exists.
    ///
    /// The result is not validated: callers apply their own overrides first
    /// and then call [`Settings::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if an explicit path does not exist
    /// and [`ConfigError::Load`] on malformed input.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let file = match config_path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => find_config(Path::new(".")),
        };
        Self::load_layers(file.as_deref())
    }

    fn load_layers(file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = file {
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(figment.extract().map_err(Box::new)?)
    }

    /// Renders the settings as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Render`] if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
