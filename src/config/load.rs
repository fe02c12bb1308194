//! Configuration loading from files.
//!
//! Settings come from an optional YAML file layered under `PAGEFOLD__*`
//! environment variables (`PAGEFOLD__SITE__OUTPUT=public`).

use std::path::{Path, PathBuf};

use super::{ConfigError, Settings};

/// Default settings file name.
pub const CONFIG_FILE: &str = "pagefold.yaml";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "PAGEFOLD";

impl Settings {
    /// Resolve the command line argument to an absolute settings path,
    /// defaulting to `pagefold.yaml` in the current directory.
    pub fn path_from_arg(config_file: Option<&Path>) -> Result<PathBuf, ConfigError> {
        let config_file = config_file.unwrap_or(Path::new(CONFIG_FILE));
        if config_file.is_relative() {
            Ok(std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_file))
        } else {
            Ok(config_file.to_path_buf())
        }
    }

    /// Load settings from a file path. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path
            .as_os_str()
            .to_str()
            .ok_or_else(|| ConfigError::EncodePath(path.to_path_buf()))?;

        if !path.exists() {
            tracing::info!(path = %path.display(), "no settings file, using defaults");
        }

        Ok(config::Config::builder()
            .add_source(config::File::new(path_str, config::FileFormat::Yaml).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}
