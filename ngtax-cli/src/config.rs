//! `ngtax.toml` settings.
//!
//! ```toml
//! log_level = "info"
//! log_file = "ngtax.log"
//! default_vat_rate = 7.5
//! default_regime = "legacy"
//! reporting_months = 4
//! user = "Adaeze Okafor"
//! ```

use std::path::{Path, PathBuf};

use ngtax_core::PitRegime;
use ngtax_core::calculations::vat::STANDARD_VAT_RATE;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// File read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "ngtax.toml";

/// Environment variable naming the signed-in user.
pub const USER_ENV_VAR: &str = "NGTAX_USER";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// EnvFilter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    /// Percent.
    pub default_vat_rate: Decimal,
    pub default_regime: PitRegime,
    pub reporting_months: u32,
    pub user: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_file: None,
            default_vat_rate: STANDARD_VAT_RATE,
            default_regime: PitRegime::default(),
            reporting_months: 12,
            user: None,
        }
    }
}

impl CliConfig {
    pub fn from_toml_str(
        path: &Path,
        contents: &str,
    ) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path`, or [`DEFAULT_CONFIG_FILE`] when no path is given.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = Self::from_toml_str(path, &contents)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolves the signed-in user: `--user`, then [`USER_ENV_VAR`], then the
    /// config file.
    pub fn resolve_user(
        &self,
        flag: Option<&str>,
        env: Option<&str>,
    ) -> Option<String> {
        flag.or(env)
            .or(self.user.as_deref())
            .map(str::to_string)
    }
}
