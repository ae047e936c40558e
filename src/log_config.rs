use crate::{PackageSettings, Visibility};
use std::{env, path::PathBuf};

/// Name of the environment variable with the default verbosity.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Name of the environment variable with the package settings.
pub const ENV_LOG: &str = "LOG";
/// Name of the environment variable with the path of an additional log file.
pub const ENV_LOG_FILE: &str = "LOG_FILE";
/// Name of the environment variable that switches colors off, if set to a non-empty value.
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// The configuration of the writers that `pkg_logger` sets up by itself.
///
/// Usually read from the environment with [`LogConfig::from_env`]:
///
/// * `LOG_LEVEL`: the default verbosity, used for all packages in `LOG` without explicit
///   verbosity (see [`Visibility::parse`]),
/// * `LOG`: the package settings (see [`PackageSettings`]), e.g. `users,database@timer,*@error`,
/// * `LOG_FILE`: optional path of a file to which the log is written additionally,
/// * `NO_COLOR`: if set to a non-empty value, the console output is not colored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    /// The default verbosity token.
    pub default_level: String,
    /// The package settings string.
    pub package_rules: String,
    /// Path of an additional log file.
    pub log_file: Option<PathBuf>,
    /// Whether the console output is colored.
    pub colors: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: String::new(),
            package_rules: String::new(),
            log_file: None,
            colors: true,
        }
    }
}

impl LogConfig {
    /// Reads the configuration from the environment.
    ///
    /// Unset variables are treated like empty ones; an empty `LOG_FILE` means "no file".
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            default_level: env::var(ENV_LOG_LEVEL).unwrap_or_default(),
            package_rules: env::var(ENV_LOG).unwrap_or_default(),
            log_file: env::var_os(ENV_LOG_FILE)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            colors: env::var_os(ENV_NO_COLOR).is_none_or(|v| v.is_empty()),
        }
    }

    /// The visibility for packages without explicit verbosity.
    #[must_use]
    pub fn default_visibility(&self) -> Visibility {
        Visibility::parse(&self.default_level)
    }

    /// Parses the package settings.
    #[must_use]
    pub fn package_settings(&self) -> PackageSettings {
        PackageSettings::parse(&self.package_rules, self.default_visibility())
    }
}
