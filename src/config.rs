//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then environment variables, then explicit command-line values.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CATALOG_FILE, DEFAULT_LOAD_TIMEOUT_SECS,
    DEFAULT_LOG_LEVEL, DEFAULT_MAX_REPORTED_ERRORS, ENV_CATALOG_PATH, ENV_TIMEOUT_SECS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Where the catalog text comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Path of the delimited catalog file
    pub path: PathBuf,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG_FILE),
        }
    }
}

/// Loader behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    /// Load deadline in seconds, `None` waits indefinitely
    pub timeout_secs: Option<u64>,

    /// Maximum number of decode error messages kept in statistics
    pub max_reported_errors: usize,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            timeout_secs: Some(DEFAULT_LOAD_TIMEOUT_SECS),
            max_reported_errors: DEFAULT_MAX_REPORTED_ERRORS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level when neither RUST_LOG nor -v/-q is given
    pub level: String,

    /// Compact single-line output
    pub structured: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            structured: false,
        }
    }
}

/// Global configuration for catalog loading
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogSettings,
    pub loader: LoaderSettings,
    pub logging: LoggingSettings,
}

impl Config {
    /// Default location of the configuration file
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    ///
    /// `timeout_secs = 0` means no deadline.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config: Config = toml::from_str(&content)?;
        // 0 in the file disables the deadline, as it does for env and CLI
        if config.loader.timeout_secs == Some(0) {
            config.loader.timeout_secs = None;
        }
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Build the effective configuration from every layer
    ///
    /// An explicitly named config file must exist; the default one is
    /// optional.
    pub fn load_layered(
        catalog_path: Option<PathBuf>,
        config_file: Option<&Path>,
        timeout_secs: Option<u64>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        if let Some(path) = catalog_path {
            config.catalog.path = path;
        }
        if let Some(seconds) = timeout_secs {
            config.loader.timeout_secs = (seconds > 0).then_some(seconds);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    ///
    /// A timeout of 0 disables the deadline.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_CATALOG_PATH) {
            debug!("{} overrides catalog path: {}", ENV_CATALOG_PATH, path);
            self.catalog.path = PathBuf::from(path);
        }

        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            let seconds: u64 = value.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_TIMEOUT_SECS, value
                ))
            })?;
            self.loader.timeout_secs = (seconds > 0).then_some(seconds);
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(Error::configuration("Catalog path must not be empty"));
        }

        if self.loader.timeout_secs == Some(0) {
            return Err(Error::configuration(
                "Load timeout must be positive; omit it to wait indefinitely",
            ));
        }

        Ok(())
    }

    /// Load deadline as a duration
    pub fn load_timeout(&self) -> Option<Duration> {
        self.loader.timeout_secs.map(Duration::from_secs)
    }

    /// Set the catalog path
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog.path = path.into();
        self
    }

    /// Set the load deadline in seconds
    pub fn with_timeout_secs(mut self, timeout_secs: Option<u64>) -> Self {
        self.loader.timeout_secs = timeout_secs;
        self
    }

    pub fn with_max_reported_errors(mut self, limit: usize) -> Self {
        self.loader.max_reported_errors = limit;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.catalog.path, PathBuf::from("filtered-eclipses.csv"));
        assert_eq!(config.loader.timeout_secs, Some(30));
        assert_eq!(config.load_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.loader.max_reported_errors, 100);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [catalog]
            path = "/data/eclipses.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.path, PathBuf::from("/data/eclipses.csv"));
        assert_eq!(config.loader, LoaderSettings::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[loader]\ntimeout_secs = 5\nmax_reported_errors = 3\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.loader.timeout_secs, Some(5));
        assert_eq!(config.loader.max_reported_errors, 3);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_zero_timeout_in_file_disables_deadline() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[loader]\ntimeout_secs = 0").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.loader.timeout_secs, None);
        assert_eq!(config.load_timeout(), None);
        assert!(config.validate().is_ok());

        let layered = Config::load_layered(None, Some(file.path()), None).unwrap();
        assert_eq!(layered.loader.timeout_secs, None);
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[loader\ntimeout_secs = ").unwrap();

        assert!(matches!(
            Config::from_file(file.path()),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        assert!(Config::load_layered(None, Some(&missing), None).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_overrides(lookup_from(&[
                (ENV_CATALOG_PATH, "/tmp/catalog.csv"),
                (ENV_TIMEOUT_SECS, "0"),
            ]))
            .unwrap();

        assert_eq!(config.catalog.path, PathBuf::from("/tmp/catalog.csv"));
        assert_eq!(config.loader.timeout_secs, None);

        let mut config = Config::default();
        assert!(
            config
                .apply_env_overrides(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")]))
                .is_err()
        );
    }

    #[test]
    fn test_arguments_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[catalog]\npath = \"from-file.csv\"").unwrap();

        let config =
            Config::load_layered(Some(PathBuf::from("from-args.csv")), Some(file.path()), Some(0))
                .unwrap();

        assert_eq!(config.catalog.path, PathBuf::from("from-args.csv"));
        assert_eq!(config.loader.timeout_secs, None);
    }

    #[test]
    fn test_validation() {
        assert!(Config::default().with_catalog_path("").validate().is_err());
        assert!(Config::default().with_timeout_secs(Some(0)).validate().is_err());
        assert!(Config::default().with_timeout_secs(None).validate().is_ok());
    }
}
