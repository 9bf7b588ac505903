//! Global gcal-link configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::date_format::{FormatOptions, TimeSource, TokenStyle};
use crate::error::{GcalError, GcalResult};

/// Prefix for environment overrides, e.g. `GCAL_LINK_SOURCE=utc`.
const ENV_PREFIX: &str = "GCAL_LINK";

/// Global configuration at ~/.config/gcal-link/config.toml
///
/// Every key is optional; command-line flags take precedence.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct GcalConfig {
    /// Clock used by `format` when `--source` is not given
    #[serde(default)]
    pub source: TimeSource,

    /// Token layout used by `format` when `--style` is not given
    #[serde(default)]
    pub style: TokenStyle,

    /// Open generated links in the default browser
    #[serde(default)]
    pub open_browser: bool,
}

impl GcalConfig {
    pub fn config_path() -> GcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GcalError::Config("Could not determine config directory".into()))?
            .join("gcal-link");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented template there
    /// on first run.
    pub fn load() -> GcalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (which may not exist), with `GCAL_LINK_*`
    /// environment variables layered on top.
    pub fn load_from(path: &Path) -> GcalResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| GcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| GcalError::Config(e.to_string()))
    }

    /// Load from the default location without creating anything, falling
    /// back to defaults when the config is missing or unreadable.
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                log::warn!("{}; using default config", e);
                Self::default()
            }
        }
    }

    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            log::warn!("{}; using default config", e);
            Self::default()
        })
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::new(self.source, self.style)
    }

    /// Write the config to `path` as TOML.
    pub fn save_to(&self, path: &Path) -> GcalResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| GcalError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| GcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> GcalResult<()> {
        let contents = "\
# gcal-link configuration

# Clock used by `gcal-link format`: \"local\" or \"utc\"
# source = \"local\"

# Token layout used by `gcal-link format`: \"all-day\", \"floating\" or \"instant\"
# style = \"floating\"

# Open generated links in the default browser:
# open_browser = false
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GcalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| GcalError::Config(format!("Could not write config file: {e}")))?;

        log::info!("Created default config at {}", path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GcalConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, GcalConfig::default());
        assert_eq!(
            config.format_options(),
            FormatOptions::new(TimeSource::Local, TokenStyle::Floating)
        );
    }

    #[test]
    fn default_template_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        GcalConfig::create_default_config(&path).unwrap();
        assert!(path.exists());
        assert_eq!(GcalConfig::load_from(&path).unwrap(), GcalConfig::default());
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "source = \"utc\"\nstyle = \"instant\"\nopen_browser = true\n",
        )
        .unwrap();

        let config = GcalConfig::load_from(&path).unwrap();
        assert_eq!(config.source, TimeSource::Utc);
        assert_eq!(config.style, TokenStyle::Instant);
        assert!(config.open_browser);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = GcalConfig {
            source: TimeSource::Utc,
            style: TokenStyle::AllDay,
            open_browser: false,
        };

        config.save_to(&path).unwrap();
        assert_eq!(GcalConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn load_from_or_default_leaves_missing_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert_eq!(GcalConfig::load_from_or_default(&path), GcalConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn load_from_or_default_ignores_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "open_browser = \"sometimes\"\n").unwrap();

        assert_eq!(GcalConfig::load_from_or_default(&path), GcalConfig::default());
    }

    #[test]
    fn rejects_unknown_style() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "style = \"weekly\"\n").unwrap();

        let err = GcalConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, GcalError::Config(_)));
    }
}
