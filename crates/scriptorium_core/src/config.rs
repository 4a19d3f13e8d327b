//! Configuration loading.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (`scriptorium.toml` at the workspace root, via `include_str!`)
//! - `~/.config/scriptorium/scriptorium.toml`
//! - `./scriptorium.toml`
//!
//! The API credential is not part of the configuration files; clients read it
//! from the environment.

use config::{Config, File, FileFormat};
use scriptorium_error::{ConfigError, ScriptoriumError, ScriptoriumResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../scriptorium.toml");

/// Gemini backend settings.
///
/// ```toml
/// [gemini]
/// model = "gemini-2.5-flash"
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeminiSettings {
    /// Model identifier used for both calls
    pub model: String,
    /// REST endpoint root, without trailing `/models`
    pub base_url: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}

/// Generation flow settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Duration of the cosmetic outline phase in milliseconds
    pub outline_delay_ms: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            outline_delay_ms: 2000,
        }
    }
}

impl GeneratorSettings {
    /// Outline phase duration.
    pub fn outline_delay(&self) -> Duration {
        Duration::from_millis(self.outline_delay_ms)
    }
}

/// Top-level configuration.
///
/// # Example
///
/// ```no_run
/// use scriptorium_core::ScriptoriumConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScriptoriumConfig::load()?;
/// println!("model: {}", config.gemini.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ScriptoriumConfig {
    /// Gemini backend settings
    #[serde(default)]
    pub gemini: GeminiSettings,
    /// Generation flow settings
    #[serde(default)]
    pub generator: GeneratorSettings,
}

impl ScriptoriumConfig {
    /// Load configuration from a specific file path.
    ///
    /// Missing keys fall back to built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ScriptoriumResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ScriptoriumError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScriptoriumError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and skipped when absent.
    #[instrument]
    pub fn load() -> ScriptoriumResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scriptorium/scriptorium.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("scriptorium").required(false));

        builder
            .build()
            .map_err(|e| {
                ScriptoriumError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScriptoriumError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_defaults_match_builtin_defaults() -> anyhow::Result<()> {
        let bundled: ScriptoriumConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        assert_eq!(bundled, ScriptoriumConfig::default());
        assert_eq!(bundled.generator.outline_delay(), Duration::from_secs(2));
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> anyhow::Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "[generator]\noutline_delay_ms = 250")?;

        let config = ScriptoriumConfig::from_file(file.path())?;

        assert_eq!(config.generator.outline_delay_ms, 250);
        assert_eq!(config.gemini, GeminiSettings::default());
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_config_error() -> anyhow::Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "[generator]\noutline_delay_ms = \"soon\"")?;

        let err = ScriptoriumConfig::from_file(file.path()).unwrap_err();

        assert!(err.to_string().contains("Configuration Error"));
        Ok(())
    }
}
