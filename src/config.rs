use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ease.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub regenerate: RegenerateConfig,
}

/// Output configuration - where new ViewModels are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for new ViewModel files
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

/// Values used when the user does not supply one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// State type offered when prompting
    #[serde(default = "default_state_type")]
    pub state_type: String,
}

/// Directory regeneration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegenerateConfig {
    /// Directories or files to skip when regenerating a whole tree
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("lib/view_models")
}

fn default_state_type() -> String {
    "int".to_string()
}

fn default_exclude() -> Vec<String> {
    vec![".dart_tool".to_string(), "build".to_string()]
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            state_type: default_state_type(),
        }
    }
}

impl Default for RegenerateConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default_config())
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.defaults.state_type.trim().is_empty() {
            anyhow::bail!("defaults.state_type must not be empty");
        }

        Ok(())
    }

    /// Generate a default configuration
    pub fn default_config() -> Self {
        Config {
            output: OutputConfig::default(),
            defaults: DefaultsConfig::default(),
            regenerate: RegenerateConfig::default(),
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
