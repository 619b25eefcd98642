//! Config file handling

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::context::Environment;
use crate::errors::Ec2MetaEnvError;

/// Environment variable naming an alternate config directory
pub const CONFIG_DIR_ENV: &str = "EC2_META_ENV_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    defaults: DefaultsSection,
    metadata: MetadataSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DefaultsSection {
    options: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct MetadataSection {
    url: Option<String>,
}

/// ec2-meta-env configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub config_dir: PathBuf,
    /// Options inserted before the ones given on the command line
    pub default_options: Vec<String>,
    /// Base URL of the metadata service
    pub metadata_url: Option<String>,
}

impl Config {
    fn empty(config_dir: PathBuf) -> Self {
        Self {
            config_dir,
            default_options: Vec::new(),
            metadata_url: None,
        }
    }

    /// Load configuration from `config.toml` in the config directory.
    ///
    /// A missing file is not an error.
    pub fn load(env: &Environment) -> Result<Self, Ec2MetaEnvError> {
        let config_dir = Self::resolve_config_dir(env);
        let config_file = config_dir.join(CONFIG_FILE);

        if !config_file.exists() {
            return Ok(Self::empty(config_dir));
        }

        let content = std::fs::read_to_string(&config_file).map_err(|e| {
            Ec2MetaEnvError::Config(format!("Failed to read {}: {}", config_file.display(), e))
        })?;

        Self::parse(&content, config_dir)
    }

    /// Parse config file content
    pub fn parse(content: &str, config_dir: PathBuf) -> Result<Self, Ec2MetaEnvError> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| Ec2MetaEnvError::Config(format!("Invalid config TOML: {}", e)))?;

        Ok(Self {
            config_dir,
            default_options: file.defaults.options,
            metadata_url: file.metadata.url.filter(|url| !url.is_empty()),
        })
    }

    /// Fallback used when the config file cannot be loaded
    pub fn fallback(env: &Environment) -> Self {
        Self::empty(Self::resolve_config_dir(env))
    }

    /// `$EC2_META_ENV_CONFIG_DIR`, else the platform config dir
    fn resolve_config_dir(env: &Environment) -> PathBuf {
        if let Some(dir) = env.var(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return PathBuf::from(dir);
        }

        dirs::config_dir()
            .map(|p| p.join("ec2-meta-env"))
            .unwrap_or_else(|| PathBuf::from(".ec2-meta-env"))
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
