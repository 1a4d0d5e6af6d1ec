use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# mascot-registry configuration file
# Location: ~/.mascot-registry/config.toml

[registry]
# Registry definition file (TOML) with [taxonomy] and [[triggers]] sections
# Default: unset (builtin taxonomy and triggers only)
# Example: file = "/etc/mascot-registry/registry.toml"

# Layer the definition file over the builtin data
# Default: true
include_builtin = true
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Registry source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Definition file to build the registry from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Keep builtin triggers underneath the definition file
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
}

fn default_include_builtin() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            file: None,
            include_builtin: default_include_builtin(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut config: Config =
            toml::from_str(&content).map_err(|e| RegistryError::ConfigParse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        // Relative definition paths are relative to the base directory
        if let Some(file) = config.registry.file.take() {
            config.registry.file = Some(if file.is_relative() {
                base_dir.join(file)
            } else {
                file
            });
        }

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let mut stored = self.clone();
        if let Some(relative) = self
            .registry
            .file
            .as_deref()
            .and_then(|file| file.strip_prefix(base_dir).ok())
        {
            stored.registry.file = Some(relative.to_path_buf());
        }

        let content = toml::to_string_pretty(&stored).map_err(|e| RegistryError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "registry.file" => Some(self.file_display()),
            "registry.include_builtin" => Some(self.registry.include_builtin.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    ///
    /// An empty `registry.file` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "registry.file" => {
                let trimmed = value.trim();
                self.registry.file = if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                };
                Ok(())
            }
            "registry.include_builtin" => {
                self.registry.include_builtin = parse_bool(key, value)?;
                Ok(())
            }
            _ => Err(RegistryError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        vec![
            ("registry.file".to_string(), self.file_display()),
            (
                "registry.include_builtin".to_string(),
                self.registry.include_builtin.to_string(),
            ),
        ]
    }

    fn file_display(&self) -> String {
        self.registry
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(RegistryError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
