use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unknown {kind}: '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    #[error("Duplicate {kind} in taxonomy: '{value}'")]
    DuplicateTaxonomyValue { kind: &'static str, value: String },

    #[error("Duplicate trigger for combination: {key}")]
    DuplicateTrigger { key: String },

    #[error("Trigger {key} has an empty '{field}' field")]
    EmptyField { key: String, field: &'static str },

    #[error("Registry definition not found: {path}")]
    DefinitionNotFound { path: PathBuf },

    #[error("Registry definition {path} has no [taxonomy] section and builtin data is disabled")]
    MissingTaxonomy { path: PathBuf },

    #[error("Failed to parse {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

impl RegistryError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DefinitionNotFound { .. } | Self::MissingTaxonomy { .. } => 2,
            Self::UnknownValue { .. } => 3,
            Self::DuplicateTaxonomyValue { .. } | Self::DuplicateTrigger { .. } => 4,
            Self::EmptyField { .. } => 5,
            Self::ConfigParse { .. }
            | Self::ConfigKeyNotFound { .. }
            | Self::InvalidConfigValue { .. } => 6,
            _ => 1,
        }
    }
}
