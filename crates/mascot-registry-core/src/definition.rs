use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::taxonomy::{CategoryTaxonomy, Gemstone, Material, RingType};
use crate::trigger::{TriggerEntry, TriggerKey, BUILTIN_TRIGGERS};

/// TOML document a registry can be built from.
///
/// ```toml
/// [taxonomy]
/// category = "women"
/// subcategory = "rings"
/// ring_types = ["engagement"]
/// materials = ["platinum"]
/// gemstones = ["diamond"]
///
/// [[triggers]]
/// ring_type = "engagement"
/// material = "platinum"
/// gemstone = "diamond"
/// mascot_trigger = "snowman_misfire"
/// overlay = "sparkle_trail"
/// sound_effect = "goat_bleat"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<CategoryTaxonomy>,

    #[serde(default)]
    pub triggers: Vec<TriggerDefinition>,
}

/// One `[[triggers]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerDefinition {
    pub ring_type: RingType,
    pub material: Material,
    pub gemstone: Gemstone,
    pub mascot_trigger: String,
    pub overlay: String,
    pub sound_effect: String,
}

impl TriggerDefinition {
    pub fn key(&self) -> TriggerKey {
        TriggerKey::new(self.ring_type, self.material, self.gemstone)
    }

    pub fn entry(&self) -> TriggerEntry {
        TriggerEntry::new(&self.mascot_trigger, &self.overlay, &self.sound_effect)
    }

    pub fn from_parts(key: &TriggerKey, entry: &TriggerEntry) -> Self {
        Self {
            ring_type: key.ring_type,
            material: key.material,
            gemstone: key.gemstone,
            mascot_trigger: entry.mascot_trigger.clone(),
            overlay: entry.overlay.clone(),
            sound_effect: entry.sound_effect.clone(),
        }
    }
}

impl RegistryDefinition {
    /// Builtin taxonomy and triggers as a definition document
    pub fn from_builtin() -> Self {
        Self {
            taxonomy: Some(CategoryTaxonomy::default()),
            triggers: BUILTIN_TRIGGERS
                .iter()
                .map(|b| TriggerDefinition::from_parts(&b.key, &TriggerEntry::from(b)))
                .collect(),
        }
    }

    /// Load a definition file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RegistryError::DefinitionNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| RegistryError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[taxonomy]
category = "women"
subcategory = "rings"
ring_types = ["halo", "promise"]
materials = ["rose_gold"]
gemstones = ["opal"]

[[triggers]]
ring_type = "halo"
material = "rose_gold"
gemstone = "opal"
mascot_trigger = "goat_moonwalk"
overlay = "halo_glow"
sound_effect = "soft_bleat"
"#;

    #[test]
    fn test_parse_definition() {
        let def: RegistryDefinition = toml::from_str(SAMPLE).unwrap();
        let taxonomy = def.taxonomy.as_ref().unwrap();
        assert_eq!(taxonomy.ring_types, vec![RingType::Halo, RingType::Promise]);
        assert_eq!(def.triggers.len(), 1);
        assert_eq!(
            def.triggers[0].key(),
            TriggerKey::new(RingType::Halo, Material::RoseGold, Gemstone::Opal)
        );
        assert_eq!(def.triggers[0].entry().overlay, "halo_glow");
    }

    #[test]
    fn test_triggers_only_definition() {
        let def: RegistryDefinition = toml::from_str(
            r#"
[[triggers]]
ring_type = "solitaire"
material = "platinum"
gemstone = "sapphire"
mascot_trigger = "goat_bow"
overlay = "blue_shimmer"
sound_effect = "chime"
"#,
        )
        .unwrap();
        assert!(def.taxonomy.is_none());
        assert_eq!(def.triggers.len(), 1);
    }

    #[test]
    fn test_unknown_value_rejected_at_parse() {
        let result: std::result::Result<RegistryDefinition, _> = toml::from_str(
            r#"
[[triggers]]
ring_type = "toe_ring"
material = "platinum"
gemstone = "diamond"
mascot_trigger = "a"
overlay = "b"
sound_effect = "c"
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("toe_ring"), "unexpected message: {}", err);
    }

    #[test]
    fn test_builtin_export_parses_back() {
        let exported = RegistryDefinition::from_builtin().to_toml_string().unwrap();
        let parsed: RegistryDefinition = toml::from_str(&exported).unwrap();
        assert_eq!(parsed, RegistryDefinition::from_builtin());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");
        assert!(matches!(
            RegistryDefinition::load(&path),
            Err(RegistryError::DefinitionNotFound { .. })
        ));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[[triggers]\nring_type = ").unwrap();
        assert!(matches!(
            RegistryDefinition::load(&path),
            Err(RegistryError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("registry.toml");
        fs::write(&path, SAMPLE).unwrap();

        let def = RegistryDefinition::load(&path).unwrap();
        assert_eq!(def.triggers[0].mascot_trigger, "goat_moonwalk");
    }
}
