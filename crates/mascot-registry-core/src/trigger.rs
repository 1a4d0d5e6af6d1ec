//! Mascot triggers keyed by `(ring_type, material, gemstone)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::taxonomy::{Gemstone, Material, RingType};

/// Builtin trigger table. Sparse: most combinations have no entry.
pub const BUILTIN_TRIGGERS: &[BuiltinTrigger] = &[
    BuiltinTrigger {
        key: TriggerKey::new(RingType::Engagement, Material::Platinum, Gemstone::Diamond),
        mascot_trigger: "snowman_misfire",
        overlay: "sparkle_trail",
        sound_effect: "goat_bleat",
    },
    BuiltinTrigger {
        key: TriggerKey::new(RingType::Cocktail, Material::YellowGold, Gemstone::Amethyst),
        mascot_trigger: "goat_twirl",
        overlay: "confetti_burst",
        sound_effect: "party_honk",
    },
];

/// Ordered lookup key. Field order is significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TriggerKey {
    pub ring_type: RingType,
    pub material: Material,
    pub gemstone: Gemstone,
}

impl TriggerKey {
    pub const fn new(ring_type: RingType, material: Material, gemstone: Gemstone) -> Self {
        Self {
            ring_type,
            material,
            gemstone,
        }
    }

    /// Parse a key from raw tags, failing on the first unknown value.
    pub fn parse(ring_type: &str, material: &str, gemstone: &str) -> Result<Self> {
        Ok(Self::new(
            ring_type.parse()?,
            material.parse()?,
            gemstone.parse()?,
        ))
    }
}

impl fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.ring_type, self.material, self.gemstone
        )
    }
}

/// Presentation effects for one combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerEntry {
    /// Behavior/animation to invoke
    pub mascot_trigger: String,
    /// Visual overlay asset
    pub overlay: String,
    /// Audio asset
    pub sound_effect: String,
}

impl TriggerEntry {
    pub fn new(
        mascot_trigger: impl Into<String>,
        overlay: impl Into<String>,
        sound_effect: impl Into<String>,
    ) -> Self {
        Self {
            mascot_trigger: mascot_trigger.into(),
            overlay: overlay.into(),
            sound_effect: sound_effect.into(),
        }
    }

    /// All three fields must be non-empty.
    pub fn validate(&self, key: &TriggerKey) -> Result<()> {
        let fields = [
            ("mascot_trigger", &self.mascot_trigger),
            ("overlay", &self.overlay),
            ("sound_effect", &self.sound_effect),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(RegistryError::EmptyField {
                    key: key.to_string(),
                    field,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct BuiltinTrigger {
    pub key: TriggerKey,
    pub mascot_trigger: &'static str,
    pub overlay: &'static str,
    pub sound_effect: &'static str,
}

impl From<&BuiltinTrigger> for TriggerEntry {
    fn from(builtin: &BuiltinTrigger) -> Self {
        Self::new(builtin.mascot_trigger, builtin.overlay, builtin.sound_effect)
    }
}
