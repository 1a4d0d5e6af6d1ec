//! Builtin Taxonomy Definitions
//!
//! コード内で定義されるビルトインのカテゴリ分類。

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::attribute::{Gemstone, Material, RingType};
use crate::error::{RegistryError, Result};

/// ビルトインのカテゴリ分類
pub const BUILTIN_TAXONOMY: BuiltinTaxonomy = BuiltinTaxonomy {
    category: "women",
    subcategory: "rings",
    ring_types: &[
        RingType::Engagement,
        RingType::WeddingBand,
        RingType::Cocktail,
        RingType::Solitaire,
        RingType::Halo,
        RingType::ThreeStone,
        RingType::Eternity,
        RingType::Stackable,
        RingType::Promise,
        RingType::Vintage,
        RingType::Designer,
        RingType::Gemstone,
        RingType::Diamond,
        RingType::Custom,
    ],
    materials: &[
        Material::Platinum,
        Material::YellowGold,
        Material::WhiteGold,
        Material::RoseGold,
        Material::SterlingSilver,
        Material::MixedMetal,
    ],
    gemstones: &[
        Gemstone::Sapphire,
        Gemstone::Emerald,
        Gemstone::Ruby,
        Gemstone::Amethyst,
        Gemstone::Opal,
        Gemstone::Topaz,
        Gemstone::Diamond,
    ],
};

/// カテゴリ分類の静的定義
#[derive(Debug, Clone)]
pub struct BuiltinTaxonomy {
    pub category: &'static str,
    pub subcategory: &'static str,
    pub ring_types: &'static [RingType],
    pub materials: &'static [Material],
    pub gemstones: &'static [Gemstone],
}

/// ランタイムのカテゴリ分類
///
/// ビルトインまたは定義ファイルから構築される。
/// 各リストは挿入順を保持し、重複を含まない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTaxonomy {
    /// トップレベルのカテゴリ（例: `women`）
    pub category: String,
    /// サブカテゴリ（例: `rings`）
    pub subcategory: String,
    pub ring_types: Vec<RingType>,
    pub materials: Vec<Material>,
    pub gemstones: Vec<Gemstone>,
}

impl CategoryTaxonomy {
    /// 各リストの重複を検査
    pub fn validate(&self) -> Result<()> {
        ensure_unique(&self.ring_types, RingType::KIND)?;
        ensure_unique(&self.materials, Material::KIND)?;
        ensure_unique(&self.gemstones, Gemstone::KIND)?;
        Ok(())
    }
}

impl From<&BuiltinTaxonomy> for CategoryTaxonomy {
    fn from(builtin: &BuiltinTaxonomy) -> Self {
        Self {
            category: builtin.category.to_string(),
            subcategory: builtin.subcategory.to_string(),
            ring_types: builtin.ring_types.to_vec(),
            materials: builtin.materials.to_vec(),
            gemstones: builtin.gemstones.to_vec(),
        }
    }
}

impl Default for CategoryTaxonomy {
    fn default() -> Self {
        Self::from(&BUILTIN_TAXONOMY)
    }
}

fn ensure_unique<T>(items: &[T], kind: &'static str) -> Result<()>
where
    T: Eq + Hash + fmt::Display,
{
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item) {
            return Err(RegistryError::DuplicateTaxonomyValue {
                kind,
                value: item.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_taxonomy_is_unique() {
        let taxonomy = CategoryTaxonomy::default();
        assert!(taxonomy.validate().is_ok());
        assert_eq!(taxonomy.category, "women");
        assert_eq!(taxonomy.subcategory, "rings");
        assert_eq!(taxonomy.ring_types.len(), 14);
        assert_eq!(taxonomy.materials.len(), 6);
        assert_eq!(taxonomy.gemstones.len(), 7);
    }

    #[test]
    fn test_builtin_order_is_preserved() {
        let taxonomy = CategoryTaxonomy::from(&BUILTIN_TAXONOMY);
        assert_eq!(taxonomy.ring_types.first(), Some(&RingType::Engagement));
        assert_eq!(taxonomy.ring_types.last(), Some(&RingType::Custom));
        assert_eq!(taxonomy.materials[1], Material::YellowGold);
        assert_eq!(taxonomy.gemstones.last(), Some(&Gemstone::Diamond));
    }

    #[test]
    fn test_duplicate_detected() {
        let mut taxonomy = CategoryTaxonomy::default();
        taxonomy.materials.push(Material::Platinum);

        match taxonomy.validate() {
            Err(RegistryError::DuplicateTaxonomyValue { kind, value }) => {
                assert_eq!(kind, "material");
                assert_eq!(value, "platinum");
            }
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }
}
