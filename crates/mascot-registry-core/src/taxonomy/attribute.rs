//! Taxonomy Attributes
//!
//! リング種別・素材・宝石の列挙型。
//! タグ文字列（snake_case）との相互変換を提供する。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{RegistryError, Result};

macro_rules! taxonomy_attribute {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// エラーメッセージ用の種別名
            pub const KIND: &'static str = $kind;

            /// 宣言順の全バリアント
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// タグ文字列
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }

            /// 表示用ラベル（`wedding_band` -> `wedding band`）
            pub fn label(&self) -> String {
                self.as_str().replace('_', " ")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = RegistryError;

            /// 完全一致のみ。大文字小文字・空白の正規化は行わない。
            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    _ => Err(RegistryError::UnknownValue {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let tag = String::deserialize(deserializer)?;
                tag.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

taxonomy_attribute! {
    /// リングのスタイル分類
    RingType, "ring type" {
        Engagement => "engagement",
        WeddingBand => "wedding_band",
        Cocktail => "cocktail",
        Solitaire => "solitaire",
        Halo => "halo",
        ThreeStone => "three_stone",
        Eternity => "eternity",
        Stackable => "stackable",
        Promise => "promise",
        Vintage => "vintage",
        Designer => "designer",
        Gemstone => "gemstone",
        Diamond => "diamond",
        Custom => "custom",
    }
}

taxonomy_attribute! {
    /// 地金の素材
    Material, "material" {
        Platinum => "platinum",
        YellowGold => "yellow_gold",
        WhiteGold => "white_gold",
        RoseGold => "rose_gold",
        SterlingSilver => "sterling_silver",
        MixedMetal => "mixed_metal",
    }
}

taxonomy_attribute! {
    /// 宝石
    Gemstone, "gemstone" {
        Sapphire => "sapphire",
        Emerald => "emerald",
        Ruby => "ruby",
        Amethyst => "amethyst",
        Opal => "opal",
        Topaz => "topaz",
        Diamond => "diamond",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for ring_type in RingType::ALL {
            assert_eq!(ring_type.as_str().parse::<RingType>().unwrap(), *ring_type);
        }
        for material in Material::ALL {
            assert_eq!(material.as_str().parse::<Material>().unwrap(), *material);
        }
        for gemstone in Gemstone::ALL {
            assert_eq!(gemstone.as_str().parse::<Gemstone>().unwrap(), *gemstone);
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("Engagement".parse::<RingType>().is_err());
        assert!(" platinum".parse::<Material>().is_err());
        assert!("wedding band".parse::<RingType>().is_err());
        assert!("".parse::<Gemstone>().is_err());
    }

    #[test]
    fn test_diamond_is_both_ring_type_and_gemstone() {
        assert_eq!("diamond".parse::<RingType>().unwrap(), RingType::Diamond);
        assert_eq!("diamond".parse::<Gemstone>().unwrap(), Gemstone::Diamond);
    }

    #[test]
    fn test_unknown_value_error() {
        let err = "toe_ring".parse::<RingType>().unwrap_err();
        match err {
            RegistryError::UnknownValue { kind, value } => {
                assert_eq!(kind, "ring type");
                assert_eq!(value, "toe_ring");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(RingType::WeddingBand.label(), "wedding band");
        assert_eq!(Material::SterlingSilver.label(), "sterling silver");
        assert_eq!(Gemstone::Opal.label(), "opal");
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Material::YellowGold).unwrap();
        assert_eq!(json, "\"yellow_gold\"");

        let parsed: RingType = serde_json::from_str("\"three_stone\"").unwrap();
        assert_eq!(parsed, RingType::ThreeStone);

        assert!(serde_json::from_str::<Gemstone>("\"quartz\"").is_err());
    }
}
