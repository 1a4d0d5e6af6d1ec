//! # Taxonomy Module
//!
//! リング商品のカテゴリ分類（リング種別・素材・宝石）を提供する。
//!
//! ## モジュール構成
//!
//! - `attribute`: 種別・素材・宝石の列挙型
//! - `builtin`: ビルトインの分類定義とランタイム表現
//!
//! ## 使用例
//!
//! ```rust
//! use mascot_registry_core::taxonomy::{CategoryTaxonomy, Material, RingType};
//!
//! let taxonomy = CategoryTaxonomy::default();
//! assert_eq!(taxonomy.subcategory, "rings");
//! assert_eq!(taxonomy.ring_types[0], RingType::Engagement);
//! assert!(taxonomy.materials.contains(&Material::RoseGold));
//!
//! // タグ文字列から変換（完全一致のみ）
//! let ring: RingType = "wedding_band".parse().unwrap();
//! assert_eq!(ring.label(), "wedding band");
//! ```

mod attribute;
mod builtin;

// Re-exports
pub use attribute::{Gemstone, Material, RingType};
pub use builtin::{BuiltinTaxonomy, CategoryTaxonomy, BUILTIN_TAXONOMY};
