//! # Registry
//!
//! カテゴリ分類とマスコットトリガー表を保持する不変のレジストリ。
//!
//! 起動時に一度だけ構築し、以降は `&Registry` または `Arc<Registry>` で
//! 共有して読み取る。構築後に変更する手段は提供しない。
//!
//! ```rust
//! use mascot_registry_core::Registry;
//!
//! let registry = Registry::builtin();
//!
//! let entry = registry
//!     .lookup_trigger("engagement", "platinum", "diamond")
//!     .unwrap();
//! assert_eq!(entry.mascot_trigger, "snowman_misfire");
//!
//! // 順序が異なる組み合わせは一致しない
//! assert!(registry.lookup_trigger("platinum", "engagement", "diamond").is_none());
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::Config;
use crate::definition::{RegistryDefinition, TriggerDefinition};
use crate::error::{RegistryError, Result};
use crate::taxonomy::{CategoryTaxonomy, Gemstone, Material, RingType};
use crate::trigger::{TriggerEntry, TriggerKey, BUILTIN_TRIGGERS};

/// 不変のカテゴリ/トリガーレジストリ
#[derive(Debug, Clone)]
pub struct Registry {
    taxonomy: CategoryTaxonomy,
    /// 宣言順
    entries: Vec<(TriggerKey, TriggerEntry)>,
    index: HashMap<TriggerKey, usize>,
}

impl Registry {
    /// ビルトインデータのみで構築
    pub fn builtin() -> Self {
        let entries = BUILTIN_TRIGGERS
            .iter()
            .map(|b| (b.key, TriggerEntry::from(b)))
            .collect();
        Self::from_parts(CategoryTaxonomy::default(), entries)
    }

    /// 定義ドキュメントから構築
    ///
    /// - `include_builtin` が真ならビルトインの上に重ねる
    /// - 同じキーのトリガーはファイル側で上書き
    /// - ファイル内でのキー重複はエラー
    pub fn from_definition(
        definition: &RegistryDefinition,
        include_builtin: bool,
        source: &Path,
    ) -> Result<Self> {
        let taxonomy = match (&definition.taxonomy, include_builtin) {
            (Some(taxonomy), _) => taxonomy.clone(),
            (None, true) => CategoryTaxonomy::default(),
            (None, false) => {
                return Err(RegistryError::MissingTaxonomy {
                    path: source.to_path_buf(),
                })
            }
        };

        let mut builder = RegistryBuilder::new(taxonomy);
        if include_builtin {
            for builtin in BUILTIN_TRIGGERS {
                builder = builder.trigger(builtin.key, TriggerEntry::from(builtin));
            }
        }

        let mut from_file = HashSet::with_capacity(definition.triggers.len());
        for trigger in &definition.triggers {
            let key = trigger.key();
            if !from_file.insert(key) {
                return Err(RegistryError::DuplicateTrigger {
                    key: key.to_string(),
                });
            }
            let entry = trigger.entry();
            let previous = builder.upsert(key, entry.clone());
            if changes_entry(previous.as_ref(), &entry) {
                warn!(%key, source = %source.display(), "definition overrides builtin trigger");
            }
        }

        builder.build()
    }

    /// 定義ファイルを読み込んで構築
    pub fn load(path: &Path, include_builtin: bool) -> Result<Self> {
        let definition = RegistryDefinition::load(path)?;
        Self::from_definition(&definition, include_builtin, path)
    }

    /// 設定に従って構築
    ///
    /// `registry.file` が未設定ならビルトインを使う。
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.registry.file.as_deref() {
            Some(path) => Self::load(path, config.registry.include_builtin),
            None => Ok(Self::builtin()),
        }
    }

    fn from_parts(taxonomy: CategoryTaxonomy, entries: Vec<(TriggerKey, TriggerEntry)>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (key, _))| (*key, i))
            .collect();
        let registry = Self {
            taxonomy,
            entries,
            index,
        };
        debug!(
            ring_types = registry.taxonomy.ring_types.len(),
            materials = registry.taxonomy.materials.len(),
            gemstones = registry.taxonomy.gemstones.len(),
            triggers = registry.entries.len(),
            "registry constructed"
        );
        registry
    }

    /// カテゴリ分類を取得
    pub fn taxonomy(&self) -> &CategoryTaxonomy {
        &self.taxonomy
    }

    /// 型付きキーで完全一致検索
    pub fn lookup(&self, key: &TriggerKey) -> Option<&TriggerEntry> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// タグ文字列で完全一致検索
    ///
    /// 未知の値や並び替えた組み合わせは `None`。エラーにはならない。
    pub fn lookup_trigger(
        &self,
        ring_type: &str,
        material: &str,
        gemstone: &str,
    ) -> Option<&TriggerEntry> {
        let key = TriggerKey::new(
            ring_type.parse::<RingType>().ok()?,
            material.parse::<Material>().ok()?,
            gemstone.parse::<Gemstone>().ok()?,
        );
        self.lookup(&key)
    }

    pub fn contains(&self, key: &TriggerKey) -> bool {
        self.index.contains_key(key)
    }

    /// 全トリガー（宣言順）
    pub fn triggers(&self) -> impl Iterator<Item = (&TriggerKey, &TriggerEntry)> {
        self.entries.iter().map(|(key, entry)| (key, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 定義ドキュメントへ書き出し
    pub fn to_definition(&self) -> RegistryDefinition {
        RegistryDefinition {
            taxonomy: Some(self.taxonomy.clone()),
            triggers: self
                .triggers()
                .map(|(key, entry)| TriggerDefinition::from_parts(key, entry))
                .collect(),
        }
    }
}

/// 既存エントリを別の内容で置き換えたか
fn changes_entry(previous: Option<&TriggerEntry>, entry: &TriggerEntry) -> bool {
    previous.is_some_and(|previous| previous != entry)
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// レジストリのビルダー
///
/// `build()` で分類の重複・キーの重複・空フィールドを検査する。
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    taxonomy: CategoryTaxonomy,
    entries: Vec<(TriggerKey, TriggerEntry)>,
}

impl RegistryBuilder {
    pub fn new(taxonomy: CategoryTaxonomy) -> Self {
        Self {
            taxonomy,
            entries: Vec::new(),
        }
    }

    /// トリガーを追加（重複は `build()` でエラー）
    pub fn trigger(mut self, key: TriggerKey, entry: TriggerEntry) -> Self {
        self.entries.push((key, entry));
        self
    }

    /// 同じキーがあれば置き換え、なければ追加
    ///
    /// 置き換えた場合は以前のエントリを返す。
    pub fn upsert(&mut self, key: TriggerKey, entry: TriggerEntry) -> Option<TriggerEntry> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, entry)),
            None => {
                self.entries.push((key, entry));
                None
            }
        }
    }

    pub fn build(self) -> Result<Registry> {
        self.taxonomy.validate()?;

        let mut seen = HashSet::with_capacity(self.entries.len());
        for (key, entry) in &self.entries {
            entry.validate(key)?;
            if !seen.insert(*key) {
                return Err(RegistryError::DuplicateTrigger {
                    key: key.to_string(),
                });
            }
        }

        Ok(Registry::from_parts(self.taxonomy, self.entries))
    }
}
