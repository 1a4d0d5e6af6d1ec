pub mod config;
pub mod definition;
pub mod error;
pub mod registry;
pub mod taxonomy;
pub mod trigger;

pub use config::{Config, RegistryConfig};
pub use definition::{RegistryDefinition, TriggerDefinition};
pub use error::{RegistryError, Result};
pub use registry::{Registry, RegistryBuilder};
pub use taxonomy::{
    BuiltinTaxonomy, CategoryTaxonomy, Gemstone, Material, RingType, BUILTIN_TAXONOMY,
};
pub use trigger::{BuiltinTrigger, TriggerEntry, TriggerKey, BUILTIN_TRIGGERS};
