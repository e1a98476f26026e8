//! Builder configuration

use serde::Deserialize;

use crate::ast::{DEFAULT_SCHEMA, Entity};
use crate::error::QbResult;
use crate::transpiler::LiteralIndex;

/// Defaults applied to entities and parameter numbering
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuilderConfig {
    /// Module emitted as `with module <name>` for every entity
    pub default_module: Option<String>,

    /// Schema qualifier recorded on entities
    #[serde(default = "default_schema")]
    pub schema: String,

    /// Index of the first bound parameter
    #[serde(default)]
    pub first_literal_index: usize,
}

fn default_schema() -> String { DEFAULT_SCHEMA.to_string() }

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_module: None,
            schema: default_schema(),
            first_literal_index: 0,
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration builder
    pub fn builder() -> BuilderConfigBuilder {
        BuilderConfigBuilder::default()
    }

    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> QbResult<Self> {
        let config: BuilderConfig = toml::from_str(source)?;
        tracing::debug!(
            module = ?config.default_module,
            schema = %config.schema,
            first_literal_index = config.first_literal_index,
            "loaded builder config"
        );
        Ok(config)
    }

    /// Entity carrying the configured module and schema
    pub fn entity(&self, name: impl Into<String>) -> Entity {
        let entity = Entity::new(name).with_schema(self.schema.clone());
        match &self.default_module {
            Some(module) => entity.with_module(module.clone()),
            None => entity,
        }
    }

    /// Counter seeded at the configured first index
    pub fn literal_index(&self) -> LiteralIndex {
        LiteralIndex::starting_at(self.first_literal_index)
    }
}

/// Builder for BuilderConfig
#[derive(Debug, Default)]
pub struct BuilderConfigBuilder {
    config: BuilderConfig,
}

impl BuilderConfigBuilder {
    /// Set the default module
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.config.default_module = Some(module.into());
        self
    }

    /// Set the schema qualifier
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.config.schema = schema.into();
        self
    }

    /// Set the first parameter index
    pub fn first_literal_index(mut self, index: usize) -> Self {
        self.config.first_literal_index = index;
        self
    }

    /// Build the configuration
    pub fn build(self) -> BuilderConfig {
        self.config
    }
}
