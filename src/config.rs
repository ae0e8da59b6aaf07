use config::{Config, ConfigError, Environment, File};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

use crate::catalog::{AffiliateProduct, KeywordCatalog};
use crate::link::LinkStyle;
use crate::processor::{ProcessingOptions, DEFAULT_MAX_DEPTH};

/// Main settings structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AffiliateSettings {
    /// Keyword catalog configuration
    #[serde(default)]
    pub catalog: CatalogSettings,
    /// Link injection behaviour
    #[serde(default)]
    pub processing: ProcessingSettings,
}

/// Configuration for the keyword catalog
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSettings {
    /// Start from the built-in product table
    #[serde(default = "default_true")]
    pub include_defaults: bool,
    /// Products appended after the built-in table (or the whole catalog when
    /// defaults are disabled)
    #[serde(default)]
    pub products: Vec<AffiliateProduct>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            include_defaults: true,
            products: Vec::new(),
        }
    }
}

/// Configuration for how matched text is rewritten
#[derive(Debug, Deserialize, Clone)]
pub struct ProcessingSettings {
    #[serde(default = "default_true")]
    pub preserve_original_name: bool,
    #[serde(default)]
    pub add_link_indicator: bool,
    /// Attributes emitted on generated links, in the order they are written
    #[serde(
        default = "default_link_attributes",
        deserialize_with = "deserialize_attributes"
    )]
    pub link_attributes: Vec<(String, String)>,
    #[serde(default)]
    pub link_style: LinkStyle,
    #[serde(default)]
    pub include_instructions: bool,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            preserve_original_name: true,
            add_link_indicator: false,
            link_attributes: default_link_attributes(),
            link_style: LinkStyle::default(),
            include_instructions: false,
            max_depth: default_max_depth(),
        }
    }
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_link_attributes() -> Vec<(String, String)> {
    crate::processor::default_link_attributes()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl AffiliateSettings {
    /// Load settings from `affiliate.toml` and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with AFFILIATE__ prefix
    /// 2. affiliate.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: AFFILIATE__PROCESSING__ADD_LINK_INDICATOR
    pub fn load() -> Result<Self, ConfigError> {
        load_settings(None)
    }

    /// Build the keyword catalog these settings describe.
    pub fn catalog(&self) -> KeywordCatalog {
        let mut catalog = if self.catalog.include_defaults {
            KeywordCatalog::default()
        } else {
            KeywordCatalog::empty()
        };
        for product in &self.catalog.products {
            catalog.add(product.clone());
        }
        catalog
    }

    pub fn processing_options(&self) -> ProcessingOptions {
        let processing = &self.processing;
        ProcessingOptions {
            preserve_original_name: processing.preserve_original_name,
            add_link_indicator: processing.add_link_indicator,
            link_attributes: processing.link_attributes.clone(),
            link_style: processing.link_style,
            include_instructions: processing.include_instructions,
            max_depth: processing.max_depth,
        }
    }
}

/// Read a `name = value` table into ordered pairs.
///
/// Scalars parsed from the environment (`true`, `1`) are turned back into text.
fn deserialize_attributes<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(table) = value else {
        return Err(de::Error::custom("link_attributes must be a table"));
    };

    table
        .into_iter()
        .map(|(name, value)| match value {
            Value::String(text) => Ok((name, text)),
            Value::Bool(_) | Value::Number(_) => Ok((name, value.to_string())),
            _ => Err(de::Error::custom(format!(
                "link attribute {name:?} must be a string"
            ))),
        })
        .collect()
}

/// Load settings from a file and environment variables
///
/// Without an explicit `path` the optional `affiliate.toml` in the current
/// directory is used. An explicit path must exist.
pub fn load_settings(path: Option<&Path>) -> Result<AffiliateSettings, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("affiliate").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: AFFILIATE__CATALOG__INCLUDE_DEFAULTS
        .add_source(
            Environment::with_prefix("AFFILIATE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
