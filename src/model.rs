use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AffiliateError;

/// A recipe record as handed over by the data store.
///
/// `ingredients` and `instructions` are kept as loose JSON because the
/// producing pipeline does not commit to a single shape. Every other column
/// is carried through `extra` untouched. Missing columns stay missing when
/// the record is written back; a `null` content column is written back as
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub ingredients: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub instructions: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Bookkeeping attached to a recipe after link injection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateProcessing {
    pub links_found: usize,
    pub processed_items: Vec<String>,
    pub processed_at: DateTime<Utc>,
}

/// A recipe whose content went through the processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(
        rename = "_affiliateProcessing",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub affiliate_processing: Option<AffiliateProcessing>,
}

impl ProcessedRecipe {
    pub fn links_found(&self) -> usize {
        self.affiliate_processing
            .as_ref()
            .map(|meta| meta.links_found)
            .unwrap_or(0)
    }
}

/// Parse a JSON document holding either a single recipe or an array of them.
pub fn parse_recipes(json: &str) -> Result<Vec<Recipe>, AffiliateError> {
    let document: Value = serde_json::from_str(json)?;
    match document {
        Value::Array(_) => Ok(serde_json::from_value(document)?),
        Value::Object(_) => Ok(vec![serde_json::from_value(document)?]),
        other => Err(AffiliateError::UnsupportedDocument(format!(
            "expected an object or an array, found {}",
            json_kind(&other)
        ))),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
