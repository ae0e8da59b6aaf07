pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod link;
pub mod matcher;
pub mod model;
pub mod processor;
pub mod render;
pub mod shape;
pub mod stats;

use std::fs;
use std::path::Path;

use log::debug;

pub use catalog::{AffiliateProduct, CatalogConfig, KeywordCatalog, ProductUpdate};
pub use crate::config::{load_settings, AffiliateSettings};
pub use error::AffiliateError;
pub use filter::{FieldFilter, IngredientLikeFilter, NameOnly};
pub use link::LinkStyle;
pub use matcher::ProductMatcher;
pub use model::{AffiliateProcessing, ProcessedRecipe, Recipe};
pub use processor::{ProcessingOptions, ProcessingResult, RecipeProcessor};
pub use render::{render_ingredients, render_instructions, Section};
pub use shape::{classify, Shape};
pub use stats::{aggregate, aggregate_recipes, IngredientCount, ProcessingStats};

/// Link ingredients against the built-in catalog.
pub fn process_ingredients(ingredients: &serde_json::Value, options: &ProcessingOptions) -> ProcessingResult {
    RecipeProcessor::<KeywordCatalog>::default().process_ingredients(ingredients, options)
}

/// Process a single recipe against the built-in catalog.
pub fn process_recipe(recipe: &Recipe, options: &ProcessingOptions) -> ProcessedRecipe {
    RecipeProcessor::<KeywordCatalog>::default().process_recipe(recipe, options)
}

/// Process a batch of recipes against the built-in catalog, keeping order.
pub fn process_recipes(recipes: &[Recipe], options: &ProcessingOptions) -> Vec<ProcessedRecipe> {
    RecipeProcessor::<KeywordCatalog>::default().process_recipes(recipes, options)
}

/// Read a JSON file holding one recipe or an array of recipes.
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>, AffiliateError> {
    let json = fs::read_to_string(path)?;
    let recipes = model::parse_recipes(&json)?;
    debug!("Loaded {} recipe(s) from {}", recipes.len(), path.display());
    Ok(recipes)
}
