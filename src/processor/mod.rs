//! Recipe processor: walks classified content and injects affiliate links.
//!
//! The walk never fails. Values it does not understand are copied through
//! unchanged, so one malformed recipe never aborts a batch. The output keeps
//! the input's shape: same variant, same keys in the same order, same array
//! lengths. Only matched strings change, plus the `originalName` and
//! `hasAffiliateLink` annotations on structured ingredients whose name was
//! linked.

mod item;

use chrono::Utc;
use log::{debug, trace, warn};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::catalog::KeywordCatalog;
use crate::filter::{FieldFilter, IngredientLikeFilter};
use crate::link::LinkStyle;
use crate::matcher::ProductMatcher;
use crate::model::{AffiliateProcessing, ProcessedRecipe, Recipe};
use crate::shape::{classify, Shape};

/// Options for a processing call.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingOptions {
    /// Keep the unlinked name under `originalName` on structured ingredients
    pub preserve_original_name: bool,
    /// Append a link glyph after the linked text
    pub add_link_indicator: bool,
    /// Extra attributes emitted on each generated link, in order
    pub link_attributes: Vec<(String, String)>,
    pub link_style: LinkStyle,
    /// Also link `instructions` when processing whole recipes
    pub include_instructions: bool,
    /// Nesting depth beyond which values are copied through untouched
    pub max_depth: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 32;

pub fn default_link_attributes() -> Vec<(String, String)> {
    vec![
        ("target".to_string(), "_blank".to_string()),
        ("rel".to_string(), "noopener noreferrer".to_string()),
    ]
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            preserve_original_name: true,
            add_link_indicator: false,
            link_attributes: default_link_attributes(),
            link_style: LinkStyle::default(),
            include_instructions: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Outcome of processing one content value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub processed: Value,
    pub links_found: usize,
    /// Original text of every replaced string, in traversal order
    pub processed_items: Vec<String>,
}

/// Running totals threaded through one traversal.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    pub links_found: usize,
    pub processed_items: Vec<String>,
}

impl Tally {
    pub fn record(&mut self, original: &str) {
        self.links_found += 1;
        self.processed_items.push(original.to_string());
    }
}

/// Links ingredient and instruction text against a product matcher.
pub struct RecipeProcessor<M = KeywordCatalog> {
    matcher: M,
    filter: Box<dyn FieldFilter>,
}

impl Default for RecipeProcessor<KeywordCatalog> {
    fn default() -> Self {
        Self::new(KeywordCatalog::default())
    }
}

impl<M: ProductMatcher> RecipeProcessor<M> {
    pub fn new(matcher: M) -> Self {
        Self {
            matcher,
            filter: Box::new(IngredientLikeFilter::default()),
        }
    }

    /// Replace the heuristic deciding which secondary fields are matched.
    pub fn with_filter(mut self, filter: impl FieldFilter + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Mutable access for catalog administration between processing calls.
    pub fn matcher_mut(&mut self) -> &mut M {
        &mut self.matcher
    }

    pub fn process_ingredients(&self, ingredients: &Value, options: &ProcessingOptions) -> ProcessingResult {
        self.process_content(ingredients, options)
    }

    pub fn process_instructions(&self, instructions: &Value, options: &ProcessingOptions) -> ProcessingResult {
        self.process_content(instructions, options)
    }

    fn process_content(&self, content: &Value, options: &ProcessingOptions) -> ProcessingResult {
        let mut tally = Tally::default();
        let processed = self.walk(content, options, 0, &mut tally);
        debug!(
            "Processed {:?} content: {} link(s) found",
            classify(content),
            tally.links_found
        );

        ProcessingResult {
            processed,
            links_found: tally.links_found,
            processed_items: tally.processed_items,
        }
    }

    fn walk(&self, value: &Value, options: &ProcessingOptions, depth: usize, tally: &mut Tally) -> Value {
        if depth > options.max_depth {
            warn!("Content nested deeper than {} levels; copying it unchanged", options.max_depth);
            return value.clone();
        }

        match (classify(value), value) {
            (Shape::FlatList, Value::Array(items)) => {
                trace!("Walking list of {} item(s) at depth {}", items.len(), depth);
                Value::Array(
                    items
                        .iter()
                        .map(|entry| self.transform_item(entry, options, tally))
                        .collect(),
                )
            }
            (shape, Value::Object(map)) => {
                trace!("Walking {:?} with {} key(s) at depth {}", shape, map.len(), depth);
                Value::Object(self.walk_map(map, options, depth, tally))
            }
            _ => value.clone(),
        }
    }

    /// Category maps, step maps and mixed objects share one structural walk:
    /// arrays and objects are descended into, everything else is copied.
    fn walk_map(
        &self,
        map: &Map<String, Value>,
        options: &ProcessingOptions,
        depth: usize,
        tally: &mut Tally,
    ) -> Map<String, Value> {
        map.iter()
            .map(|(key, value)| {
                let processed = match value {
                    Value::Array(_) | Value::Object(_) => self.walk(value, options, depth + 1, tally),
                    primitive => primitive.clone(),
                };
                (key.clone(), processed)
            })
            .collect()
    }

    /// Process a recipe's ingredients (and instructions when enabled) and
    /// attach the `_affiliateProcessing` summary.
    ///
    /// A recipe without ingredients comes back without a summary.
    pub fn process_recipe(&self, recipe: &Recipe, options: &ProcessingOptions) -> ProcessedRecipe {
        let mut processed = recipe.clone();
        if recipe.ingredients.is_null() {
            debug!("Recipe {:?} has no ingredients; skipping", recipe.id);
            return ProcessedRecipe {
                recipe: processed,
                affiliate_processing: None,
            };
        }

        let ingredients = self.process_ingredients(&recipe.ingredients, options);
        processed.ingredients = ingredients.processed;
        let mut links_found = ingredients.links_found;
        let mut processed_items = ingredients.processed_items;

        if options.include_instructions && !recipe.instructions.is_null() {
            let instructions = self.process_instructions(&recipe.instructions, options);
            processed.instructions = instructions.processed;
            links_found += instructions.links_found;
            processed_items.extend(instructions.processed_items);
        }

        ProcessedRecipe {
            recipe: processed,
            affiliate_processing: Some(AffiliateProcessing {
                links_found,
                processed_items,
                processed_at: Utc::now(),
            }),
        }
    }

    pub fn process_recipes(&self, recipes: &[Recipe], options: &ProcessingOptions) -> Vec<ProcessedRecipe> {
        recipes
            .iter()
            .map(|recipe| self.process_recipe(recipe, options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AffiliateProduct;
    use serde_json::json;

    fn processor() -> RecipeProcessor {
        RecipeProcessor::new(KeywordCatalog::new(vec![
            AffiliateProduct::new(vec!["ayam".to_string()], "U1"),
            AffiliateProduct::new(vec!["garam".to_string()], "U2"),
        ]))
    }

    fn bare() -> ProcessingOptions {
        ProcessingOptions {
            link_attributes: Vec::new(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_options() {
        let options = ProcessingOptions::default();
        assert!(options.preserve_original_name);
        assert!(!options.add_link_indicator);
        assert_eq!(options.link_attributes.len(), 2);
        assert_eq!(options.link_style, LinkStyle::Markup);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_opaque_values_pass_through() {
        let processor = processor();
        for value in [json!(null), json!(3), json!(true), json!("Ayam")] {
            let result = processor.process_ingredients(&value, &bare());
            assert_eq!(result.processed, value);
            assert_eq!(result.links_found, 0);
        }
    }

    #[test]
    fn test_mixed_map_copies_primitives() {
        let input = json!({"serves": 4, "note": "Ayam kampung", "main": ["Ayam"]});
        let result = processor().process_ingredients(&input, &bare());

        assert_eq!(result.processed["serves"], json!(4));
        assert_eq!(result.processed["note"], json!("Ayam kampung"));
        assert_eq!(result.processed["main"][0], json!(r#"<a href="U1">Ayam</a>"#));
        assert_eq!(result.links_found, 1);
    }

    #[test]
    fn test_depth_limit_copies_deep_values() {
        let input = json!({"a": {"b": {"c": ["Ayam"]}}});
        let options = ProcessingOptions {
            max_depth: 1,
            ..bare()
        };

        let result = processor().process_ingredients(&input, &options);
        assert_eq!(result.processed, input);
        assert_eq!(result.links_found, 0);
    }

    #[test]
    fn test_process_recipe_without_ingredients() {
        let recipe: Recipe = serde_json::from_value(json!({"id": "r1", "title": "Air"})).unwrap();
        let processed = processor().process_recipe(&recipe, &bare());

        assert!(processed.affiliate_processing.is_none());
        assert_eq!(processed.recipe, recipe);
    }

    #[test]
    fn test_process_recipe_with_instructions() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "r2",
            "ingredients": ["Ayam"],
            "instructions": [{"text": "Perap garam"}]
        }))
        .unwrap();
        let options = ProcessingOptions {
            include_instructions: true,
            ..bare()
        };

        let processed = processor().process_recipe(&recipe, &options);
        let meta = processed.affiliate_processing.unwrap();
        assert_eq!(meta.links_found, 2);
        assert_eq!(meta.processed_items, vec!["Ayam", "Perap garam"]);
        assert_eq!(
            processed.recipe.instructions[0]["text"],
            json!(r#"<a href="U2">Perap garam</a>"#)
        );
    }

    #[test]
    fn test_instructions_untouched_by_default() {
        let recipe: Recipe = serde_json::from_value(json!({
            "ingredients": ["Ayam"],
            "instructions": ["Perap garam"]
        }))
        .unwrap();

        let processed = processor().process_recipe(&recipe, &bare());
        assert_eq!(processed.recipe.instructions, json!(["Perap garam"]));
        assert_eq!(processed.links_found(), 1);
    }
}
