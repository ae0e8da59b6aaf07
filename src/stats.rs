//! Batch statistics over processed recipes.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::ProcessedRecipe;
use crate::processor::ProcessingResult;

/// How many entries `top_matched_ingredients` keeps.
pub const TOP_INGREDIENTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientCount {
    pub ingredient: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingStats {
    pub total_recipes: usize,
    pub recipes_with_links: usize,
    pub total_links_found: usize,
    /// Most frequently linked texts, most frequent first; ties keep first-seen order
    pub top_matched_ingredients: Vec<IngredientCount>,
}

#[derive(Default)]
struct StatsBuilder {
    total_recipes: usize,
    recipes_with_links: usize,
    total_links_found: usize,
    counts: Vec<IngredientCount>,
    index: HashMap<String, usize>,
}

impl StatsBuilder {
    fn record(&mut self, outcome: Option<(usize, &[String])>) {
        self.total_recipes += 1;
        let Some((links_found, items)) = outcome else {
            return;
        };

        if links_found > 0 {
            self.recipes_with_links += 1;
        }
        self.total_links_found += links_found;

        for item in items {
            match self.index.get(item) {
                Some(&slot) => self.counts[slot].count += 1,
                None => {
                    self.index.insert(item.clone(), self.counts.len());
                    self.counts.push(IngredientCount {
                        ingredient: item.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    fn finish(mut self) -> ProcessingStats {
        // sort_by is stable, so equal counts stay in first-seen order
        self.counts.sort_by(|a, b| b.count.cmp(&a.count));
        self.counts.truncate(TOP_INGREDIENTS);

        ProcessingStats {
            total_recipes: self.total_recipes,
            recipes_with_links: self.recipes_with_links,
            total_links_found: self.total_links_found,
            top_matched_ingredients: self.counts,
        }
    }
}

/// Summarize one processing result per recipe.
pub fn aggregate<'a, I>(results: I) -> ProcessingStats
where
    I: IntoIterator<Item = &'a ProcessingResult>,
{
    let mut builder = StatsBuilder::default();
    for result in results {
        builder.record(Some((result.links_found, result.processed_items.as_slice())));
    }
    builder.finish()
}

/// Summarize processed recipes. Recipes that were never processed only
/// count towards `total_recipes`.
pub fn aggregate_recipes(recipes: &[ProcessedRecipe]) -> ProcessingStats {
    let mut builder = StatsBuilder::default();
    for recipe in recipes {
        builder.record(
            recipe
                .affiliate_processing
                .as_ref()
                .map(|meta| (meta.links_found, meta.processed_items.as_slice())),
        );
    }
    builder.finish()
}
