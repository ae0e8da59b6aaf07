//! Which secondary fields of a structured ingredient are worth matching.
//!
//! The `name` field is always matched. Other string fields of an ingredient
//! object (`quantity`, `notes`, `variant`, ...) only go through the matcher
//! when a [`FieldFilter`] accepts them.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLAIN_NUMBER: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap();
    static ref QUANTITY: Regex =
        Regex::new(r"(?i)^[0-9]+\s*(g|kg|ml|l|cup|cups|tbsp|tsp|pieces?)$").unwrap();
}

/// Predicate deciding whether a non-`name` string field may hold an ingredient name.
pub trait FieldFilter: Send + Sync {
    fn is_candidate(&self, field: &str, value: &str) -> bool;
}

impl<F> FieldFilter for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn is_candidate(&self, field: &str, value: &str) -> bool {
        self(field, value)
    }
}

/// Default heuristic: skip short strings, plain numbers and simple quantities.
#[derive(Debug, Clone, Copy)]
pub struct IngredientLikeFilter {
    pub min_chars: usize,
}

impl Default for IngredientLikeFilter {
    fn default() -> Self {
        Self { min_chars: 3 }
    }
}

impl FieldFilter for IngredientLikeFilter {
    fn is_candidate(&self, _field: &str, value: &str) -> bool {
        if value.chars().count() < self.min_chars {
            return false;
        }
        let trimmed = value.trim();
        !(PLAIN_NUMBER.is_match(trimmed) || QUANTITY.is_match(trimmed))
    }
}

/// Rejects every field, so only `name` is ever linked.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameOnly;

impl FieldFilter for NameOnly {
    fn is_candidate(&self, _field: &str, _value: &str) -> bool {
        false
    }
}
