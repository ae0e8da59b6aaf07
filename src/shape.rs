//! Structural classification of loosely-shaped recipe content.
//!
//! The pipeline that fills `ingredients` / `instructions` emits flat arrays,
//! arrays of objects, category-keyed objects or step-keyed objects. Every
//! value is classified once, at its own level only, before anything walks it.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

lazy_static! {
    static ref STEP_KEY: Regex = Regex::new(r"^step([0-9]+)$").unwrap();
}

/// The structural variant of a content value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A JSON array of items
    FlatList,
    /// An object whose every value is an array (category name -> items)
    CategoryMap,
    /// An object with at least one `stepN` key
    StepMap,
    /// Any other object: only its array and object entries are walked
    MixedMap,
    /// Strings, numbers, booleans and null
    Opaque,
}

/// Classify `value` without looking below its first level.
pub fn classify(value: &Value) -> Shape {
    match value {
        Value::Array(_) => Shape::FlatList,
        Value::Object(map) => classify_map(map),
        _ => Shape::Opaque,
    }
}

fn classify_map(map: &Map<String, Value>) -> Shape {
    if map.keys().any(|key| is_step_key(key)) {
        Shape::StepMap
    } else if map.values().all(Value::is_array) {
        Shape::CategoryMap
    } else {
        Shape::MixedMap
    }
}

pub fn is_step_key(key: &str) -> bool {
    STEP_KEY.is_match(key)
}

/// Numeric part of a `stepN` key. Overflowing numbers sort last.
pub fn step_number(key: &str) -> Option<u64> {
    STEP_KEY
        .captures(key)
        .map(|caps| caps[1].parse::<u64>().unwrap_or(u64::MAX))
}

/// Entries of a step map in reading order.
///
/// Step keys come first in numeric order (`step2` before `step10`), ties kept
/// in source order. Keys that are not steps follow in source order.
pub fn ordered_steps(map: &Map<String, Value>) -> Vec<(&str, &Value)> {
    let mut steps: Vec<(u64, &str, &Value)> = Vec::new();
    let mut others: Vec<(&str, &Value)> = Vec::new();

    for (key, value) in map {
        match step_number(key) {
            Some(number) => steps.push((number, key.as_str(), value)),
            None => others.push((key.as_str(), value)),
        }
    }

    // stable sort keeps source order among equal step numbers
    steps.sort_by_key(|(number, _, _)| *number);
    steps
        .into_iter()
        .map(|(_, key, value)| (key, value))
        .chain(others)
        .collect()
}

/// Borrowed, classified view of a content value.
#[derive(Debug, Clone, PartialEq)]
pub enum Content<'a> {
    FlatList(&'a [Value]),
    CategoryMap(&'a Map<String, Value>),
    StepMap(&'a Map<String, Value>),
    MixedMap(&'a Map<String, Value>),
    Opaque(&'a Value),
}

impl<'a> Content<'a> {
    pub fn of(value: &'a Value) -> Self {
        match (classify(value), value) {
            (Shape::FlatList, Value::Array(items)) => Content::FlatList(items),
            (Shape::CategoryMap, Value::Object(map)) => Content::CategoryMap(map),
            (Shape::StepMap, Value::Object(map)) => Content::StepMap(map),
            (Shape::MixedMap, Value::Object(map)) => Content::MixedMap(map),
            _ => Content::Opaque(value),
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Content::FlatList(_) => Shape::FlatList,
            Content::CategoryMap(_) => Shape::CategoryMap,
            Content::StepMap(_) => Shape::StepMap,
            Content::MixedMap(_) => Shape::MixedMap,
            Content::Opaque(_) => Shape::Opaque,
        }
    }
}

/// A single ingredient or instruction entry inside a list.
#[derive(Debug, Clone, PartialEq)]
pub enum Item<'a> {
    PlainText(&'a str),
    Structured(&'a Map<String, Value>),
    /// null, numbers, booleans or nested arrays
    Other(&'a Value),
}

impl<'a> Item<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::String(text) => Item::PlainText(text),
            Value::Object(map) => Item::Structured(map),
            other => Item::Other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_variants() {
        assert_eq!(classify(&json!(["Ayam"])), Shape::FlatList);
        assert_eq!(classify(&json!({"main": ["Ayam"], "spices": []})), Shape::CategoryMap);
        assert_eq!(classify(&json!({"step1": "Goreng", "note": 1})), Shape::StepMap);
        assert_eq!(classify(&json!({"main": ["Ayam"], "serves": 4})), Shape::MixedMap);
        assert_eq!(classify(&json!("Ayam")), Shape::Opaque);
        assert_eq!(classify(&json!(null)), Shape::Opaque);
        assert_eq!(classify(&json!(12)), Shape::Opaque);
    }

    #[test]
    fn test_step_keys_take_priority_over_categories() {
        assert_eq!(classify(&json!({"step1": ["a"], "step2": ["b"]})), Shape::StepMap);
    }

    #[test]
    fn test_step_key_pattern() {
        assert!(is_step_key("step1"));
        assert!(is_step_key("step10"));
        assert!(!is_step_key("step"));
        assert!(!is_step_key("Step1"));
        assert!(!is_step_key("step1a"));
        assert!(!is_step_key("substep1"));
    }

    #[test]
    fn test_ordered_steps_is_numeric() {
        let value = json!({"step2": "B", "step10": "A", "step1": "C"});
        let map = value.as_object().unwrap();

        let keys: Vec<&str> = ordered_steps(map).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["step1", "step2", "step10"]);
    }

    #[test]
    fn test_ordered_steps_puts_other_keys_last() {
        let value = json!({"tips": "Serve hot", "step2": "B", "step1": "A"});
        let map = value.as_object().unwrap();

        let keys: Vec<&str> = ordered_steps(map).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["step1", "step2", "tips"]);
    }

    #[test]
    fn test_step_keys_use_ascii_digits_only() {
        assert!(!is_step_key("step\u{663}"));
        assert_eq!(step_number("step\u{663}"), None);
        assert_eq!(classify(&json!({"step\u{663}": "Goreng"})), Shape::MixedMap);
    }

    #[test]
    fn test_step_number_overflow_sorts_last() {
        assert_eq!(step_number("step99999999999999999999999"), Some(u64::MAX));
        assert_eq!(step_number("notes"), None);
    }

    #[test]
    fn test_content_view_matches_shape() {
        let value = json!({"main": ["Ayam"]});
        let content = Content::of(&value);
        assert_eq!(content.shape(), Shape::CategoryMap);
        assert!(matches!(Item::of(&json!({"name": "Ayam"})), Item::Structured(_)));
        assert!(matches!(Item::of(&json!([1, 2])), Item::Other(_)));
    }
}
