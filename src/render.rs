//! Uniform display form for ingredients and instructions of any shape.
//!
//! Rendering produces ordered sections of display lines. Lines that already
//! hold link markup are passed through verbatim; escaping them again is the
//! presentation layer's call.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::link::linked_value_text;
use crate::shape::{ordered_steps, Content, Item};

const UNKNOWN_INGREDIENT: &str = "Unknown ingredient";

/// A titled group of display lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: Option<String>,
    pub lines: Vec<String>,
}

impl Section {
    fn untitled(lines: Vec<String>) -> Self {
        Self { title: None, lines }
    }

    fn titled(key: &str, lines: Vec<String>) -> Self {
        Self {
            title: Some(key.replace('_', " ")),
            lines,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Ingredients,
    Instructions,
}

pub fn render_ingredients(ingredients: &Value) -> Vec<Section> {
    render(ingredients, Kind::Ingredients)
}

pub fn render_instructions(instructions: &Value) -> Vec<Section> {
    render(instructions, Kind::Instructions)
}

fn render(value: &Value, kind: Kind) -> Vec<Section> {
    match Content::of(value) {
        Content::FlatList(items) => vec![Section::untitled(render_items(items, kind))],
        Content::StepMap(map) => {
            let lines = ordered_steps(map)
                .into_iter()
                .filter_map(|(_, step)| render_step(step, kind))
                .collect();
            vec![Section::untitled(lines)]
        }
        Content::CategoryMap(map) | Content::MixedMap(map) => render_categories(map, kind),
        Content::Opaque(Value::String(text)) if !text.trim().is_empty() => {
            vec![Section::untitled(vec![text.clone()])]
        }
        Content::Opaque(_) => Vec::new(),
    }
}

/// One section per array-valued entry, in key order.
fn render_categories(map: &Map<String, Value>, kind: Kind) -> Vec<Section> {
    map.iter()
        .filter_map(|(key, value)| match value {
            Value::Array(items) if !items.is_empty() => {
                Some(Section::titled(key, render_items(items, kind)))
            }
            _ => None,
        })
        .collect()
}

fn render_items(items: &[Value], kind: Kind) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| render_item(item, kind))
        .collect()
}

fn render_step(step: &Value, kind: Kind) -> Option<String> {
    match step {
        Value::Array(items) => {
            let lines = render_items(items, kind);
            (!lines.is_empty()).then(|| lines.join(" "))
        }
        other => render_item(other, kind),
    }
}

fn render_item(item: &Value, kind: Kind) -> Option<String> {
    if let Some(text) = linked_value_text(item) {
        return Some(text.to_string());
    }

    match Item::of(item) {
        Item::PlainText(text) => Some(text.to_string()),
        Item::Structured(fields) => Some(match kind {
            Kind::Ingredients => ingredient_line(fields),
            Kind::Instructions => instruction_line(fields),
        }),
        Item::Other(Value::Number(number)) => Some(number.to_string()),
        Item::Other(_) => None,
    }
}

fn field_text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    let value = fields.get(key)?;
    let text = match linked_value_text(value) {
        Some(text) => text,
        None => value.as_str()?,
    };
    (!text.is_empty()).then(|| text.to_string())
}

fn ingredient_line(fields: &Map<String, Value>) -> String {
    let name = field_text(fields, "name").unwrap_or_else(|| UNKNOWN_INGREDIENT.to_string());
    match field_text(fields, "quantity") {
        Some(quantity) => format!("{} ({})", name, quantity),
        None => name,
    }
}

fn instruction_line(fields: &Map<String, Value>) -> String {
    field_text(fields, "text")
        .or_else(|| field_text(fields, "step"))
        .unwrap_or_else(|| Value::Object(fields.clone()).to_string())
}
