use log::debug;
use serde_json::{Map, Value};

use super::{ProcessingOptions, RecipeProcessor, Tally};
use crate::link::{is_linked_markup, is_linked_value, LinkedText};
use crate::matcher::ProductMatcher;
use crate::shape::Item;

pub const NAME_FIELD: &str = "name";
pub const ORIGINAL_NAME_FIELD: &str = "originalName";
pub const HAS_LINK_FIELD: &str = "hasAffiliateLink";

impl<M: ProductMatcher> RecipeProcessor<M> {
    /// Transform one list entry. Only strings and objects can gain links.
    pub(super) fn transform_item(&self, value: &Value, options: &ProcessingOptions, tally: &mut Tally) -> Value {
        match Item::of(value) {
            Item::PlainText(text) => match self.link_text(text, options) {
                Some(linked) => {
                    tally.record(text);
                    linked
                }
                None => value.clone(),
            },
            Item::Structured(_) if is_linked_value(value) => value.clone(),
            Item::Structured(fields) => Value::Object(self.transform_fields(fields, options, tally)),
            Item::Other(_) => value.clone(),
        }
    }

    fn transform_fields(
        &self,
        fields: &Map<String, Value>,
        options: &ProcessingOptions,
        tally: &mut Tally,
    ) -> Map<String, Value> {
        let mut processed = fields.clone();

        if let Some(Value::String(name)) = fields.get(NAME_FIELD) {
            if let Some(linked) = self.link_text(name, options) {
                processed.insert(NAME_FIELD.to_string(), linked);
                if options.preserve_original_name {
                    processed.insert(ORIGINAL_NAME_FIELD.to_string(), Value::String(name.clone()));
                }
                processed.insert(HAS_LINK_FIELD.to_string(), Value::Bool(true));
                tally.record(name);
            }
        }

        for (key, value) in fields {
            if matches!(key.as_str(), NAME_FIELD | ORIGINAL_NAME_FIELD | HAS_LINK_FIELD) {
                continue;
            }
            let Value::String(text) = value else {
                continue;
            };
            if !self.filter.is_candidate(key, text) {
                continue;
            }
            if let Some(linked) = self.link_text(text, options) {
                processed.insert(key.clone(), linked);
                tally.record(text);
            }
        }

        processed
    }

    /// Replacement value for `text`, or `None` when it stays as it is.
    ///
    /// Text already carrying a link is left alone. A matching product without
    /// a URL still links, with an empty href.
    fn link_text(&self, text: &str, options: &ProcessingOptions) -> Option<Value> {
        if is_linked_markup(text) {
            return None;
        }

        let product = self.matcher.find_product(text)?;
        if product.has_link() {
            debug!("Linking {:?} to {}", text, product.url);
        } else {
            debug!(
                "Linking {:?} to {:?}, which has no shop URL yet",
                text, product.display_name
            );
        }
        let link = LinkedText {
            text,
            href: &product.url,
            attributes: &options.link_attributes,
            indicator: options.add_link_indicator,
        };
        Some(link.to_value(options.link_style))
    }
}
