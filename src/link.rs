//! Building the replacement value for a matched string.

use html_escape::{encode_double_quoted_attribute, encode_text};
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

lazy_static! {
    static ref ATTRIBUTE_NAME: Regex = Regex::new(r"^[A-Za-z_:][A-Za-z0-9_:.\-]*$").unwrap();
}

/// Marker stored under `type` in structured link values.
pub const LINK_TYPE: &str = "affiliate_link";

pub const LINK_INDICATOR: &str = "🔗";

/// How a matched string is replaced in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStyle {
    /// Escaped `<a href="...">text</a>` markup
    #[default]
    Markup,
    /// A `{"type": "affiliate_link", ...}` object left for the presentation layer
    Structured,
}

/// A matched piece of text and where it should point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedText<'a> {
    /// The original text exactly as it appeared in the recipe
    pub text: &'a str,
    pub href: &'a str,
    pub attributes: &'a [(String, String)],
    pub indicator: bool,
}

impl LinkedText<'_> {
    pub fn to_value(&self, style: LinkStyle) -> Value {
        match style {
            LinkStyle::Markup => Value::String(self.to_markup()),
            LinkStyle::Structured => self.to_structured(),
        }
    }

    /// Anchor markup with the href, attribute values and body escaped.
    ///
    /// Attribute names that are not valid HTML names are dropped.
    pub fn to_markup(&self) -> String {
        let mut markup = format!("<a href=\"{}\"", encode_double_quoted_attribute(self.href));
        for (name, value) in self.attributes {
            if !ATTRIBUTE_NAME.is_match(name) {
                warn!("Skipping invalid link attribute name {:?}", name);
                continue;
            }
            markup.push_str(&format!(" {}=\"{}\"", name, encode_double_quoted_attribute(value)));
        }
        markup.push('>');
        markup.push_str(&encode_text(self.text));
        if self.indicator {
            markup.push(' ');
            markup.push_str(LINK_INDICATOR);
        }
        markup.push_str("</a>");
        markup
    }

    pub fn to_structured(&self) -> Value {
        let attributes: Map<String, Value> = self
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();

        json!({
            "type": LINK_TYPE,
            "text": self.text,
            "href": self.href,
            "attributes": attributes,
            "indicator": self.indicator,
        })
    }
}

/// Whether `text` is anchor markup produced by an earlier pass.
pub fn is_linked_markup(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with("<a ") && trimmed.ends_with("</a>")
}

/// Whether `value` is a structured link produced by an earlier pass.
pub fn is_linked_value(value: &Value) -> bool {
    value.get("type").and_then(Value::as_str) == Some(LINK_TYPE)
}

/// Visible text of a structured link, if `value` is one.
pub fn linked_value_text(value: &Value) -> Option<&str> {
    if is_linked_value(value) {
        value.get("text").and_then(Value::as_str)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_plain_markup() {
        let link = LinkedText {
            text: "Ayam",
            href: "U1",
            attributes: &[],
            indicator: false,
        };
        assert_eq!(link.to_markup(), r#"<a href="U1">Ayam</a>"#);
    }

    #[test]
    fn test_markup_with_attributes_and_indicator() {
        let attributes = attrs(&[("target", "_blank"), ("rel", "noopener noreferrer")]);
        let link = LinkedText {
            text: "Garam",
            href: "https://shop.example/garam",
            attributes: &attributes,
            indicator: true,
        };
        assert_eq!(
            link.to_markup(),
            "<a href=\"https://shop.example/garam\" target=\"_blank\" rel=\"noopener noreferrer\">Garam 🔗</a>"
        );
    }

    #[test]
    fn test_markup_escapes_untrusted_parts() {
        let attributes = attrs(&[("class", "x\" onclick=\"alert(1)"), ("bad name", "v")]);
        let link = LinkedText {
            text: "Salt & <b>Pepper</b>",
            href: "https://shop.example/?a=1\"><script>",
            attributes: &attributes,
            indicator: false,
        };
        let markup = link.to_markup();

        assert!(!markup.contains("<script>"));
        assert!(!markup.contains("<b>"));
        assert!(!markup.contains("bad name"));
        assert!(markup.contains("Salt &amp; &lt;b&gt;Pepper&lt;/b&gt;"));
        assert!(!markup.contains("x\" onclick"));
    }

    #[test]
    fn test_structured_value() {
        let attributes = attrs(&[("rel", "nofollow")]);
        let link = LinkedText {
            text: "Ayam",
            href: "U1",
            attributes: &attributes,
            indicator: false,
        };
        let value = link.to_value(LinkStyle::Structured);

        assert!(is_linked_value(&value));
        assert_eq!(linked_value_text(&value), Some("Ayam"));
        assert_eq!(value["href"], "U1");
        assert_eq!(value["attributes"]["rel"], "nofollow");
    }

    #[test]
    fn test_is_linked_markup() {
        assert!(is_linked_markup(r#"<a href="U1">Ayam</a>"#));
        assert!(!is_linked_markup("Ayam"));
        assert!(!is_linked_markup("<b>Ayam</b>"));
    }
}
