//! Keyword matching between free ingredient text and catalog keywords.
//!
//! A match is containment in either direction after lowercasing and
//! trimming both sides: the short keyword "ayam" matches "Daging Ayam Segar",
//! and the ingredient text "flour" matches the longer keyword
//! "self-raising flour".

use crate::catalog::AffiliateProduct;

/// Anything that can resolve free text to a catalog product.
pub trait ProductMatcher {
    /// Return the highest-priority product whose keywords overlap `text`.
    fn find_product(&self, text: &str) -> Option<&AffiliateProduct>;
}

/// Lowercase and trim text for comparison.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Bidirectional substring test on already-normalized inputs.
///
/// Empty inputs never overlap: an empty string is contained in everything,
/// which would make it match the first product unconditionally.
pub fn overlaps(normalized_text: &str, normalized_keyword: &str) -> bool {
    if normalized_text.is_empty() || normalized_keyword.is_empty() {
        return false;
    }
    normalized_text.contains(normalized_keyword) || normalized_keyword.contains(normalized_text)
}

/// Scan `products` in order and return the first one with any overlapping keyword.
pub fn first_match<'a, I>(products: I, text: &str) -> Option<&'a AffiliateProduct>
where
    I: IntoIterator<Item = &'a AffiliateProduct>,
{
    let needle = normalize(text);
    if needle.is_empty() {
        return None;
    }

    products.into_iter().find(|product| {
        product
            .keywords
            .iter()
            .any(|keyword| overlaps(&needle, &normalize(keyword)))
    })
}
