//! The keyword catalog: an ordered list of affiliate products.
//!
//! Catalog order is match priority. The catalog is plain data owned by its
//! caller; mutation goes through the explicit methods below and assumes a
//! single writer. Product URLs act as a weak identity for `remove` and
//! `update`, and duplicates are allowed.

mod defaults;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::matcher::{self, ProductMatcher};

/// A purchasable product and the keywords that should link to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateProduct {
    /// Synonyms in any language, compared case-insensitively
    pub keywords: Vec<String>,
    /// Shop URL; empty while no link is available yet
    #[serde(default)]
    pub url: String,
    #[serde(default, alias = "display_name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl AffiliateProduct {
    pub fn new(keywords: Vec<String>, url: impl Into<String>) -> Self {
        Self {
            keywords,
            url: url.into(),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Whether the product has a shop link to point at.
    pub fn has_link(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

/// Serializable form of a whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub products: Vec<AffiliateProduct>,
}

/// Partial update merged onto an existing product. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub keywords: Option<Vec<String>>,
    pub url: Option<String>,
    #[serde(alias = "display_name")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCatalog {
    products: Vec<AffiliateProduct>,
}

impl Default for KeywordCatalog {
    /// The built-in product table.
    fn default() -> Self {
        Self::new(defaults::default_products())
    }
}

impl KeywordCatalog {
    pub fn new(products: Vec<AffiliateProduct>) -> Self {
        Self { products }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn list(&self) -> &[AffiliateProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Append a product at the lowest priority.
    pub fn add(&mut self, product: AffiliateProduct) {
        debug!("Adding affiliate product {:?} ({})", product.display_name, product.url);
        self.products.push(product);
    }

    /// Drop every product whose URL equals `url` exactly.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, url: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|product| product.url != url);
        let removed = before - self.products.len();
        if removed > 0 {
            debug!("Removed {} affiliate product(s) with url {:?}", removed, url);
        }
        removed > 0
    }

    /// Merge `update` onto the first product whose URL equals `url`.
    ///
    /// Returns false when no product carries that URL.
    pub fn update(&mut self, url: &str, update: ProductUpdate) -> bool {
        let Some(product) = self.products.iter_mut().find(|product| product.url == url) else {
            return false;
        };

        if let Some(keywords) = update.keywords {
            product.keywords = keywords;
        }
        if let Some(new_url) = update.url {
            product.url = new_url;
        }
        if let Some(display_name) = update.display_name {
            product.display_name = Some(display_name);
        }
        true
    }

    /// Swap in a whole new product list.
    pub fn replace_all(&mut self, config: CatalogConfig) {
        debug!(
            "Replacing affiliate catalog ({} -> {} products)",
            self.products.len(),
            config.products.len()
        );
        self.products = config.products;
    }

    /// Snapshot of the current catalog.
    pub fn config(&self) -> CatalogConfig {
        CatalogConfig {
            products: self.products.clone(),
        }
    }
}

impl From<CatalogConfig> for KeywordCatalog {
    fn from(config: CatalogConfig) -> Self {
        Self::new(config.products)
    }
}

impl ProductMatcher for KeywordCatalog {
    fn find_product(&self, text: &str) -> Option<&AffiliateProduct> {
        matcher::first_match(&self.products, text)
    }
}
