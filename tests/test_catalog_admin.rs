use recipe_affiliate::{
    AffiliateProduct, CatalogConfig, KeywordCatalog, ProcessingOptions, ProductMatcher,
    ProductUpdate, RecipeProcessor,
};
use serde_json::json;

fn product(keywords: &[&str], url: &str) -> AffiliateProduct {
    AffiliateProduct::new(keywords.iter().map(|k| k.to_string()).collect(), url)
}

fn bare_options() -> ProcessingOptions {
    ProcessingOptions {
        link_attributes: Vec::new(),
        ..Default::default()
    }
}

#[test]
fn test_keyword_lookups_against_default_catalog() {
    let catalog = KeywordCatalog::default();

    let cases = [
        ("Tepung naik sendiri", Some("Tepung / Flour")),
        ("flour", Some("Tepung / Flour")),
        ("Margarin", Some("Margarin / Butter")),
        ("ayam", Some("Ayam")),
        ("fresh milk", None),
        ("unknown ingredient", None),
    ];

    for (text, expected) in cases {
        let found = catalog
            .find_product(text)
            .and_then(|product| product.display_name.as_deref());
        assert_eq!(found, expected, "{text}");
    }
}

#[test]
fn test_runtime_addition_is_used_by_processor() {
    let mut processor = RecipeProcessor::new(KeywordCatalog::new(vec![product(&["ayam"], "U1")]));
    let input = json!(["Minyak kelapa"]);

    assert_eq!(processor.process_ingredients(&input, &bare_options()).links_found, 0);

    processor.matcher_mut().add(
        product(&["coconut oil", "minyak kelapa"], "https://s.shopee.com.my/8pbt0OnQYg")
            .with_display_name("Minyak Kelapa"),
    );

    let result = processor.process_ingredients(&input, &bare_options());
    assert_eq!(result.links_found, 1);
    assert_eq!(
        result.processed[0],
        json!("<a href=\"https://s.shopee.com.my/8pbt0OnQYg\">Minyak kelapa</a>")
    );
}

#[test]
fn test_catalog_order_is_priority() {
    let catalog = KeywordCatalog::new(vec![
        product(&["susu"], "MILK"),
        product(&["susu pekat"], "CONDENSED"),
    ]);
    let result = RecipeProcessor::new(catalog)
        .process_ingredients(&json!(["Susu pekat manis"]), &bare_options());

    assert_eq!(result.processed[0], json!("<a href=\"MILK\">Susu pekat manis</a>"));
}

#[test]
fn test_product_without_url_still_wins_the_match() {
    let catalog = KeywordCatalog::new(vec![
        product(&["butter"], ""),
        product(&["peanut butter"], "PB"),
    ]);
    let result = RecipeProcessor::new(catalog)
        .process_ingredients(&json!(["Peanut Butter"]), &bare_options());

    assert_eq!(result.processed[0], json!("<a href=\"\">Peanut Butter</a>"));
    assert_eq!(result.links_found, 1);
}

#[test]
fn test_default_butter_entry_links_without_url() {
    let result = RecipeProcessor::<KeywordCatalog>::default()
        .process_ingredients(&json!(["Mentega", "Butter kacang"]), &bare_options());

    assert_eq!(
        result.processed,
        json!(["<a href=\"\">Mentega</a>", "<a href=\"\">Butter kacang</a>"])
    );
    assert_eq!(result.links_found, 2);
}

#[test]
fn test_update_then_remove() {
    let mut catalog = KeywordCatalog::new(vec![product(&["garam"], "OLD")]);

    assert!(catalog.update(
        "OLD",
        ProductUpdate {
            url: Some("NEW".to_string()),
            keywords: Some(vec!["garam".to_string(), "salt".to_string()]),
            ..Default::default()
        }
    ));
    assert_eq!(catalog.find_product("Sea salt").map(|p| p.url.as_str()), Some("NEW"));

    assert!(!catalog.remove("OLD"));
    assert!(catalog.remove("NEW"));
    assert!(catalog.find_product("garam").is_none());
}

#[test]
fn test_replace_all_round_trips_through_json() {
    let config: CatalogConfig = serde_json::from_value(json!({
        "products": [
            {"keywords": ["timun", "cucumber"], "url": "U1", "displayName": "Timun"},
            {"keywords": ["tauhu"], "url": ""}
        ]
    }))
    .unwrap();

    let mut catalog = KeywordCatalog::default();
    catalog.replace_all(config.clone());

    assert_eq!(catalog.list().len(), 2);
    assert_eq!(catalog.config(), config);
    assert!(catalog.find_product("ayam").is_none());
    assert_eq!(
        serde_json::to_value(catalog.config()).unwrap()["products"][0]["displayName"],
        json!("Timun")
    );
}
