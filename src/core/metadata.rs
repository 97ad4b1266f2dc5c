//! Page metadata registered with the document head.
//!
//! Purely declarative: title, description, keywords, social preview fields
//! and schema.org structured data derived from the product record.

use serde::Serialize;
use serde_json::{Value, json};

use crate::core::catalog::Product;

/// Open Graph preview fields
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Everything the page registers in `<head>`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub open_graph: OpenGraph,
}

impl PageMetadata {
    /// Metadata for the product page
    pub fn for_product(product: &Product) -> Self {
        Self {
            title: format!("{} | Handcrafted Italian Leather", product.name),
            description: format!(
                "{} Full-grain Italian leather messenger bag with lifetime warranty. Handcrafted in small batches with premium YKK zippers and brass hardware.",
                product.benefit
            ),
            keywords: [
                "leather messenger bag",
                "Italian leather",
                "premium bag",
                "handcrafted bag",
                "laptop bag",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            open_graph: OpenGraph {
                title: product.name.clone(),
                description: product.benefit.clone(),
                kind: "website".to_string(),
            },
        }
    }

    /// Comma-separated keywords for `<meta name="keywords">`
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }
}

/// schema.org `Product` with a single `Offer`
pub fn structured_data(product: &Product) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": product.name,
        "description": product.benefit,
        "additionalProperty": product
            .features
            .iter()
            .map(|f| json!({
                "@type": "PropertyValue",
                "name": f.title,
                "value": f.description,
            }))
            .collect::<Vec<_>>(),
        "offers": {
            "@type": "Offer",
            "price": product.price,
            "priceCurrency": product.currency,
            "availability": "https://schema.org/InStock",
        },
    })
}
