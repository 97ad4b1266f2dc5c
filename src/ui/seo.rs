//! Document head for the product page: title, description, keywords, Open
//! Graph fields and schema.org JSON-LD.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::catalog::Product;
use crate::core::metadata::{PageMetadata, structured_data};

/// Structured data serialized for an inline script.
///
/// `<` is escaped so product text can never close the script element.
pub fn json_ld(product: &Product) -> String {
    structured_data(product).to_string().replace('<', "\\u003c")
}

/// Title and meta tags for `product`
#[component]
pub fn SeoMeta(product: Product) -> impl IntoView {
    let meta = PageMetadata::for_product(&product);
    let keywords = meta.keywords_content();

    view! {
        <Title text=meta.title />
        <Meta name="description" content=meta.description />
        <Meta name="keywords" content=keywords />
        <Meta property="og:title" content=meta.open_graph.title />
        <Meta property="og:description" content=meta.open_graph.description />
        <Meta property="og:type" content=meta.open_graph.kind />
        <JsonLd product=product />
    }
}

/// schema.org product description for search engines
#[component]
pub fn JsonLd(product: Product) -> impl IntoView {
    view! { <script type="application/ld+json" inner_html=json_ld(&product)></script> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{Feature, product};

    #[test]
    fn test_json_ld_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(&json_ld(product())).unwrap();
        assert_eq!(value["@type"], "Product");
        assert_eq!(value["offers"]["priceCurrency"], "USD");
        assert_eq!(value["additionalProperty"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn test_json_ld_escapes_script_close() {
        let product = Product::new("Bag</script><b>", "Benefit", 10.0, "USD")
            .with_feature(Feature::new("f-1", "Title", "Desc", "award"));
        let encoded = json_ld(&product);
        assert!(!encoded.contains("</script>"));

        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["name"], "Bag</script><b>");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_json_ld_script_renders() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <JsonLd product=product().clone() /> }.to_html());
        assert!(html.contains(r#"type="application/ld+json""#));
        assert!(html.contains("schema.org"));
    }
}
