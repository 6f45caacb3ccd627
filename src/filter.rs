//! Filter Logic
//!
//! Pure predicates over the product catalog. The reactive layer calls
//! these; nothing here touches the DOM or the network.

use crate::models::{Filter, Product};

/// Whether a product passes the filter. An empty dimension constrains
/// nothing, so the default filter matches every product.
pub fn matches(product: &Product, filter: &Filter) -> bool {
    (filter.category.is_empty() || product.category == filter.category)
        && (filter.brand.is_empty() || product.brand == filter.brand)
}

pub fn filter_products(products: &[Product], filter: &Filter) -> Vec<Product> {
    products
        .iter()
        .filter(|product| matches(product, filter))
        .cloned()
        .collect()
}

/// Category values offered by the catalog, in first-appearance order.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    distinct(products.iter().map(|product| product.category.as_str()))
}

/// Brand values offered by the catalog, in first-appearance order.
pub fn distinct_brands(products: &[Product]) -> Vec<String> {
    distinct(products.iter().map(|product| product.brand.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Human-readable description of a filter, used for notices.
pub fn filter_summary(filter: &Filter) -> String {
    let category = if filter.category.is_empty() {
        "all categories"
    } else {
        filter.category.as_str()
    };
    let brand = if filter.brand.is_empty() {
        "all brands"
    } else {
        filter.brand.as_str()
    };
    format!("Filter applied: {category} / {brand}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str, brand: &str) -> Product {
        Product {
            name: name.into(),
            details: String::new(),
            category: category.into(),
            brand: brand.into(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let p = product("Milk", "Dairy", "Farm");
        assert!(matches(&p, &Filter::default()));
    }

    #[test]
    fn test_single_dimension_filters() {
        let milk = product("Milk", "Dairy", "Farm");
        let soap = product("Soap", "Household", "Clean Co");

        let by_category = Filter {
            category: "Dairy".into(),
            brand: String::new(),
        };
        assert!(matches(&milk, &by_category));
        assert!(!matches(&soap, &by_category));

        let by_brand = Filter {
            category: String::new(),
            brand: "Clean Co".into(),
        };
        assert!(!matches(&milk, &by_brand));
        assert!(matches(&soap, &by_brand));
    }

    #[test]
    fn test_both_dimensions_must_match() {
        let milk = product("Milk", "Dairy", "Farm");
        let filter = Filter {
            category: "Dairy".into(),
            brand: "Clean Co".into(),
        };
        assert!(!matches(&milk, &filter));
    }

    #[test]
    fn test_default_filter_returns_catalog_unchanged() {
        let catalog = vec![
            product("Milk", "Dairy", "Farm"),
            product("Soap", "Household", "Clean Co"),
            product("Cheese", "Dairy", "Farm"),
        ];
        assert_eq!(filter_products(&catalog, &Filter::default()), catalog);
    }

    #[test]
    fn test_filter_products_keeps_order() {
        let catalog = vec![
            product("Milk", "Dairy", "Farm"),
            product("Soap", "Household", "Clean Co"),
            product("Cheese", "Dairy", "Farm"),
        ];
        let filter = Filter {
            category: "Dairy".into(),
            brand: String::new(),
        };
        let visible = filter_products(&catalog, &filter);
        let names: Vec<&str> = visible.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Cheese"]);
    }

    #[test]
    fn test_distinct_dedupes_and_skips_empty() {
        let catalog = vec![
            product("Milk", "Dairy", "Farm"),
            product("Cheese", "Dairy", "Farm"),
            product("Mystery", "", "Farm"),
            product("Soap", "Household", "Clean Co"),
        ];
        assert_eq!(distinct_categories(&catalog), vec!["Dairy", "Household"]);
        assert_eq!(distinct_brands(&catalog), vec!["Farm", "Clean Co"]);
    }

    #[test]
    fn test_filter_summary_names_dimensions() {
        assert_eq!(
            filter_summary(&Filter::default()),
            "Filter applied: all categories / all brands"
        );
        let filter = Filter {
            category: "Dairy".into(),
            brand: String::new(),
        };
        assert_eq!(filter_summary(&filter), "Filter applied: Dairy / all brands");
    }
}
