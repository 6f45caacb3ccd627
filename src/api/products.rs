use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{Api, ApiError};
use crate::models::{Filter, Product};

impl Api {
    /// Fetch the catalog. A filter narrows the result server-side;
    /// `None` fetches everything.
    pub async fn get_products(&self, filter: Option<&Filter>) -> Result<Vec<Product>, ApiError> {
        let path = format!("/products{}", products_query(filter));
        self.get_json(&path).await
    }
}

/// Query string for `GET /products`. Unconstrained dimensions are left
/// out entirely rather than sent as empty parameters.
pub fn products_query(filter: Option<&Filter>) -> String {
    let Some(filter) = filter else {
        return String::new();
    };
    let mut params = Vec::new();
    if !filter.category.is_empty() {
        params.push(format!(
            "category={}",
            utf8_percent_encode(&filter.category, NON_ALPHANUMERIC)
        ));
    }
    if !filter.brand.is_empty() {
        params.push(format!(
            "brand={}",
            utf8_percent_encode(&filter.brand, NON_ALPHANUMERIC)
        ));
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter_means_no_query() {
        assert_eq!(products_query(None), "");
    }

    #[test]
    fn test_empty_filter_means_no_query() {
        assert_eq!(products_query(Some(&Filter::default())), "");
    }

    #[test]
    fn test_single_dimension_query() {
        let filter = Filter {
            category: "Dairy".into(),
            brand: String::new(),
        };
        assert_eq!(products_query(Some(&filter)), "?category=Dairy");

        let filter = Filter {
            category: String::new(),
            brand: "Farm".into(),
        };
        assert_eq!(products_query(Some(&filter)), "?brand=Farm");
    }

    #[test]
    fn test_both_dimensions_query() {
        let filter = Filter {
            category: "Dairy".into(),
            brand: "Farm".into(),
        };
        assert_eq!(products_query(Some(&filter)), "?category=Dairy&brand=Farm");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let filter = Filter {
            category: "Fresh Foods".into(),
            brand: String::new(),
        };
        assert_eq!(products_query(Some(&filter)), "?category=Fresh%20Foods");
    }
}
