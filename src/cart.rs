//! Cart Logic
//!
//! Pure transforms over cart contents, shared by the API client and
//! the view layer.

use crate::models::CartItem;

/// All cart lines except those named `name`. Lines are keyed by name,
/// so duplicates of the same product go together.
pub fn remove_by_name(cart: &[CartItem], name: &str) -> Vec<CartItem> {
    cart.iter()
        .filter(|item| item.name != name)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str) -> CartItem {
        CartItem {
            name: name.into(),
            details: None,
        }
    }

    #[test]
    fn test_removes_every_line_with_the_name() {
        let cart = vec![line("Milk"), line("Soap"), line("Milk")];
        let remaining = remove_by_name(&cart, "Milk");
        assert_eq!(remaining, vec![line("Soap")]);
    }

    #[test]
    fn test_unknown_name_leaves_cart_unchanged() {
        let cart = vec![line("Milk"), line("Soap")];
        assert_eq!(remove_by_name(&cart, "Bread"), cart);
    }

    #[test]
    fn test_emptying_the_cart() {
        let cart = vec![line("Milk")];
        assert!(remove_by_name(&cart, "Milk").is_empty());
    }
}
