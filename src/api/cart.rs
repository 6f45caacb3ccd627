use super::{Api, ApiError};
use crate::models::CartItem;

impl Api {
    /// Fetch the full shared cart.
    pub async fn get_cart(&self) -> Result<Vec<CartItem>, ApiError> {
        self.get_json("/cart").await
    }

    pub async fn add_to_cart(&self, item: &CartItem) -> Result<(), ApiError> {
        self.post_json("/cart/add", item).await
    }

    /// Replace the entire cart contents with `items`.
    pub async fn replace_cart(&self, items: &[CartItem]) -> Result<(), ApiError> {
        self.post_json("/cart/batch", items).await
    }

    /// Empty the cart for everyone.
    pub async fn reset_cart(&self) -> Result<(), ApiError> {
        self.post_empty("/cart/reset").await
    }

    /// Remove every cart line named `name`. The API has no removal
    /// endpoint, so this reads the cart and writes back the remaining
    /// lines; an add landing between the two requests is lost.
    pub async fn remove_from_cart(&self, name: &str) -> Result<(), ApiError> {
        let cart = self.get_cart().await?;
        let remaining = crate::cart::remove_by_name(&cart, name);
        self.replace_cart(&remaining).await
    }
}
