//! Shop API Client
//!
//! Typed wrappers around the REST endpoints under `/api`. All calls go
//! through one [`Api`] value so the base URL and request timeout are
//! configured in a single place.

mod cart;
mod error;
mod filter;
mod products;

pub use error::ApiError;
pub use products::products_query;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ShopConfig;

/// Client for the shop API. Cheap to clone; clones share the same
/// underlying HTTP client.
#[derive(Clone)]
pub struct Api {
    client: reqwest::Client,
    base: String,
    timeout: Duration,
}

impl Api {
    pub fn new(config: &ShopConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: config.api_base.trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(config.request_timeout_ms as u64),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.endpoint(path))
            .timeout(self.timeout)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(response.json::<T>().await?)
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint(path))
            .timeout(self.timeout)
            .json(body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(())
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint(path))
            .timeout(self.timeout)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}
