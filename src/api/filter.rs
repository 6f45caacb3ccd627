use super::{Api, ApiError};
use crate::models::Filter;

impl Api {
    /// Fetch the filter currently shared by all clients.
    pub async fn get_filter(&self) -> Result<Filter, ApiError> {
        self.get_json("/filter").await
    }

    /// Publish a filter for every client to adopt.
    pub async fn set_filter(&self, filter: &Filter) -> Result<(), ApiError> {
        self.post_json("/filter", filter).await
    }
}
