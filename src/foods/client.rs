use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::dto::{FoodItem, FoodSearchResponse};
use crate::config::UsdaConfig;

#[async_trait]
pub trait FoodDataClient: Send + Sync {
    /// Raw text search response, passed through to the caller untouched.
    async fn search(&self, query: &str) -> anyhow::Result<Value>;
    /// First food whose GTIN/UPC matches, if any.
    async fn find_by_barcode(&self, barcode: &str) -> anyhow::Result<Option<FoodItem>>;
}

#[derive(Clone)]
pub struct UsdaClient {
    http: reqwest::Client,
    config: UsdaConfig,
}

impl UsdaClient {
    pub fn new(http: reqwest::Client, config: UsdaConfig) -> Self {
        Self { http, config }
    }

    async fn get_search<T: serde::de::DeserializeOwned>(&self, query: &str) -> anyhow::Result<T> {
        let resp = self
            .http
            .get(&self.config.search_url)
            .query(&[("query", query), ("api_key", self.config.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<T>().await?)
    }
}

#[async_trait]
impl FoodDataClient for UsdaClient {
    async fn search(&self, query: &str) -> anyhow::Result<Value> {
        debug!(%query, "usda search");
        self.get_search(query).await
    }

    async fn find_by_barcode(&self, barcode: &str) -> anyhow::Result<Option<FoodItem>> {
        debug!(%barcode, "usda barcode lookup");
        let resp: FoodSearchResponse = self.get_search(&format!("gtinUpc:{barcode}")).await?;
        Ok(resp.foods.into_iter().next().map(FoodItem::from))
    }
}
