use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

#[async_trait]
pub trait ImageClassifier: Send + Sync {
    /// Classifies the food shown at a public image URL.
    async fn classify(&self, image_url: &str) -> anyhow::Result<Value>;
}

/// Spoonacular `food/images/classify`.
#[derive(Clone)]
pub struct SpoonacularClassifier {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SpoonacularClassifier {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl ImageClassifier for SpoonacularClassifier {
    async fn classify(&self, image_url: &str) -> anyhow::Result<Value> {
        debug!(%image_url, "classifying image");
        let resp = self
            .http
            .get(format!("{}/food/images/classify", self.base_url))
            .header("x-api-key", &self.api_key)
            .query(&[("imageUrl", image_url)])
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }
}

/// Food name from a classification payload.
///
/// Accepts both `{"category": "pizza"}` and `{"category": {"name": "pizza"}}`.
pub fn predicted_food(classification: &Value) -> String {
    let category = &classification["category"];
    category
        .as_str()
        .or_else(|| category["name"].as_str())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("unknown food")
        .to_string()
}
