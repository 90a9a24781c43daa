use crate::classify::{ImageClassifier, SpoonacularClassifier};
use crate::config::AppConfig;
use crate::foods::{FoodDataClient, UsdaClient};
use anyhow::Context;
use sqlx::PgPool;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub foods: Arc<dyn FoodDataClient>,
    /// `None` when no classifier API key is configured.
    pub classifier: Option<Arc<dyn ImageClassifier>>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = sqlx::postgres::PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("build http client")?;

        let foods = Arc::new(UsdaClient::new(http.clone(), config.usda.clone()))
            as Arc<dyn FoodDataClient>;

        let classifier = match config.classifier.api_key.as_deref() {
            Some(key) => Some(Arc::new(SpoonacularClassifier::new(
                http,
                &config.classifier.base_url,
                key,
            )) as Arc<dyn ImageClassifier>),
            None => {
                tracing::warn!("SPOONACULAR_API_KEY not set; image classification disabled");
                None
            }
        };

        Ok(Self {
            db,
            config,
            foods,
            classifier,
        })
    }

    pub fn from_parts(
        db: PgPool,
        config: Arc<AppConfig>,
        foods: Arc<dyn FoodDataClient>,
        classifier: Option<Arc<dyn ImageClassifier>>,
    ) -> Self {
        Self {
            db,
            config,
            foods,
            classifier,
        }
    }
}
