use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument};

use super::client::{predicted_food, ImageClassifier};
use crate::{
    auth::AuthUser,
    error::{AppError, AppResult},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub image_url: String,
}

#[derive(Debug, Serialize)]
pub struct FoodAnalysis {
    pub image_url: String,
    pub predicted_food: String,
    pub classification: Value,
    pub nutrition: Value,
}

pub fn classify_routes() -> Router<AppState> {
    Router::new()
        .route("/classify", get(classify))
        .route("/classify/analyze", post(analyze))
}

fn classifier(state: &AppState) -> AppResult<Arc<dyn ImageClassifier>> {
    state
        .classifier
        .clone()
        .ok_or_else(|| AppError::Unavailable("Image classification is not configured".into()))
}

fn image_url(q: &ImageQuery) -> AppResult<&str> {
    let url = q.image_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AppError::BadRequest("image_url must be an http(s) URL".into()));
    }
    Ok(url)
}

async fn run_classifier(classifier: &dyn ImageClassifier, url: &str) -> AppResult<Value> {
    classifier.classify(url).await.map_err(|e| {
        error!(error = %e, "image classification failed");
        AppError::Upstream(e.to_string())
    })
}

#[instrument(skip(state))]
pub async fn classify(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(q): Query<ImageQuery>,
) -> AppResult<Json<Value>> {
    let classifier = classifier(&state)?;
    let url = image_url(&q)?;
    run_classifier(classifier.as_ref(), url).await.map(Json)
}

/// Classifies the image, then looks the predicted food up in FoodData Central.
#[instrument(skip(state))]
pub async fn analyze(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<ImageQuery>,
) -> AppResult<Json<FoodAnalysis>> {
    let classifier = classifier(&state)?;
    let url = image_url(&q)?;

    let classification = run_classifier(classifier.as_ref(), url).await?;
    let predicted = predicted_food(&classification);
    info!(%user_id, predicted_food = %predicted, "image classified");

    let nutrition = state.foods.search(&predicted).await.map_err(|e| {
        error!(error = %e, "food data request failed");
        AppError::Upstream(e.to_string())
    })?;

    Ok(Json(FoodAnalysis {
        image_url: url.to_string(),
        predicted_food: predicted,
        classification,
        nutrition,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(url: &str) -> ImageQuery {
        ImageQuery {
            image_url: url.into(),
        }
    }

    #[test]
    fn image_url_must_be_http() {
        assert_eq!(image_url(&query(" https://img.example/a.jpg ")).unwrap(), "https://img.example/a.jpg");
        assert!(image_url(&query("http://img.example/a.jpg")).is_ok());
        for bad in ["", "ftp://img.example/a.jpg", "file:///etc/passwd", "img.example/a.jpg"] {
            assert!(matches!(image_url(&query(bad)), Err(AppError::BadRequest(_))), "{bad}");
        }
    }
}
