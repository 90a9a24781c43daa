use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tracing::{error, instrument};

use super::dto::{BarcodeQuery, FoodItem, FoodQuery, ScoredFood};
use crate::{
    auth::AuthUser,
    error::{AppError, AppResult},
    profiles::repo::HealthProfile,
    scoring::score_food,
    state::AppState,
};

pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/nutrition/food", get(search_food))
        .route("/nutrition/barcode", get(food_by_barcode))
        .route("/nutrition/barcode/score", get(score_barcode))
}

fn upstream(e: anyhow::Error) -> AppError {
    error!(error = %e, "food data request failed");
    AppError::Upstream(e.to_string())
}

fn clean_barcode(raw: &str) -> AppResult<&str> {
    let code = raw.trim();
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadRequest("barcode must be digits".into()));
    }
    Ok(code)
}

async fn lookup(state: &AppState, raw: &str) -> AppResult<FoodItem> {
    let barcode = clean_barcode(raw)?;
    state
        .foods
        .find_by_barcode(barcode)
        .await
        .map_err(upstream)?
        .ok_or_else(|| AppError::NotFound("Food item not found".into()))
}

/// GET /nutrition/food?name=apple, raw FoodData Central search JSON
#[instrument(skip(state))]
pub async fn search_food(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(q): Query<FoodQuery>,
) -> AppResult<Json<Value>> {
    let name = q.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("name is required".into()));
    }
    let result = state.foods.search(name).await.map_err(upstream)?;
    Ok(Json(result))
}

#[instrument(skip(state))]
pub async fn food_by_barcode(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(q): Query<BarcodeQuery>,
) -> AppResult<Json<FoodItem>> {
    lookup(&state, &q.barcode).await.map(Json)
}

/// Barcode lookup scored against the caller's profile.
#[instrument(skip(state))]
pub async fn score_barcode(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<BarcodeQuery>,
) -> AppResult<Json<ScoredFood>> {
    clean_barcode(&q.barcode)?;
    let profile = HealthProfile::find_by_user(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".into()))?;
    let biometrics = profile.biometrics().ok_or_else(|| {
        AppError::BadRequest("Profile needs age, height_cm, weight_kg and sex for scoring".into())
    })?;
    let goal = q.goal.unwrap_or_else(|| profile.goal());

    let food = lookup(&state, &q.barcode).await?;
    let score = score_food(&food.nutrients, &biometrics, goal);
    Ok(Json(ScoredFood { food, goal, score }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barcode_must_be_digits() {
        assert_eq!(clean_barcode(" 041631000564 ").unwrap(), "041631000564");
        assert!(clean_barcode("").is_err());
        assert!(clean_barcode("abc123").is_err());
        assert!(clean_barcode("gtinUpc:1").is_err());
    }
}
