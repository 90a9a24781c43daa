use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    dto::{
        parse_day, validate_servings, CreateEntryRequest, DailyQuery, DailyReport, DayQuery,
        UpdateEntryRequest,
    },
    repo::{self, LogEntry},
    services::build_daily_report,
};
use crate::{
    auth::AuthUser,
    error::{AppError, AppResult},
    profiles::repo::HealthProfile,
    state::AppState,
};

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/log", get(list_entries))
        .route("/log/daily", get(daily_report))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/log", post(create_entry))
        .route("/log/:id", put(update_entry).delete(delete_entry))
}

// --- handlers ---

#[instrument(skip(state))]
pub async fn list_entries(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<DayQuery>,
) -> AppResult<Json<Vec<LogEntry>>> {
    let day = parse_day(q.date.as_deref())?;
    let entries = repo::list_for_day(&state.db, user_id, day).await?;
    Ok(Json(entries))
}

#[instrument(skip(state, body))]
pub async fn create_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateEntryRequest>,
) -> AppResult<(StatusCode, HeaderMap, Json<LogEntry>)> {
    validate_servings(body.servings)?;
    let day = parse_day(body.logged_on.as_deref())?;

    let entry = repo::insert(&state.db, user_id, day, &body).await?;
    info!(%user_id, entry_id = %entry.id, %day, "food logged");

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/api/v1/log/{}", entry.id)) {
        headers.insert(header::LOCATION, location);
    }
    Ok((StatusCode::CREATED, headers, Json(entry)))
}

#[instrument(skip(state, body))]
pub async fn update_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateEntryRequest>,
) -> AppResult<Json<LogEntry>> {
    if let Some(servings) = body.servings {
        validate_servings(servings)?;
    }
    let entry = repo::update(&state.db, user_id, id, body.servings, body.notes.as_deref())
        .await?
        .ok_or_else(|| {
            warn!(%user_id, %id, "update of unknown entry");
            AppError::NotFound("Entry not found".into())
        })?;
    Ok(Json(entry))
}

#[instrument(skip(state))]
pub async fn delete_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if !repo::delete(&state.db, user_id, id).await? {
        return Err(AppError::NotFound("Entry not found".into()));
    }
    info!(%user_id, %id, "entry deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /log/daily?date=YYYY-MM-DD&goal=LOSE_WEIGHT
#[instrument(skip(state))]
pub async fn daily_report(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<DailyQuery>,
) -> AppResult<Json<DailyReport>> {
    let day = parse_day(q.date.as_deref())?;

    let profile = HealthProfile::find_by_user(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".into()))?;
    let biometrics = profile.biometrics().ok_or_else(|| {
        AppError::BadRequest("Profile needs age, height_cm, weight_kg and sex for scoring".into())
    })?;
    let goal = q.goal.unwrap_or_else(|| profile.goal());

    let entries = repo::list_for_day(&state.db, user_id, day).await?;
    Ok(Json(build_daily_report(day, goal, &biometrics, entries)))
}
