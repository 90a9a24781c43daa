use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date, OffsetDateTime};

use super::repo::LogEntry;
use crate::{
    error::{AppError, AppResult},
    scoring::{HealthGoal, NutrientProfile, NutrientTotals},
};

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    /// YYYY-MM-DD; defaults to today (UTC).
    pub logged_on: Option<String>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub nutrients: NutrientProfile,
    #[serde(default = "default_servings")]
    pub servings: f64,
    pub notes: Option<String>,
}

fn default_servings() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct UpdateEntryRequest {
    pub servings: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    pub date: Option<String>,
    /// Overrides the goal stored on the profile.
    pub goal: Option<HealthGoal>,
}

#[derive(Debug, Serialize)]
pub struct ScoredEntry {
    #[serde(flatten)]
    pub entry: LogEntry,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct DailyReport {
    pub date: Date,
    pub goal: HealthGoal,
    pub calorie_goal: f64,
    /// `None` (JSON null) when nothing was logged that day.
    pub daily_score: Option<f64>,
    pub item_count: usize,
    pub totals: NutrientTotals,
    pub items: Vec<ScoredEntry>,
}

pub fn parse_day(raw: Option<&str>) -> AppResult<Date> {
    match raw {
        None => Ok(OffsetDateTime::now_utc().date()),
        Some(s) => Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
            .map_err(|_| AppError::BadRequest(format!("invalid date '{s}', expected YYYY-MM-DD"))),
    }
}

pub fn validate_servings(servings: f64) -> AppResult<()> {
    if servings.is_finite() && servings > 0.0 {
        Ok(())
    } else {
        Err(AppError::BadRequest("servings must be positive".into()))
    }
}
