use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::dto::CreateEntryRequest;
use crate::scoring::NutrientProfile;

/// One logged food, with nutrients quoted per reference serving.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LogEntry {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    pub logged_on: Date,
    pub description: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub sodium: Option<f64>,
    pub servings: f64,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
}

impl LogEntry {
    pub fn nutrients(&self) -> NutrientProfile {
        NutrientProfile {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            fiber: self.fiber,
            sodium: self.sodium,
        }
    }
}

pub async fn list_for_day(db: &PgPool, user_id: Uuid, day: Date) -> anyhow::Result<Vec<LogEntry>> {
    let rows = sqlx::query_as::<_, LogEntry>(
        r#"
        SELECT id, user_id, logged_on, description, calories, protein, carbs, fat,
               fiber, sodium, servings, notes, created_at
        FROM food_log_entries
        WHERE user_id = $1 AND logged_on = $2
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .bind(day)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    day: Date,
    req: &CreateEntryRequest,
) -> anyhow::Result<LogEntry> {
    let n = &req.nutrients;
    let row = sqlx::query_as::<_, LogEntry>(
        r#"
        INSERT INTO food_log_entries
            (id, user_id, logged_on, description, calories, protein, carbs, fat,
             fiber, sodium, servings, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING id, user_id, logged_on, description, calories, protein, carbs, fat,
                  fiber, sodium, servings, notes, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(day)
    .bind(&req.description)
    .bind(n.calories)
    .bind(n.protein)
    .bind(n.carbs)
    .bind(n.fat)
    .bind(n.fiber)
    .bind(n.sodium)
    .bind(req.servings)
    .bind(&req.notes)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Edits amount and/or notes. `None` fields keep their stored value.
pub async fn update(
    db: &PgPool,
    user_id: Uuid,
    id: Uuid,
    servings: Option<f64>,
    notes: Option<&str>,
) -> anyhow::Result<Option<LogEntry>> {
    let row = sqlx::query_as::<_, LogEntry>(
        r#"
        UPDATE food_log_entries
        SET servings = COALESCE($3, servings),
            notes = COALESCE($4, notes)
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, logged_on, description, calories, protein, carbs, fat,
                  fiber, sodium, servings, notes, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(servings)
    .bind(notes)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// Returns false when no entry with this id belongs to the user.
pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
    let res = sqlx::query(r#"DELETE FROM food_log_entries WHERE id = $1 AND user_id = $2"#)
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}
