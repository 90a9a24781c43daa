use serde::Serialize;
use sqlx::{FromRow, PgExecutor, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::UpdateProfileRequest;
use crate::scoring::{BiometricProfile, HealthGoal, Sex};

/// Health profile row; one per user, created empty at registration.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HealthProfile {
    pub user_id: Uuid,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub sex: Option<String>,
    pub allergies: Vec<String>,
    pub dietary_preference: Option<String>,
    pub goal: String,
    pub updated_at: OffsetDateTime,
}

impl HealthProfile {
    /// Scoring input, or `None` while any biometric field is missing.
    pub fn biometrics(&self) -> Option<BiometricProfile> {
        let age = u32::try_from(self.age?).ok().filter(|a| *a > 0)?;
        Some(BiometricProfile {
            age,
            height_cm: self.height_cm?,
            weight_kg: self.weight_kg?,
            sex: Sex::from(self.sex.clone()?),
        })
    }

    /// Stored goal; unreadable values fall back to the default goal.
    pub fn goal(&self) -> HealthGoal {
        self.goal.parse().unwrap_or_default()
    }

    pub async fn find_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<HealthProfile>> {
        let profile = sqlx::query_as::<_, HealthProfile>(
            r#"
            SELECT user_id, age, height_cm, weight_kg, sex, allergies,
                   dietary_preference, goal, updated_at
            FROM health_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(profile)
    }

    pub async fn create_empty<'e>(db: impl PgExecutor<'e>, user_id: Uuid) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO health_profiles (user_id, goal)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(HealthGoal::default().as_str())
        .execute(db)
        .await?;
        Ok(())
    }

    /// Replaces every editable field, creating the row if it is missing.
    pub async fn upsert(
        db: &PgPool,
        user_id: Uuid,
        req: &UpdateProfileRequest,
    ) -> anyhow::Result<HealthProfile> {
        let profile = sqlx::query_as::<_, HealthProfile>(
            r#"
            INSERT INTO health_profiles
                (user_id, age, height_cm, weight_kg, sex, allergies, dietary_preference, goal)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id) DO UPDATE SET
                age = EXCLUDED.age,
                height_cm = EXCLUDED.height_cm,
                weight_kg = EXCLUDED.weight_kg,
                sex = EXCLUDED.sex,
                allergies = EXCLUDED.allergies,
                dietary_preference = EXCLUDED.dietary_preference,
                goal = EXCLUDED.goal,
                updated_at = now()
            RETURNING user_id, age, height_cm, weight_kg, sex, allergies,
                      dietary_preference, goal, updated_at
            "#,
        )
        .bind(user_id)
        .bind(req.age)
        .bind(req.height_cm)
        .bind(req.weight_kg)
        .bind(req.sex.as_ref().map(|s| s.as_str()))
        .bind(&req.allergies)
        .bind(&req.dietary_preference)
        .bind(req.goal.unwrap_or_default().as_str())
        .fetch_one(db)
        .await?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> HealthProfile {
        HealthProfile {
            user_id: Uuid::new_v4(),
            age: Some(25),
            height_cm: Some(175.0),
            weight_kg: Some(70.0),
            sex: Some("MALE".into()),
            allergies: vec!["peanuts".into()],
            dietary_preference: None,
            goal: "LOSE_WEIGHT".into(),
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn complete_profile_yields_biometrics() {
        let bio = profile().biometrics().expect("complete profile");
        assert_eq!(bio.age, 25);
        assert_eq!(bio.sex, Sex::Male);
        assert_eq!(profile().goal(), HealthGoal::LoseWeight);
    }

    #[test]
    fn missing_field_yields_none() {
        let mut p = profile();
        p.weight_kg = None;
        assert!(p.biometrics().is_none());

        let mut p = profile();
        p.sex = None;
        assert!(p.biometrics().is_none());

        let mut p = profile();
        p.age = Some(0);
        assert!(p.biometrics().is_none());
    }

    #[test]
    fn unreadable_goal_falls_back_to_default() {
        let mut p = profile();
        p.goal = "???".into();
        assert_eq!(p.goal(), HealthGoal::MaintainHealth);
    }
}
