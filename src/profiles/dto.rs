use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::repo::HealthProfile;
use crate::{
    error::AppError,
    scoring::{calorie_goal, compute_tdee, HealthGoal},
};

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub sex: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    pub dietary_preference: Option<String>,
    pub goal: Option<HealthGoal>,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if matches!(self.age, Some(a) if a <= 0) {
            return Err(AppError::BadRequest("age must be positive".into()));
        }
        if matches!(self.height_cm, Some(h) if !(h.is_finite() && h > 0.0)) {
            return Err(AppError::BadRequest("height_cm must be positive".into()));
        }
        if matches!(self.weight_kg, Some(w) if !(w.is_finite() && w > 0.0)) {
            return Err(AppError::BadRequest("weight_kg must be positive".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub sex: Option<String>,
    pub allergies: Vec<String>,
    pub dietary_preference: Option<String>,
    pub goal: HealthGoal,
    /// Present once age, height, weight and sex are all set.
    pub tdee: Option<f64>,
    pub calorie_goal: Option<f64>,
    pub updated_at: OffsetDateTime,
}

impl From<HealthProfile> for ProfileResponse {
    fn from(p: HealthProfile) -> Self {
        let goal = p.goal();
        let bio = p.biometrics();
        Self {
            tdee: bio.as_ref().map(compute_tdee),
            calorie_goal: bio.as_ref().map(|b| calorie_goal(b, goal)),
            age: p.age,
            height_cm: p.height_cm,
            weight_kg: p.weight_kg,
            sex: p.sex,
            allergies: p.allergies,
            dietary_preference: p.dietary_preference,
            goal,
            updated_at: p.updated_at,
        }
    }
}
