use serde::Serialize;

use super::{
    goal::HealthGoal,
    score_food,
    types::{or_zero, BiometricProfile, NutrientProfile},
};

/// Nutrients consumed over a day, scaled by servings eaten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sodium: f64,
}

impl NutrientTotals {
    fn add(mut self, per_serving: &NutrientProfile, servings: f64) -> Self {
        self.calories += or_zero(per_serving.calories) * servings;
        self.protein += or_zero(per_serving.protein) * servings;
        self.carbs += or_zero(per_serving.carbs) * servings;
        self.fat += or_zero(per_serving.fat) * servings;
        self.fiber += or_zero(per_serving.fiber) * servings;
        self.sodium += or_zero(per_serving.sodium) * servings;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyScore {
    /// Mean of the per-item scores. NaN when no items were logged.
    pub daily_score: f64,
    /// Per-item scores, in input order.
    pub item_scores: Vec<f64>,
    pub totals: NutrientTotals,
}

impl DailyScore {
    pub fn item_count(&self) -> usize {
        self.item_scores.len()
    }
}

/// Arithmetic mean. An empty input gives `0.0 / 0.0`, i.e. NaN.
pub fn daily_score<I>(scores: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = scores
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), s| (sum + s, count + 1));
    sum / count as f64
}

/// Sums `per_serving * servings` for every nutrient; absent values add nothing.
pub fn nutrient_totals<'a, I>(entries: I) -> NutrientTotals
where
    I: IntoIterator<Item = (&'a NutrientProfile, f64)>,
{
    entries
        .into_iter()
        .fold(NutrientTotals::default(), |totals, (n, servings)| totals.add(n, servings))
}

/// Scores every item and folds them into one daily summary in a single pass.
///
/// The daily score is the unweighted mean of item scores; servings only
/// affect the nutrient totals.
pub fn aggregate_daily<'a, I>(items: I, profile: &BiometricProfile, goal: HealthGoal) -> DailyScore
where
    I: IntoIterator<Item = (&'a NutrientProfile, f64)>,
{
    let (item_scores, totals) = items.into_iter().fold(
        (Vec::new(), NutrientTotals::default()),
        |(mut scores, totals), (nutrients, servings)| {
            scores.push(score_food(nutrients, profile, goal));
            (scores, totals.add(nutrients, servings))
        },
    );
    DailyScore {
        daily_score: daily_score(item_scores.iter().copied()),
        item_scores,
        totals,
    }
}
