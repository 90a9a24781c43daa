//! Per-food nutrition scoring and daily aggregation.
//!
//! Everything in here is a pure function of its inputs: no I/O, no shared
//! state. The HTTP layer loads profiles and log entries and hands them over.

mod daily;
mod goal;
mod metabolic;
mod normalize;
mod types;

pub use daily::{aggregate_daily, daily_score, nutrient_totals, DailyScore, NutrientTotals};
pub use goal::{Bound, HealthGoal, Term, UnknownGoal};
pub use metabolic::{calorie_goal, compute_bmr, compute_tdee, ACTIVITY_MULTIPLIER};
pub use normalize::normalize;
pub use types::{or_zero, BiometricProfile, Nutrient, NutrientProfile, Sex};

/// Scores one food item for a person pursuing `goal`.
///
/// The result is unbounded: negatively weighted terms can push it below
/// zero and nothing clamps the final sum.
pub fn score_food(nutrients: &NutrientProfile, profile: &BiometricProfile, goal: HealthGoal) -> f64 {
    let target = calorie_goal(profile, goal);
    goal.terms()
        .iter()
        .map(|term| {
            term.weight * normalize(nutrients.get(term.nutrient), 0.0, term.bound.resolve(target))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn male() -> BiometricProfile {
        BiometricProfile {
            age: 25,
            height_cm: 175.0,
            weight_kg: 70.0,
            sex: Sex::Male,
        }
    }

    fn sample_item() -> NutrientProfile {
        NutrientProfile {
            calories: Some(300.0),
            carbs: Some(40.0),
            protein: Some(20.0),
            fat: Some(10.0),
            fiber: Some(5.0),
            sodium: Some(500.0),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn maintain_health_matches_hand_computed_score() {
        let tdee = 1673.75 * 1.375;
        let expected = 0.2 * (300.0 / tdee * 100.0)
            + 0.2 * (40.0 / 150.0 * 100.0)
            + 0.2 * (20.0 / 50.0 * 100.0)
            + 0.2 * (10.0 / 30.0 * 100.0)
            + 0.1 * (5.0 / 30.0 * 100.0)
            - 0.1 * (500.0 / 2000.0 * 100.0);
        assert_close(score_food(&sample_item(), &male(), HealthGoal::MaintainHealth), expected);
    }

    #[test]
    fn gain_muscle_uses_raised_calorie_bound() {
        let bound = 1673.75 * 1.375 + 300.0 + 300.0;
        let expected = 0.2 * (300.0 / bound * 100.0)
            + 0.2 * (40.0 / 150.0 * 100.0)
            + 0.4 * (20.0 / 60.0 * 100.0)
            + 0.2 * (10.0 / 40.0 * 100.0);
        assert_close(score_food(&sample_item(), &male(), HealthGoal::GainMuscle), expected);
    }

    #[test]
    fn flexibility_uses_fixed_calorie_bound() {
        let item = NutrientProfile {
            calories: Some(250.0),
            fiber: Some(60.0),
            ..Default::default()
        };
        // 0.3 * 50 + 0.1 * 100 (fiber clamps at 30g)
        assert_close(score_food(&item, &male(), HealthGoal::IncreaseFlexibility), 25.0);
    }

    #[test]
    fn lose_weight_can_go_negative() {
        let item = NutrientProfile {
            carbs: Some(150.0),
            fat: Some(25.0),
            ..Default::default()
        };
        assert_close(score_food(&item, &male(), HealthGoal::LoseWeight), -50.0);
    }

    #[test]
    fn empty_nutrients_score_finite_for_every_goal() {
        let empty = NutrientProfile::default();
        for goal in HealthGoal::ALL {
            let score = score_food(&empty, &male(), goal);
            assert!(score.is_finite(), "{goal:?} produced {score}");
            assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn sample_item_scores_finite_for_every_goal_and_sex() {
        let female = BiometricProfile {
            age: 25,
            height_cm: 165.0,
            weight_kg: 60.0,
            sex: Sex::Female,
        };
        for goal in HealthGoal::ALL {
            assert!(score_food(&sample_item(), &male(), goal).is_finite());
            assert!(score_food(&sample_item(), &female, goal).is_finite());
        }
    }

    #[test]
    fn unknown_sex_still_scores_finite() {
        let profile = BiometricProfile {
            sex: Sex::Other("unspecified".into()),
            ..male()
        };
        // zero BMR leaves LoseWeight with a negative calorie bound; the term drops out
        let score = score_food(&sample_item(), &profile, HealthGoal::LoseWeight);
        assert!(score.is_finite());
        let expected = -0.3 * 40.0 + 0.2 * (20.0 / 30.0 * 100.0) - 0.2 * 50.0;
        assert_close(score, expected);
    }
}
