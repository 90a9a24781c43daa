use super::{
    goal::HealthGoal,
    types::{BiometricProfile, Sex},
};

/// Fixed "moderately active" multiplier applied to BMR.
pub const ACTIVITY_MULTIPLIER: f64 = 1.375;

/// Mifflin-St Jeor basal metabolic rate in kcal/day.
///
/// `Sex::Other` yields 0.0 rather than an error.
pub fn compute_bmr(profile: &BiometricProfile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    match profile.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
        Sex::Other(_) => 0.0,
    }
}

pub fn compute_tdee(profile: &BiometricProfile) -> f64 {
    compute_bmr(profile) * ACTIVITY_MULTIPLIER
}

/// TDEE shifted by the goal's fixed offset.
pub fn calorie_goal(profile: &BiometricProfile, goal: HealthGoal) -> f64 {
    compute_tdee(profile) + goal.calorie_offset()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(sex: Sex) -> BiometricProfile {
        BiometricProfile {
            age: 25,
            height_cm: 175.0,
            weight_kg: 70.0,
            sex,
        }
    }

    #[test]
    fn male_reference_profile() {
        let p = profile(Sex::Male);
        assert!((compute_bmr(&p) - 1673.75).abs() < 1e-9);
        assert!((compute_tdee(&p) - 2301.40625).abs() < 1e-9);
    }

    #[test]
    fn female_formula_is_166_kcal_lower() {
        let male = compute_bmr(&profile(Sex::Male));
        let female = compute_bmr(&profile(Sex::Female));
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_sex_has_zero_bmr() {
        let p = profile(Sex::Other("x".into()));
        assert_eq!(compute_bmr(&p), 0.0);
        assert_eq!(compute_tdee(&p), 0.0);
    }

    #[test]
    fn tdee_increases_with_weight_and_height_and_drops_with_age() {
        for sex in [Sex::Male, Sex::Female] {
            let base = profile(sex);
            let mut prev = compute_tdee(&base);
            for w in [71.0, 80.0, 95.5, 120.0] {
                let next = compute_tdee(&BiometricProfile { weight_kg: w, ..base.clone() });
                assert!(next > prev);
                prev = next;
            }

            let taller = BiometricProfile { height_cm: 190.0, ..base.clone() };
            assert!(compute_tdee(&taller) > compute_tdee(&base));

            let older = BiometricProfile { age: 60, ..base.clone() };
            assert!(compute_tdee(&older) < compute_tdee(&base));
        }
    }

    #[test]
    fn goal_offsets_are_additive() {
        for sex in [Sex::Male, Sex::Female] {
            let p = profile(sex);
            let tdee = compute_tdee(&p);
            assert_eq!(calorie_goal(&p, HealthGoal::LoseWeight), tdee - 500.0);
            assert_eq!(calorie_goal(&p, HealthGoal::GainMuscle), tdee + 300.0);
            assert_eq!(calorie_goal(&p, HealthGoal::MaintainHealth), tdee);
            assert_eq!(calorie_goal(&p, HealthGoal::ImproveEndurance), tdee);
            assert_eq!(calorie_goal(&p, HealthGoal::IncreaseFlexibility), tdee);
        }
    }
}
