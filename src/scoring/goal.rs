use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::types::Nutrient;

/// Upper end of a normalization range. The lower end is always zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Fixed(f64),
    /// The goal-adjusted daily calorie target.
    CalorieGoal,
    /// The calorie target plus a fixed margin.
    CalorieGoalPlus(f64),
}

impl Bound {
    pub fn resolve(self, calorie_goal: f64) -> f64 {
        match self {
            Bound::Fixed(max) => max,
            Bound::CalorieGoal => calorie_goal,
            Bound::CalorieGoalPlus(margin) => calorie_goal + margin,
        }
    }
}

/// One signed, weighted term of a goal formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub nutrient: Nutrient,
    pub weight: f64,
    pub bound: Bound,
}

const fn term(nutrient: Nutrient, weight: f64, bound: Bound) -> Term {
    Term {
        nutrient,
        weight,
        bound,
    }
}

use Bound::{CalorieGoal, CalorieGoalPlus, Fixed};
use Nutrient::{Calories, Carbs, Fat, Fiber, Protein, Sodium};

static LOSE_WEIGHT: [Term; 4] = [
    term(Calories, 0.3, CalorieGoal),
    term(Carbs, -0.3, Fixed(100.0)),
    term(Protein, 0.2, Fixed(30.0)),
    term(Fat, -0.2, Fixed(20.0)),
];

static GAIN_MUSCLE: [Term; 4] = [
    term(Calories, 0.2, CalorieGoalPlus(300.0)),
    term(Carbs, 0.2, Fixed(150.0)),
    term(Protein, 0.4, Fixed(60.0)),
    term(Fat, 0.2, Fixed(40.0)),
];

static IMPROVE_ENDURANCE: [Term; 4] = [
    term(Calories, 0.25, CalorieGoal),
    term(Carbs, 0.4, Fixed(150.0)),
    term(Protein, 0.25, Fixed(50.0)),
    term(Fat, 0.1, Fixed(30.0)),
];

static INCREASE_FLEXIBILITY: [Term; 5] = [
    term(Calories, 0.3, Fixed(500.0)),
    term(Carbs, 0.2, Fixed(100.0)),
    term(Protein, 0.2, Fixed(30.0)),
    term(Fat, 0.2, Fixed(40.0)),
    term(Fiber, 0.1, Fixed(30.0)),
];

static MAINTAIN_HEALTH: [Term; 6] = [
    term(Calories, 0.2, CalorieGoal),
    term(Carbs, 0.2, Fixed(150.0)),
    term(Protein, 0.2, Fixed(50.0)),
    term(Fat, 0.2, Fixed(30.0)),
    term(Fiber, 0.1, Fixed(30.0)),
    term(Sodium, -0.1, Fixed(2000.0)),
];

/// Serialized as `LOSE_WEIGHT` etc. Deserialization goes through `FromStr`,
/// so `lose-weight` and `Lose Weight` are accepted too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum HealthGoal {
    LoseWeight,
    GainMuscle,
    ImproveEndurance,
    IncreaseFlexibility,
    #[default]
    MaintainHealth,
}

impl HealthGoal {
    pub const ALL: [HealthGoal; 5] = [
        HealthGoal::LoseWeight,
        HealthGoal::GainMuscle,
        HealthGoal::ImproveEndurance,
        HealthGoal::IncreaseFlexibility,
        HealthGoal::MaintainHealth,
    ];

    /// Weighted terms summed by `score_food` for this goal.
    pub fn terms(self) -> &'static [Term] {
        match self {
            HealthGoal::LoseWeight => &LOSE_WEIGHT,
            HealthGoal::GainMuscle => &GAIN_MUSCLE,
            HealthGoal::ImproveEndurance => &IMPROVE_ENDURANCE,
            HealthGoal::IncreaseFlexibility => &INCREASE_FLEXIBILITY,
            HealthGoal::MaintainHealth => &MAINTAIN_HEALTH,
        }
    }

    /// kcal added to TDEE to get the daily target.
    pub fn calorie_offset(self) -> f64 {
        match self {
            HealthGoal::LoseWeight => -500.0,
            HealthGoal::GainMuscle => 300.0,
            HealthGoal::ImproveEndurance
            | HealthGoal::IncreaseFlexibility
            | HealthGoal::MaintainHealth => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthGoal::LoseWeight => "LOSE_WEIGHT",
            HealthGoal::GainMuscle => "GAIN_MUSCLE",
            HealthGoal::ImproveEndurance => "IMPROVE_ENDURANCE",
            HealthGoal::IncreaseFlexibility => "INCREASE_FLEXIBILITY",
            HealthGoal::MaintainHealth => "MAINTAIN_HEALTH",
        }
    }
}

impl fmt::Display for HealthGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown health goal: {0}")]
pub struct UnknownGoal(String);

impl FromStr for HealthGoal {
    type Err = UnknownGoal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        HealthGoal::ALL
            .into_iter()
            .find(|goal| goal.as_str() == normalized)
            .ok_or_else(|| UnknownGoal(s.to_string()))
    }
}

impl TryFrom<String> for HealthGoal {
    type Error = UnknownGoal;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixed_bound_is_a_valid_range() {
        for goal in HealthGoal::ALL {
            for t in goal.terms() {
                if let Bound::Fixed(max) = t.bound {
                    assert!(max > 0.0, "{goal}: {:?} has bound {max}", t.nutrient);
                }
            }
        }
    }

    #[test]
    fn each_goal_scores_calories_exactly_once() {
        for goal in HealthGoal::ALL {
            let count = goal
                .terms()
                .iter()
                .filter(|t| t.nutrient == Nutrient::Calories)
                .count();
            assert_eq!(count, 1, "{goal}");
        }
    }

    #[test]
    fn parses_wire_names_and_loose_spellings() {
        assert_eq!("LOSE_WEIGHT".parse::<HealthGoal>().unwrap(), HealthGoal::LoseWeight);
        assert_eq!("gain-muscle".parse::<HealthGoal>().unwrap(), HealthGoal::GainMuscle);
        assert_eq!(
            "improve endurance".parse::<HealthGoal>().unwrap(),
            HealthGoal::ImproveEndurance
        );
        assert!("sleep_more".parse::<HealthGoal>().is_err());
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&HealthGoal::IncreaseFlexibility).unwrap();
        assert_eq!(json, "\"INCREASE_FLEXIBILITY\"");
        let goal: HealthGoal = serde_json::from_str("\"MAINTAIN_HEALTH\"").unwrap();
        assert_eq!(goal, HealthGoal::MaintainHealth);
    }

    #[test]
    fn deserialize_accepts_loose_spellings() {
        let goal: HealthGoal = serde_json::from_str("\"lose_weight\"").unwrap();
        assert_eq!(goal, HealthGoal::LoseWeight);
        let goal: HealthGoal = serde_json::from_str("\"gain-muscle\"").unwrap();
        assert_eq!(goal, HealthGoal::GainMuscle);

        let err = serde_json::from_str::<HealthGoal>("\"GET_RICH\"").unwrap_err();
        assert!(err.to_string().contains("unknown health goal: GET_RICH"), "{err}");
    }

    #[test]
    fn default_goal_is_maintain_health() {
        assert_eq!(HealthGoal::default(), HealthGoal::MaintainHealth);
    }

    #[test]
    fn calorie_bounds_follow_target() {
        assert_eq!(Bound::CalorieGoal.resolve(2000.0), 2000.0);
        assert_eq!(Bound::CalorieGoalPlus(300.0).resolve(2000.0), 2300.0);
        assert_eq!(Bound::Fixed(30.0).resolve(2000.0), 30.0);
    }
}
