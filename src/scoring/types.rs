use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Absent nutrient values count as zero everywhere in scoring.
#[inline]
pub fn or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Selects the metabolic-rate formula.
///
/// Labels other than male/female are kept verbatim in `Other` and produce a
/// zero BMR; callers are expected to validate upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    Male,
    Female,
    Other(String),
}

impl Sex {
    fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "male" | "m" => Sex::Male,
            "female" | "f" => Sex::Female,
            _ => Sex::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other(raw) => raw,
        }
    }
}

impl FromStr for Sex {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Sex::from_label(s))
    }
}

impl From<String> for Sex {
    fn from(raw: String) -> Self {
        Sex::from_label(&raw)
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        sex.as_str().to_string()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    pub age: u32,       // years
    pub height_cm: f64,
    pub weight_kg: f64,
    pub sex: Sex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Sodium,
}

/// Nutrients of one reference serving.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub calories: Option<f64>, // kcal
    pub protein: Option<f64>,  // g
    pub carbs: Option<f64>,    // g
    pub fat: Option<f64>,      // g
    pub fiber: Option<f64>,    // g
    pub sodium: Option<f64>,   // mg
}

impl NutrientProfile {
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sodium => self.sodium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_parses_case_insensitively() {
        assert_eq!("MALE".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" Female ".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("f".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(
            "nonbinary".parse::<Sex>().unwrap(),
            Sex::Other("nonbinary".into())
        );
    }

    #[test]
    fn sex_serializes_as_plain_string() {
        let json = serde_json::to_string(&Sex::Female).unwrap();
        assert_eq!(json, "\"female\"");
        let back: Sex = serde_json::from_str("\"MALE\"").unwrap();
        assert_eq!(back, Sex::Male);
    }

    #[test]
    fn nutrient_profile_accepts_missing_fields() {
        let profile: NutrientProfile = serde_json::from_str(r#"{"calories": 120.5}"#).unwrap();
        assert_eq!(profile.get(Nutrient::Calories), Some(120.5));
        assert_eq!(profile.get(Nutrient::Sodium), None);
        assert_eq!(or_zero(profile.sodium), 0.0);
    }
}
