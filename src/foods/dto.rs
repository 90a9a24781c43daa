use serde::{Deserialize, Serialize};

use crate::scoring::{HealthGoal, NutrientProfile};

// FoodData Central nutrient ids
pub const NUTRIENT_ENERGY_KCAL: i64 = 1008;
pub const NUTRIENT_PROTEIN: i64 = 1003;
pub const NUTRIENT_FAT: i64 = 1004;
pub const NUTRIENT_CARBS: i64 = 1005;
pub const NUTRIENT_FIBER: i64 = 1079;
pub const NUTRIENT_SODIUM: i64 = 1093;

/// Subset of the FoodData Central `/foods/search` response we read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSearchResponse {
    #[serde(default)]
    pub total_hits: i64,
    #[serde(default)]
    pub foods: Vec<FoodSearchItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSearchItem {
    pub fdc_id: Option<i64>,
    pub description: Option<String>,
    pub brand_owner: Option<String>,
    pub ingredients: Option<String>,
    pub serving_size: Option<f64>,
    pub serving_size_unit: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<FoodNutrient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodNutrient {
    pub nutrient_id: i64,
    pub nutrient_name: Option<String>,
    pub unit_name: Option<String>,
    pub value: Option<f64>,
}

/// Food as returned to clients, nutrients per reference serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub fdc_id: Option<i64>,
    pub description: Option<String>,
    pub brand_owner: Option<String>,
    pub ingredients: Option<String>,
    pub serving_size: Option<f64>,
    pub serving_size_unit: Option<String>,
    pub nutrients: NutrientProfile,
}

impl From<FoodSearchItem> for FoodItem {
    fn from(item: FoodSearchItem) -> Self {
        let mut nutrients = NutrientProfile::default();
        for n in &item.food_nutrients {
            let slot = match n.nutrient_id {
                NUTRIENT_ENERGY_KCAL => &mut nutrients.calories,
                NUTRIENT_PROTEIN => &mut nutrients.protein,
                NUTRIENT_CARBS => &mut nutrients.carbs,
                NUTRIENT_FAT => &mut nutrients.fat,
                NUTRIENT_FIBER => &mut nutrients.fiber,
                NUTRIENT_SODIUM => &mut nutrients.sodium,
                _ => continue,
            };
            *slot = n.value;
        }
        Self {
            fdc_id: item.fdc_id,
            description: item.description,
            brand_owner: item.brand_owner,
            ingredients: item.ingredients,
            serving_size: item.serving_size,
            serving_size_unit: item.serving_size_unit,
            nutrients,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FoodQuery {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct BarcodeQuery {
    pub barcode: String,
    pub goal: Option<HealthGoal>,
}

#[derive(Debug, Serialize)]
pub struct ScoredFood {
    pub food: FoodItem,
    pub goal: HealthGoal,
    pub score: f64,
}
