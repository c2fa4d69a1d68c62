use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Catalog entry; nutrient values are per one serving.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub serving_size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Free-form labels such as `"iron": "15%"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub micronutrients: Option<BTreeMap<String, String>>,
}

/// A suggested meal returned by a recommendation provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealRecommendation {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
}

impl From<&MealRecommendation> for FoodItem {
    fn from(r: &MealRecommendation) -> Self {
        Self {
            id: r.id.clone(),
            name: r.name.clone(),
            calories: r.calories,
            protein: r.protein,
            carbs: r.carbs,
            fat: r.fat,
            serving_size: "1 serving".into(),
            image_url: r.image_url.clone(),
            micronutrients: None,
        }
    }
}
