use serde::{Deserialize, Serialize};

use crate::nutrition::aggregate::NutritionSummary;
use crate::nutrition::goals::FitnessGoal;
use crate::nutrition::ledger::MealType;
use crate::nutrition::types::MealRecommendation;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsView {
    pub goal: FitnessGoal,
    pub remaining: NutritionSummary,
    pub meals: Vec<MealRecommendation>,
}

/// Logs a suggested meal as a regular ledger entry.
#[derive(Debug, Deserialize)]
pub struct LogRecommendationRequest {
    pub recommendation: MealRecommendation,
    #[serde(default = "default_meal_type")]
    pub meal_type: MealType,
    #[serde(default = "default_servings")]
    pub servings: f64,
}

fn default_meal_type() -> MealType {
    MealType::Lunch
}

fn default_servings() -> f64 {
    1.0
}
