use serde::{Deserialize, Serialize};
use time::Date;

use crate::nutrition::aggregate::NutritionSummary;
use crate::nutrition::goals::NutritionGoal;
use crate::nutrition::ledger::MealType;
use crate::nutrition::types::FoodItem;

#[derive(Debug, Deserialize)]
pub struct AddMealRequest {
    /// Absent when nothing was picked; rejected as a missing selection.
    #[serde(default)]
    pub food: Option<FoodItem>,
    pub meal_type: MealType,
    #[serde(default = "default_servings")]
    pub servings: f64,
}

fn default_servings() -> f64 {
    1.0
}

#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub date: Date,
    pub summary: NutritionSummary,
    pub goal: NutritionGoal,
    pub remaining: NutritionSummary,
}
