//! Derived views over a day's ledger. Nothing here is stored; every value is
//! recomputed from the entries it is given.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::nutrition::goals::{
    NutritionGoal, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use crate::nutrition::ledger::{MealEntry, MealType};

/// Consumed (or remaining) kcal and grams.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionSummary {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

pub fn summarize(entries: &[MealEntry]) -> NutritionSummary {
    entries
        .iter()
        .fold(NutritionSummary::default(), |acc, e| NutritionSummary {
            calories: acc.calories + e.food.calories * e.servings,
            protein: acc.protein + e.food.protein * e.servings,
            carbs: acc.carbs + e.food.carbs * e.servings,
            fat: acc.fat + e.food.fat * e.servings,
        })
}

/// Goal minus consumed, floored at zero per field.
pub fn remaining(goal: &NutritionGoal, summary: &NutritionSummary) -> NutritionSummary {
    NutritionSummary {
        calories: (goal.calories - summary.calories).max(0.0),
        protein: (goal.protein - summary.protein).max(0.0),
        carbs: (goal.carbs - summary.carbs).max(0.0),
        fat: (goal.fat - summary.fat).max(0.0),
    }
}

/// Share of the calorie goal already eaten, as a whole percent capped at 100.
pub fn calorie_percentage(summary: &NutritionSummary, goal: &NutritionGoal) -> u8 {
    if goal.calories <= 0.0 {
        return 0;
    }
    (summary.calories / goal.calories * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Energy contributed by each macro.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroCalories {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

pub fn macro_calories(summary: &NutritionSummary) -> MacroCalories {
    MacroCalories {
        protein: summary.protein * KCAL_PER_GRAM_PROTEIN,
        carbs: summary.carbs * KCAL_PER_GRAM_CARBS,
        fat: summary.fat * KCAL_PER_GRAM_FAT,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyStats {
    pub date: Date,
    pub calories_consumed: f64,
    pub calories_goal: f64,
    pub protein_consumed: f64,
    pub protein_goal: f64,
    pub carbs_consumed: f64,
    pub carbs_goal: f64,
    pub fat_consumed: f64,
    pub fat_goal: f64,
}

pub fn daily_stats(date: Date, goal: &NutritionGoal, summary: &NutritionSummary) -> DailyStats {
    DailyStats {
        date,
        calories_consumed: summary.calories,
        calories_goal: goal.calories,
        protein_consumed: summary.protein,
        protein_goal: goal.protein,
        carbs_consumed: summary.carbs,
        carbs_goal: goal.carbs,
        fat_consumed: summary.fat,
        fat_goal: goal.fat,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealGroup<'a> {
    pub meal_type: MealType,
    pub entries: Vec<&'a MealEntry>,
}

/// Groups entries by meal type in breakfast, lunch, dinner, snack order.
/// Empty groups are kept so callers can render a placeholder.
pub fn group_by_meal_type(entries: &[MealEntry]) -> Vec<MealGroup<'_>> {
    MealType::ORDER
        .iter()
        .map(|&meal_type| MealGroup {
            meal_type,
            entries: entries.iter().filter(|e| e.meal_type == meal_type).collect(),
        })
        .collect()
}
