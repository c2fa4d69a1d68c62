//! Daily calorie and macro targets for a fitness goal.

use serde::{Deserialize, Serialize};

// Atwater factors, kcal per gram.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Fitness goal chosen by the user. Unknown labels deserialize to `Maintenance`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    #[default]
    Maintenance,
}

impl FitnessGoal {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "weight_loss" => FitnessGoal::WeightLoss,
            "muscle_gain" => FitnessGoal::MuscleGain,
            _ => FitnessGoal::Maintenance,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "weight_loss",
            FitnessGoal::MuscleGain => "muscle_gain",
            FitnessGoal::Maintenance => "maintenance",
        }
    }

    fn split(self) -> MacroSplit {
        match self {
            FitnessGoal::MuscleGain => MacroSplit {
                protein_g_per_kg: 2.2,
                protein_fallback_g: 150.0,
                carbs_share: 0.5,
                fat_share: 0.25,
            },
            FitnessGoal::WeightLoss => MacroSplit {
                protein_g_per_kg: 2.0,
                protein_fallback_g: 120.0,
                carbs_share: 0.4,
                fat_share: 0.3,
            },
            FitnessGoal::Maintenance => MacroSplit {
                protein_g_per_kg: 1.8,
                protein_fallback_g: 130.0,
                carbs_share: 0.45,
                fat_share: 0.3,
            },
        }
    }
}

impl From<String> for FitnessGoal {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl std::fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

struct MacroSplit {
    protein_g_per_kg: f64,
    protein_fallback_g: f64,
    carbs_share: f64,
    fat_share: f64,
}

/// Daily calorie (kcal) and macro (g) targets.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionGoal {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Splits a TDEE into a daily budget for the given goal.
///
/// Calories pass through unchanged. Protein scales with bodyweight and falls
/// back to a fixed amount when weight is unknown; carbs and fat are shares of
/// the TDEE converted to grams. Every macro is rounded to the nearest gram.
pub fn derive_goal(tdee: u32, goal: FitnessGoal, weight_kg: Option<f64>) -> NutritionGoal {
    let split = goal.split();
    let tdee = f64::from(tdee);
    let protein = match weight_kg {
        Some(w) => w * split.protein_g_per_kg,
        None => split.protein_fallback_g,
    };

    NutritionGoal {
        calories: tdee,
        protein: protein.round(),
        carbs: (tdee * split.carbs_share / KCAL_PER_GRAM_CARBS).round(),
        fat: (tdee * split.fat_share / KCAL_PER_GRAM_FAT).round(),
    }
}
