use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::nutrition::energy::{compute_tdee, ActivityLevel, Sex};
use crate::nutrition::goals::{derive_goal, FitnessGoal, NutritionGoal};

/// TDEE assumed until the user has entered every body metric.
pub const DEFAULT_TDEE: u32 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Body metrics and fitness goal. Metrics stay empty until profile setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub goal: FitnessGoal,
}

impl Profile {
    pub fn new(goal: FitnessGoal) -> Self {
        Self {
            goal,
            ..Default::default()
        }
    }

    /// Computed TDEE once all metrics are known, [`DEFAULT_TDEE`] before that.
    pub fn tdee(&self) -> u32 {
        match (self.age, self.weight_kg, self.height_cm, self.activity_level) {
            (Some(age), Some(weight), Some(height), Some(activity)) => {
                compute_tdee(age, weight, height, activity, self.sex)
            }
            _ => DEFAULT_TDEE,
        }
    }

    pub fn nutrition_goal(&self) -> NutritionGoal {
        derive_goal(self.tdee(), self.goal, self.weight_kg)
    }
}

/// Partial profile update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub sex: Option<Sex>,
    pub goal: Option<FitnessGoal>,
}

impl ProfileUpdate {
    pub fn goal(goal: FitnessGoal) -> Self {
        Self {
            goal: Some(goal),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if matches!(&self.name, Some(n) if n.trim().is_empty()) {
            return Err(ValidationError::EmptyName);
        }
        if self.age == Some(0) {
            return Err(ValidationError::NotPositive { field: "age" });
        }
        positive("weight_kg", self.weight_kg)?;
        positive("height_cm", self.height_cm)?;
        Ok(())
    }

    /// Merges into `account` and `profile`. Call [`validate`](Self::validate) first.
    pub(crate) fn apply(self, account: &mut Account, profile: &mut Profile) {
        if let Some(name) = self.name {
            account.name = name.trim().to_string();
        }
        if let Some(age) = self.age {
            profile.age = Some(age);
        }
        if let Some(w) = self.weight_kg {
            profile.weight_kg = Some(w);
        }
        if let Some(h) = self.height_cm {
            profile.height_cm = Some(h);
        }
        if let Some(level) = self.activity_level {
            profile.activity_level = Some(level);
        }
        if let Some(sex) = self.sex {
            profile.sex = sex;
        }
        if let Some(goal) = self.goal {
            profile.goal = goal;
        }
    }
}

fn positive(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(ValidationError::NotPositive { field }),
        _ => Ok(()),
    }
}
