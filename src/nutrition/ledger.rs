//! One user's food log for a single calendar day.

use serde::{Deserialize, Serialize};
use time::Date;
use tracing::debug;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::nutrition::types::FoodItem;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Display order on the dashboard.
    pub const ORDER: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];
}

/// A logged food. The `food` snapshot is taken at logging time so later
/// catalog changes never alter what was eaten.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_id: String,
    pub food: FoodItem,
    pub date: Date,
    pub meal_type: MealType,
    pub servings: f64,
}

/// Append-only list of entries for `date`. Entries are never edited in
/// place; a correction is a remove followed by an add.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    user_id: Uuid,
    date: Date,
    entries: Vec<MealEntry>,
}

impl Ledger {
    pub fn new(user_id: Uuid, date: Date) -> Self {
        Self {
            user_id,
            date,
            entries: Vec::new(),
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn date(&self) -> Date {
        self.date
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[MealEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add_meal(
        &mut self,
        food: FoodItem,
        meal_type: MealType,
        servings: f64,
    ) -> Result<MealEntry, ValidationError> {
        if !servings.is_finite() || servings <= 0.0 {
            return Err(ValidationError::InvalidServings(servings));
        }

        let entry = MealEntry {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            food_id: food.id.clone(),
            food,
            date: self.date,
            meal_type,
            servings,
        };
        debug!(meal_id = %entry.id, food_id = %entry.food_id, ?meal_type, servings, "meal added");
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Removes the entry with `meal_id`. An unknown id is not an error.
    pub fn remove_meal(&mut self, meal_id: Uuid) -> Option<MealEntry> {
        let pos = self.entries.iter().position(|e| e.id == meal_id)?;
        let removed = self.entries.remove(pos);
        debug!(%meal_id, "meal removed");
        Some(removed)
    }
}
