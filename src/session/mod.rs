//! The logged-in user's working state: one account, one profile and the
//! ledger for the active day. Created at login, dropped at logout.

pub mod dto;
pub mod handlers;
pub mod profile;
pub(crate) mod services;

use serde::Serialize;
use time::Date;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::nutrition::aggregate::{
    self, calorie_percentage, daily_stats, group_by_meal_type, macro_calories, DailyStats,
    MacroCalories, MealGroup, NutritionSummary,
};
use crate::nutrition::goals::NutritionGoal;
use crate::nutrition::ledger::{Ledger, MealEntry, MealType};
use crate::nutrition::types::FoodItem;
use profile::{Account, Profile, ProfileUpdate};

pub use handlers::router;

#[derive(Debug, Clone)]
pub struct Session {
    account: Account,
    profile: Profile,
    ledger: Ledger,
}

/// Everything the dashboard shows, derived in one pass.
#[derive(Debug, Serialize)]
pub struct Dashboard<'a> {
    pub stats: DailyStats,
    pub remaining: NutritionSummary,
    pub calorie_percentage: u8,
    pub macro_calories: MacroCalories,
    pub meals: Vec<MealGroup<'a>>,
}

impl Session {
    pub fn new(account: Account, profile: Profile, ledger: Ledger) -> Self {
        debug_assert_eq!(account.id, ledger.user_id());
        info!(user_id = %account.id, date = %ledger.date(), entries = ledger.len(), "session started");
        Self {
            account,
            profile,
            ledger,
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.account.id
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Derived from the current profile on every call.
    pub fn goal(&self) -> NutritionGoal {
        self.profile.nutrition_goal()
    }

    /// Validates and merges `update`, then returns the goal derived from the
    /// merged profile. Nothing changes when validation fails.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<NutritionGoal, ValidationError> {
        update.validate()?;
        update.apply(&mut self.account, &mut self.profile);
        let goal = self.goal();
        info!(
            user_id = %self.account.id,
            tdee = self.profile.tdee(),
            goal = %self.profile.goal,
            calories = goal.calories,
            "profile updated"
        );
        Ok(goal)
    }

    /// `food` is `None` when the user confirmed without picking anything.
    pub fn add_meal(
        &mut self,
        food: Option<FoodItem>,
        meal_type: MealType,
        servings: f64,
    ) -> Result<MealEntry, ValidationError> {
        let food = food.ok_or(ValidationError::MissingSelection)?;
        self.ledger.add_meal(food, meal_type, servings)
    }

    pub fn remove_meal(&mut self, meal_id: Uuid) -> Option<MealEntry> {
        self.ledger.remove_meal(meal_id)
    }

    pub fn summary(&self) -> NutritionSummary {
        aggregate::summarize(self.ledger.entries())
    }

    pub fn remaining(&self) -> NutritionSummary {
        aggregate::remaining(&self.goal(), &self.summary())
    }

    pub fn daily_stats(&self) -> DailyStats {
        daily_stats(self.ledger.date(), &self.goal(), &self.summary())
    }

    pub fn dashboard(&self) -> Dashboard<'_> {
        let goal = self.goal();
        let summary = self.summary();
        Dashboard {
            stats: daily_stats(self.ledger.date(), &goal, &summary),
            remaining: aggregate::remaining(&goal, &summary),
            calorie_percentage: calorie_percentage(&summary, &goal),
            macro_calories: macro_calories(&summary),
            meals: group_by_meal_type(self.ledger.entries()),
        }
    }

    /// Whether the active ledger belongs to a day other than `today`.
    pub fn is_stale(&self, today: Date) -> bool {
        self.ledger.date() != today
    }

    /// Swaps in the ledger for a new day and returns the previous one.
    pub fn start_day(&mut self, ledger: Ledger) -> Ledger {
        debug!(user_id = %self.account.id, from = %self.ledger.date(), to = %ledger.date(), "day rolled over");
        std::mem::replace(&mut self.ledger, ledger)
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;
    use crate::nutrition::energy::ActivityLevel;
    use crate::nutrition::goals::FitnessGoal;
    use time::macros::date;

    fn session() -> Session {
        let id = Uuid::new_v4();
        Session::new(
            Account {
                id,
                name: "Jane".into(),
                email: "jane@example.com".into(),
            },
            Profile::new(FitnessGoal::MuscleGain),
            Ledger::new(id, date!(2025 - 06 - 01)),
        )
    }

    fn chicken() -> FoodItem {
        FoodItem {
            id: "1".into(),
            name: "Grilled Chicken Breast".into(),
            calories: 165.0,
            protein: 31.0,
            carbs: 0.0,
            fat: 3.6,
            serving_size: "100g".into(),
            image_url: None,
            micronutrients: None,
        }
    }

    #[test]
    fn missing_selection_is_a_validation_error() {
        let mut s = session();
        let err = s.add_meal(None, MealType::Lunch, 1.0).unwrap_err();
        assert_eq!(err, ValidationError::MissingSelection);
        assert!(s.ledger().is_empty());
    }

    #[test]
    fn summary_tracks_ledger_changes() {
        let mut s = session();
        assert_eq!(s.remaining().calories, 2000.0);

        let entry = s.add_meal(Some(chicken()), MealType::Dinner, 2.0).unwrap();
        assert_eq!(s.summary().calories, 330.0);
        assert_eq!(s.remaining().calories, 1670.0);
        assert_eq!(s.remaining().protein, 150.0 - 62.0);

        s.remove_meal(entry.id);
        assert_eq!(s.summary(), NutritionSummary::default());
    }

    #[test]
    fn goal_change_alone_rederives_macros() {
        let mut s = session();
        s.update_profile(ProfileUpdate {
            age: Some(30),
            weight_kg: Some(80.0),
            height_cm: Some(180.0),
            activity_level: Some(ActivityLevel::Moderate),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(s.goal().carbs, 345.0);

        let goal = s.update_profile(ProfileUpdate::goal(FitnessGoal::WeightLoss)).unwrap();
        assert_eq!(goal.calories, 2759.0);
        assert_eq!(goal.protein, 160.0);
        assert_eq!(goal.carbs, 276.0);
        assert_eq!(goal, s.goal());
    }

    #[test]
    fn rejected_update_leaves_profile_untouched() {
        let mut s = session();
        let before = s.profile().clone();
        let err = s
            .update_profile(ProfileUpdate {
                goal: Some(FitnessGoal::WeightLoss),
                weight_kg: Some(0.0),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, ValidationError::NotPositive { field: "weight_kg" });
        assert_eq!(s.profile(), &before);
    }

    #[test]
    fn dashboard_groups_and_caps() {
        let mut s = session();
        s.add_meal(Some(chicken()), MealType::Lunch, 20.0).unwrap();
        let d = s.dashboard();
        assert_eq!(d.calorie_percentage, 100);
        assert_eq!(d.remaining.calories, 0.0);
        assert_eq!(d.meals[1].entries.len(), 1);
        assert_eq!(d.stats.date, date!(2025 - 06 - 01));
    }

    #[test]
    fn start_day_swaps_ledgers() {
        let mut s = session();
        s.add_meal(Some(chicken()), MealType::Lunch, 1.0).unwrap();
        assert!(s.is_stale(date!(2025 - 06 - 02)));

        let old = s.start_day(Ledger::new(s.user_id(), date!(2025 - 06 - 02)));
        assert_eq!(old.len(), 1);
        assert!(s.ledger().is_empty());
        assert!(!s.is_stale(date!(2025 - 06 - 02)));
        assert_eq!(s.daily_stats().calories_consumed, 0.0);
    }
}
