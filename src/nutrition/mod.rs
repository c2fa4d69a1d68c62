//! Goal derivation and intake aggregation. Everything in here is synchronous
//! and free of I/O; callers pass in already-resolved data.

pub mod aggregate;
pub mod energy;
pub mod goals;
pub mod ledger;
pub mod recommend;
pub mod types;

pub use aggregate::{remaining, summarize, DailyStats, NutritionSummary};
pub use energy::{compute_tdee, ActivityLevel, Sex};
pub use goals::{derive_goal, FitnessGoal, NutritionGoal};
pub use ledger::{Ledger, MealEntry, MealType};
pub use recommend::{filter_candidates, Candidate};
pub use types::{FoodItem, MealRecommendation};
