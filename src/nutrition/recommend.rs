//! Picks meal suggestions that fit the calories left for the day.

use crate::nutrition::types::{FoodItem, MealRecommendation};

/// Most suggestions returned for one request.
pub const MAX_SUGGESTIONS: usize = 3;
const LOWER_BAND: f64 = 0.5;
const UPPER_BAND: f64 = 1.1;

/// Anything with a per-serving calorie count.
pub trait Candidate {
    fn calories(&self) -> f64;
}

impl Candidate for MealRecommendation {
    fn calories(&self) -> f64 {
        self.calories
    }
}

impl Candidate for FoodItem {
    fn calories(&self) -> f64 {
        self.calories
    }
}

/// Candidates whose calories fall in `[remaining * 0.5, remaining * 1.1]`,
/// in catalog order, at most [`MAX_SUGGESTIONS`].
///
/// A non-positive `remaining_calories` yields nothing; that is the normal
/// "goal reached" state, not a failure.
pub fn filter_candidates<T: Candidate>(
    candidates: &[T],
    remaining_calories: f64,
) -> impl Iterator<Item = &T> {
    let (low, high) = (remaining_calories * LOWER_BAND, remaining_calories * UPPER_BAND);
    let take = if remaining_calories > 0.0 { MAX_SUGGESTIONS } else { 0 };
    candidates
        .iter()
        .filter(move |c| {
            let kcal = c.calories();
            low <= kcal && kcal <= high
        })
        .take(take)
}
