use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use super::{FoodCatalog, RecommendationProvider};
use crate::nutrition::aggregate::NutritionSummary;
use crate::nutrition::goals::FitnessGoal;
use crate::nutrition::recommend::filter_candidates;
use crate::nutrition::types::{FoodItem, MealRecommendation};

const IMAGE_MATCHES: usize = 3;

/// Built-in food list standing in for a nutrition database.
pub struct MockCatalog {
    foods: Vec<FoodItem>,
}

impl MockCatalog {
    pub fn new(foods: Vec<FoodItem>) -> Self {
        Self { foods }
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new(default_foods())
    }
}

#[async_trait]
impl FoodCatalog for MockCatalog {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<FoodItem>> {
        let needle = query.trim().to_lowercase();
        let hits: Vec<FoodItem> = self
            .foods
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        debug!(query = %needle, hits = hits.len(), "catalog search");
        Ok(hits)
    }

    async fn identify(&self, image: Bytes, content_type: &str) -> anyhow::Result<Vec<FoodItem>> {
        debug!(bytes = image.len(), content_type, "catalog identify");
        Ok(self.foods.iter().take(IMAGE_MATCHES).cloned().collect())
    }
}

/// Suggests meals from a fixed list using the calorie band filter.
pub struct MockRecommender {
    meals: Vec<MealRecommendation>,
}

impl MockRecommender {
    pub fn new(meals: Vec<MealRecommendation>) -> Self {
        Self { meals }
    }
}

impl Default for MockRecommender {
    fn default() -> Self {
        Self::new(default_recommendations())
    }
}

#[async_trait]
impl RecommendationProvider for MockRecommender {
    async fn recommend(
        &self,
        goal: FitnessGoal,
        remaining: &NutritionSummary,
    ) -> anyhow::Result<Vec<MealRecommendation>> {
        let picked: Vec<MealRecommendation> = filter_candidates(&self.meals, remaining.calories)
            .cloned()
            .collect();
        debug!(%goal, remaining_calories = remaining.calories, picked = picked.len(), "recommendations");
        Ok(picked)
    }
}

#[allow(clippy::too_many_arguments)]
fn food(id: &str, name: &str, kcal: f64, protein: f64, carbs: f64, fat: f64, serving: &str, image: &str) -> FoodItem {
    FoodItem {
        id: id.into(),
        name: name.into(),
        calories: kcal,
        protein,
        carbs,
        fat,
        serving_size: serving.into(),
        image_url: Some(format!("https://images.unsplash.com/{}", image)),
        micronutrients: None,
    }
}

fn default_foods() -> Vec<FoodItem> {
    vec![
        food("1", "Grilled Chicken Breast", 165.0, 31.0, 0.0, 3.6, "100g", "photo-1604503468506-a8da13d82791"),
        food("2", "Brown Rice", 216.0, 5.0, 45.0, 1.8, "1 cup (195g)", "photo-1536304993881-ff6e9eefa2a6"),
        food("3", "Salmon Fillet", 208.0, 20.0, 0.0, 13.0, "100g", "photo-1519708227418-c8fd9a32b7a2"),
        food("4", "Avocado", 160.0, 2.0, 9.0, 15.0, "1/2 fruit", "photo-1519162808019-7de1683fa2ad"),
        food("5", "Greek Yogurt", 100.0, 18.0, 6.0, 0.0, "1 container (170g)", "photo-1488477181946-6428a0291777"),
        food("6", "Banana", 105.0, 1.3, 27.0, 0.4, "1 medium (118g)", "photo-1528825871115-3581a5387919"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn meal(id: &str, name: &str, kcal: f64, protein: f64, carbs: f64, fat: f64, image: &str, recipe: &str) -> MealRecommendation {
    MealRecommendation {
        id: id.into(),
        name: name.into(),
        calories: kcal,
        protein,
        carbs,
        fat,
        image_url: Some(format!("https://images.unsplash.com/{}", image)),
        recipe: Some(recipe.into()),
    }
}

fn default_recommendations() -> Vec<MealRecommendation> {
    vec![
        meal("1", "Chicken & Rice Bowl", 450.0, 35.0, 50.0, 10.0, "photo-1512058564366-18510be2db19",
             "Grilled chicken breast, brown rice, broccoli, and a tablespoon of olive oil"),
        meal("2", "Protein Smoothie", 300.0, 30.0, 30.0, 5.0, "photo-1553530666-ba11a90bb0b1",
             "Blend 1 scoop protein powder, 1 banana, 1 cup milk, and ice"),
        meal("3", "Salmon Salad", 380.0, 28.0, 15.0, 22.0, "photo-1546069901-5ec6a79120b0",
             "Grilled salmon on a bed of mixed greens with olive oil dressing"),
        meal("4", "Vegetarian Stir Fry", 320.0, 15.0, 45.0, 12.0, "photo-1512621776951-a57141f2eefd",
             "Tofu, mixed vegetables, and brown rice with soy sauce"),
        meal("5", "Oatmeal with Fruit", 290.0, 10.0, 50.0, 5.0, "photo-1517673400267-0251440c45dc",
             "1 cup oats cooked with milk, topped with berries and honey"),
    ]
}
