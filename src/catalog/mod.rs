//! Food lookup and meal suggestion providers.

pub mod dto;
pub mod handlers;
pub(crate) mod images;
mod mock;

use async_trait::async_trait;
use bytes::Bytes;

use crate::nutrition::aggregate::NutritionSummary;
use crate::nutrition::goals::FitnessGoal;
use crate::nutrition::types::{FoodItem, MealRecommendation};

pub use handlers::router;
pub use mock::{MockCatalog, MockRecommender};

#[async_trait]
pub trait FoodCatalog: Send + Sync {
    /// Zero or more foods whose name matches `query`.
    async fn search(&self, query: &str) -> anyhow::Result<Vec<FoodItem>>;
    /// Zero or more foods recognised in an uploaded image.
    async fn identify(&self, image: Bytes, content_type: &str) -> anyhow::Result<Vec<FoodItem>>;
}

#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    async fn recommend(
        &self,
        goal: FitnessGoal,
        remaining: &NutritionSummary,
    ) -> anyhow::Result<Vec<MealRecommendation>>;
}
