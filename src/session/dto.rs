use serde::{Deserialize, Serialize};

use super::profile::{Account, Profile};
use super::Session;
use crate::nutrition::goals::{FitnessGoal, NutritionGoal};

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub goal: FitnessGoal,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Account, profile and the targets derived from them.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub account: Account,
    pub profile: Profile,
    pub tdee: u32,
    pub targets: NutritionGoal,
}

impl From<&Session> for ProfileView {
    fn from(s: &Session) -> Self {
        Self {
            account: s.account().clone(),
            profile: s.profile().clone(),
            tdee: s.profile().tdee(),
            targets: s.goal(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GoalView {
    pub goal: FitnessGoal,
    pub tdee: u32,
    pub targets: NutritionGoal,
}
