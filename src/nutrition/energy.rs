//! Energy expenditure estimates (Mifflin-St Jeor BMR scaled by activity).

use serde::{Deserialize, Serialize};

/// Biological sex used by the BMR equation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

/// Self-reported activity level.
///
/// Deserializing an unknown label yields `Sedentary`, the same level the
/// multiplier table falls back to.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Sedentary,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

/// Basal metabolic rate in kcal/day.
pub fn bmr(age: u32, weight_kg: f64, height_cm: f64, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Total daily energy expenditure, rounded to whole kcal.
///
/// Inputs are expected to be validated by the caller; a BMR that goes
/// negative for nonsensical inputs saturates at 0.
pub fn compute_tdee(
    age: u32,
    weight_kg: f64,
    height_cm: f64,
    activity: ActivityLevel,
    sex: Sex,
) -> u32 {
    let tdee = (bmr(age, weight_kg, height_cm, sex) * activity.multiplier()).round();
    tdee.max(0.0) as u32
}

#[cfg(test)]
mod energy_tests {
    use super::*;

    #[test]
    fn male_moderate_reference_value() {
        // (800 + 1125 - 150 + 5) * 1.55
        assert_eq!(bmr(30, 80.0, 180.0, Sex::Male), 1780.0);
        assert_eq!(compute_tdee(30, 80.0, 180.0, ActivityLevel::Moderate, Sex::Male), 2759);
    }

    #[test]
    fn female_offset_is_166_below_male() {
        let male = bmr(40, 60.0, 165.0, Sex::Male);
        let female = bmr(40, 60.0, 165.0, Sex::Female);
        assert_eq!(male - female, 166.0);
        assert_eq!(compute_tdee(40, 60.0, 165.0, ActivityLevel::Sedentary, Sex::Female), 1524);
    }

    #[test]
    fn multiplier_table() {
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::Light.multiplier(), 1.375);
        assert_eq!(ActivityLevel::Moderate.multiplier(), 1.55);
        assert_eq!(ActivityLevel::Active.multiplier(), 1.725);
        assert_eq!(ActivityLevel::VeryActive.multiplier(), 1.9);
    }

    #[test]
    fn unknown_activity_label_falls_back_to_sedentary() {
        assert_eq!(ActivityLevel::parse("couch_potato"), ActivityLevel::Sedentary);
        let level: ActivityLevel = serde_json::from_str("\"marathoner\"").unwrap();
        assert_eq!(level, ActivityLevel::Sedentary);
        let level: ActivityLevel = serde_json::from_str("\"very_active\"").unwrap();
        assert_eq!(level, ActivityLevel::VeryActive);
        assert_eq!(serde_json::to_string(&ActivityLevel::VeryActive).unwrap(), "\"very_active\"");
    }

    #[test]
    fn monotonic_in_weight_height_and_age() {
        for level in [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ] {
            let mut prev = 0;
            for weight in (40..=140).step_by(5) {
                let t = compute_tdee(35, f64::from(weight), 175.0, level, Sex::Male);
                assert!(t > prev, "weight {weight} did not increase tdee");
                prev = t;
            }

            let mut prev = 0;
            for height in (140..=210).step_by(5) {
                let t = compute_tdee(35, 75.0, f64::from(height), level, Sex::Female);
                assert!(t > prev, "height {height} did not increase tdee");
                prev = t;
            }

            let mut prev = u32::MAX;
            for age in (18..=90).step_by(3) {
                let t = compute_tdee(age, 75.0, 175.0, level, Sex::Male);
                assert!(t < prev, "age {age} did not decrease tdee");
                prev = t;
            }
        }
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let a = compute_tdee(28, 64.5, 171.2, ActivityLevel::Active, Sex::Female);
        let b = compute_tdee(28, 64.5, 171.2, ActivityLevel::Active, Sex::Female);
        assert_eq!(a, b);
    }
}
