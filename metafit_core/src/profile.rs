//! User profile and calorie-target math.
//!
//! The daily calorie target comes from the revised Harris-Benedict
//! basal metabolic rate scaled by an activity multiplier.

use serde::{Deserialize, Serialize};

/// Biological sex as used by the BMR formula
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// Day-to-day activity level outside of the program
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// TDEE-style multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Primary training goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
    Strength,
    Endurance,
}

/// Dietary preference
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    Vegetarian,
    NonVegetarian,
    Vegan,
}

/// Everything the questionnaire collects about the user
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: ActivityLevel,
    pub diet: DietType,
    pub goal: Goal,
}

impl UserProfile {
    /// Basal metabolic rate (kcal/day), revised Harris-Benedict.
    ///
    /// The female coefficients are also used for Sex::Other, matching
    /// the two-branch formula this system has always shipped with.
    pub fn bmr(&self) -> f64 {
        match self.sex {
            Sex::Male => {
                88.362 + 13.397 * self.weight_kg + 4.799 * self.height_cm
                    - 5.677 * f64::from(self.age)
            }
            Sex::Female | Sex::Other => {
                447.593 + 9.247 * self.weight_kg + 3.098 * self.height_cm
                    - 4.330 * f64::from(self.age)
            }
        }
    }

    /// Daily calorie target: BMR scaled by the activity multiplier,
    /// rounded to the nearest whole calorie
    pub fn daily_calories(&self) -> u32 {
        (self.bmr() * self.activity.multiplier()).round() as u32
    }
}
