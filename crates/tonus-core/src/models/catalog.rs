// ABOUTME: Read-only catalog records for workout plans and meals
// ABOUTME: WorkoutPlanRecord, MealRecord, and their tag enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

use serde::{Deserialize, Serialize};

/// Experience tier a workout plan is written for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceTier {
    /// New to structured training
    Beginner,
    /// Consistent training for a year or more
    Intermediate,
    /// Several years of structured training
    Advanced,
}

impl ExperienceTier {
    /// Derive the tier from the 0-5 onboarding fitness level
    #[must_use]
    pub const fn from_fitness_level(level: u8) -> Self {
        match level {
            0 | 1 => Self::Beginner,
            2 | 3 => Self::Intermediate,
            _ => Self::Advanced,
        }
    }

    /// Whether two tiers are one step apart (beginner/intermediate or
    /// intermediate/advanced)
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Beginner, Self::Intermediate)
                | (Self::Intermediate, Self::Beginner | Self::Advanced)
                | (Self::Advanced, Self::Intermediate)
        )
    }
}

/// Equipment a workout plan requires
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    /// Bodyweight only
    None,
    /// Bands, a mat, whatever fits a backpack
    Minimal,
    /// A pair of dumbbells
    Dumbbells,
    /// Full gym access
    Gym,
}

impl Equipment {
    /// Parse an equipment tag, defaulting to bodyweight for unrecognized
    /// values
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "minimal" => Self::Minimal,
            "dumbbells" => Self::Dumbbells,
            "gym" => Self::Gym,
            _ => Self::None,
        }
    }
}

/// Primary training goal a workout plan targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutGoal {
    /// Body-fat reduction
    FatLoss,
    /// Hypertrophy
    MuscleBuilding,
    /// Maximal strength
    Strength,
    /// Aerobic endurance
    Endurance,
    /// Mobility and flexibility
    Flexibility,
    /// General fitness
    GeneralFitness,
}

impl WorkoutGoal {
    /// Parse a plan goal tag, defaulting to general fitness for unrecognized
    /// values
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "fat_loss" => Self::FatLoss,
            "muscle_building" => Self::MuscleBuilding,
            "strength" => Self::Strength,
            "endurance" => Self::Endurance,
            "flexibility" => Self::Flexibility,
            _ => Self::GeneralFitness,
        }
    }
}

/// A workout plan from the bundled catalog. Static data, never mutated by
/// the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlanRecord {
    /// Stable catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Primary goal the plan targets
    pub goal: WorkoutGoal,
    /// Experience tier the plan is written for
    pub experience: ExperienceTier,
    /// Equipment the plan requires
    pub equipment: Equipment,
    /// Scheduled training days per week
    pub days_per_week: u8,
    /// Short description shown in the plan picker
    #[serde(default)]
    pub description: String,
}

/// Type of meal a catalog entry belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse a meal type from a catalog tag
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// Nutrition facts for a catalog meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealNutrition {
    /// Energy content in kcal
    pub calories: f64,
    /// Protein in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
}

/// A meal from the bundled catalog. Static data, never mutated by the core.
///
/// Dietary tags, allergens, and goal tags are free-form lowercase strings;
/// the catalog vocabulary is open-ended and compared case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecord {
    /// Display name
    pub name: String,
    /// Which slot of the day this meal belongs to
    pub meal_type: MealType,
    /// Nutrition facts
    pub nutrition: MealNutrition,
    /// Dietary tags (vegan, vegetarian, keto, ...)
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    /// Allergens present in the meal (nuts, dairy, gluten, ...)
    #[serde(default)]
    pub allergens: Vec<String>,
    /// Goal tags the meal supports (weight_loss, muscle_gain, ...)
    #[serde(default)]
    pub goals: Vec<String>,
}
