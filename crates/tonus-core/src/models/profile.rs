// ABOUTME: User profile models built from onboarding answers
// ABOUTME: Gender, activity level, goal tags, locations, and the UserProfile record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

use crate::units;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Gender for BMR calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (higher BMR constant, higher calorie floor)
    Male,
    /// Female
    Female,
}

/// Weight unit selected during onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Kilograms
    Kg,
    /// Pounds
    Lb,
}

/// A body weight together with the unit it was entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyWeight {
    /// Numeric value as entered
    pub value: f64,
    /// Unit the value was entered in
    pub unit: WeightUnit,
}

impl BodyWeight {
    /// Create a weight in kilograms
    #[must_use]
    pub const fn kg(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Kg,
        }
    }

    /// Create a weight in pounds
    #[must_use]
    pub const fn lb(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Lb,
        }
    }

    /// Value normalized to kilograms, clamped to non-negative
    #[must_use]
    pub fn to_kg(self) -> f64 {
        let kg = match self.unit {
            WeightUnit::Kg => self.value,
            WeightUnit::Lb => units::lb_to_kg(self.value),
        };
        kg.max(0.0)
    }
}

/// Self-reported activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[default]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or a physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Parse an activity level from an onboarding answer, defaulting to
    /// moderately active for unrecognized values
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "lightly_active" | "lightly-active" => Self::LightlyActive,
            "very_active" | "very-active" => Self::VeryActive,
            "extra_active" | "extra-active" => Self::ExtraActive,
            _ => Self::ModeratelyActive,
        }
    }
}

/// Onboarding goal tags, ordered by priority in the profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GoalTag {
    /// Reduce body weight
    LoseWeight,
    /// Build muscle mass
    GainMuscle,
    /// Get stronger
    BuildStrength,
    /// Improve aerobic endurance
    ImproveEndurance,
    /// Improve mobility and flexibility
    ImproveFlexibility,
    /// Stay generally fit
    GeneralFitness,
}

impl GoalTag {
    /// Parse a goal tag from an onboarding answer, defaulting to general
    /// fitness for unrecognized values
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lose-weight" | "lose_weight" => Self::LoseWeight,
            "gain-muscle" | "gain_muscle" => Self::GainMuscle,
            "build-strength" | "build_strength" => Self::BuildStrength,
            "improve-endurance" | "improve_endurance" => Self::ImproveEndurance,
            "improve-flexibility" | "improve_flexibility" => Self::ImproveFlexibility,
            _ => Self::GeneralFitness,
        }
    }

    /// Whether this goal expresses a weight-loss intent
    #[must_use]
    pub const fn is_weight_loss(self) -> bool {
        matches!(self, Self::LoseWeight)
    }

    /// Whether this goal expresses a muscle- or strength-gain intent
    #[must_use]
    pub const fn is_muscle_gain(self) -> bool {
        matches!(self, Self::GainMuscle | Self::BuildStrength)
    }
}

/// Preferred workout location from onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutLocation {
    /// Commercial gym with full equipment
    Gym,
    /// Home training
    Home,
    /// Outdoor training
    Outdoor,
    /// Yoga or studio classes
    Yoga,
}

/// Ephemeral user profile built from onboarding answers.
///
/// Every field is optional or defaultable: the core never rejects a partial
/// profile, it degrades to the documented defaults instead. Weight and height
/// are normalized to metric before any calculation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Gender, if provided. Absent gender uses the female BMR branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Current body weight with its unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<BodyWeight>,
    /// Height in centimeters
    #[serde(default)]
    pub height_cm: f64,
    /// Age in years
    #[serde(default)]
    pub age: u32,
    /// Activity level, defaulting to moderately active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Goal tags ordered by priority (0-3 entries)
    #[serde(default)]
    pub goals: Vec<GoalTag>,
    /// Preferred workout locations
    #[serde(default)]
    pub locations: Vec<WorkoutLocation>,
    /// Days of the week reserved for workouts
    #[serde(default)]
    pub workout_days: Vec<Weekday>,
    /// Dietary preference tags (vegan, vegetarian, keto, ...)
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    /// Allergen tags (nuts, dairy, gluten, ...)
    #[serde(default)]
    pub allergens: Vec<String>,
    /// Self-assessed fitness level on a 0-5 scale
    #[serde(default)]
    pub fitness_level: u8,
    /// Desired body weight with its unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<BodyWeight>,
}

impl UserProfile {
    /// Current weight in kilograms, if a weight was entered
    #[must_use]
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight.map(BodyWeight::to_kg)
    }

    /// Target weight in kilograms, if a target was entered
    #[must_use]
    pub fn target_weight_kg(&self) -> Option<f64> {
        self.target_weight.map(BodyWeight::to_kg)
    }

    /// Highest-priority goal tag, if any goals were selected
    #[must_use]
    pub fn primary_goal(&self) -> Option<GoalTag> {
        self.goals.first().copied()
    }

    /// Second-priority goal tag, if one was selected
    #[must_use]
    pub fn secondary_goal(&self) -> Option<GoalTag> {
        self.goals.get(1).copied()
    }
}
