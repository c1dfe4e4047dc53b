// ABOUTME: Domain models for the Tonus recommendation core
// ABOUTME: Re-exports profile, catalog, target, and meal-plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

//! Domain models shared across the recommendation core.

/// User profile types built from onboarding answers
pub mod profile;

/// Read-only catalog records (workout plans and meals)
pub mod catalog;

/// Computed daily energy and macronutrient targets
pub mod targets;

/// Assembled daily meal plans and scoring pairs
pub mod plan;

pub use catalog::{
    Equipment, ExperienceTier, MealNutrition, MealRecord, MealType, WorkoutGoal, WorkoutPlanRecord,
};
pub use plan::{DailyMealPlan, ScoredCandidate};
pub use profile::{ActivityLevel, BodyWeight, Gender, GoalTag, UserProfile, WeightUnit, WorkoutLocation};
pub use targets::{CalorieScenarios, MacroSplit, TargetSet};
