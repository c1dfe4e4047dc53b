// ABOUTME: Recommendation and target-calculation engine for the Tonus platform
// ABOUTME: BMR/TDEE targets, workout plan matching, meal scoring and assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

#![deny(unsafe_code)]

//! # Tonus Intelligence
//!
//! The algorithmic core of the Tonus fitness app: given an onboarding
//! profile, it computes personalized daily energy and macronutrient targets,
//! and selects the best-fitting workout plan and daily meal plan from the
//! bundled catalogs using weighted, multi-criterion scoring.
//!
//! Everything here is a synchronous, pure function over in-memory values.
//! Catalogs and configuration are injected as parameters; there is no hidden
//! state, no I/O, and concurrent invocations with different profiles are
//! independent.
//!
//! ## Modules
//!
//! - **config**: Tunable weights, thresholds, and ratios with validated defaults
//! - **physiological_constants**: Literature-backed constants (energy factors, floors)
//! - **goals**: The shared goal vocabulary mapping onboarding tags to domain tags
//! - **targets**: BMR, TDEE, calorie scenarios, and macro targets
//! - **workout_matcher**: Catalog scoring and selection of workout plans
//! - **meal_scorer**: Per-meal multi-criterion scoring with allergen disqualification
//! - **meal_planner**: Calorie budget split and full-day meal plan assembly

/// Tunable configuration with validated defaults
pub mod config;

/// Shared goal vocabulary used by the matcher and the meal scorer
pub mod goals;

/// Meal plan assembly from per-slot budgets
pub mod meal_planner;

/// Individual meal scoring
pub mod meal_scorer;

/// Literature-backed physiological constants
pub mod physiological_constants;

/// Daily energy and macronutrient target calculation
pub mod targets;

/// Workout plan catalog matching
pub mod workout_matcher;

pub use config::IntelligenceConfig;
pub use meal_planner::{select_daily_meal_plan, split_calorie_budget, MealBudgets};
pub use meal_scorer::{is_disqualified, score_meal};
pub use targets::calculate_targets;
pub use workout_matcher::{select_workout_plan, DerivedWorkoutProfile};
