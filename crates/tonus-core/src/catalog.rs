// ABOUTME: Deserialization glue for the bundled workout and meal catalogs
// ABOUTME: Parses catalog JSON into typed records with AppError reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

//! Catalog loading.
//!
//! The raw catalogs ship with the app as bundled JSON documents. This module
//! is the thin boundary that turns them into typed, read-only record vectors
//! for the matchers. A malformed document is the data collaborator's bug and
//! surfaces as a single `AppError`; individual records are not repaired.

use crate::errors::AppResult;
use crate::models::{MealRecord, WorkoutPlanRecord};
use tracing::debug;

/// Parse the bundled workout plan catalog from JSON.
///
/// # Errors
///
/// Returns a serialization error when the document is not a JSON array of
/// workout plan records.
pub fn workout_plans_from_json(json: &str) -> AppResult<Vec<WorkoutPlanRecord>> {
    let plans: Vec<WorkoutPlanRecord> = serde_json::from_str(json)?;
    debug!(count = plans.len(), "loaded workout plan catalog");
    Ok(plans)
}

/// Parse the bundled meal catalog from JSON.
///
/// # Errors
///
/// Returns a serialization error when the document is not a JSON array of
/// meal records.
pub fn meals_from_json(json: &str) -> AppResult<Vec<MealRecord>> {
    let meals: Vec<MealRecord> = serde_json::from_str(json)?;
    debug!(count = meals.len(), "loaded meal catalog");
    Ok(meals)
}
