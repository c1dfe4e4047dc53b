// ABOUTME: Physiological constants used by the target calculator
// ABOUTME: Energy conversion factors, hydration factor, and calorie floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

//! Physiological constants based on nutrition science references.
//!
//! These values are fixed physiology rather than product tuning, which is
//! why they live here instead of in [`crate::config`]. The configuration
//! defaults reference them.

/// Energy conversion factors for macronutrients
///
/// References:
/// - Atwater general factor system, as adopted by FAO (2003),
///   "Food energy: methods of analysis and conversion factors"
pub mod energy {
    /// Energy per gram of protein (kcal/g)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

    /// Energy per gram of carbohydrate (kcal/g)
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

    /// Energy per gram of fat (kcal/g)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Daily fluid intake guidance
///
/// Reference: EFSA Panel on Dietetic Products (2010), "Scientific Opinion on
/// Dietary Reference Values for water", simplified to a per-kilogram factor
/// as commonly used in consumer nutrition apps
pub mod hydration {
    /// Water target per kilogram of body weight (ml/kg)
    pub const WATER_ML_PER_KG: f64 = 35.0;
}

/// Minimum daily calorie intake safety floors
///
/// Reference: conventional clinical guidance for the lowest sustainable
/// unsupervised intake, e.g. Academy of Nutrition and Dietetics guidance on
/// very-low-calorie diets
pub mod calorie_floors {
    /// Floor for male-identified users (kcal/day)
    pub const MIN_DAILY_KCAL_MALE: u32 = 1500;

    /// Floor for all other users (kcal/day)
    pub const MIN_DAILY_KCAL_DEFAULT: u32 = 1200;
}
