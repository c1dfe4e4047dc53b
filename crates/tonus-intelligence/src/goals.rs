// ABOUTME: Shared goal vocabulary for the matcher and the meal scorer
// ABOUTME: Maps onboarding goal tags to workout-plan goals and meal goal tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

//! The goal vocabulary.
//!
//! Onboarding goal tags, workout plan goals, and meal goal tags are three
//! different vocabularies. Both mapping tables live here so the workout
//! matcher and the meal scorer can never drift apart.

use tonus_core::models::{GoalTag, WorkoutGoal};

/// Map an onboarding goal tag to the workout plan goal vocabulary.
///
/// Tags without a dedicated plan goal fall back to general fitness.
#[must_use]
pub const fn workout_goal(tag: GoalTag) -> WorkoutGoal {
    match tag {
        GoalTag::LoseWeight => WorkoutGoal::FatLoss,
        GoalTag::GainMuscle => WorkoutGoal::MuscleBuilding,
        GoalTag::BuildStrength => WorkoutGoal::Strength,
        GoalTag::ImproveEndurance => WorkoutGoal::Endurance,
        GoalTag::ImproveFlexibility => WorkoutGoal::Flexibility,
        GoalTag::GeneralFitness => WorkoutGoal::GeneralFitness,
    }
}

/// Map an onboarding goal tag to the meal goal tags it aligns with.
///
/// Catalog meals carry free-form goal tags; a meal supports a user goal when
/// its tags intersect the returned set.
#[must_use]
pub const fn meal_goal_tags(tag: GoalTag) -> &'static [&'static str] {
    match tag {
        GoalTag::LoseWeight => &["weight_loss", "fat_loss", "cutting"],
        GoalTag::GainMuscle => &["muscle_gain", "muscle_building", "bulking"],
        GoalTag::BuildStrength => &["strength", "muscle_gain", "performance"],
        GoalTag::ImproveEndurance => &["endurance", "energy", "performance"],
        GoalTag::ImproveFlexibility => &["recovery", "general_health"],
        GoalTag::GeneralFitness => &["general_health", "balanced", "maintenance"],
    }
}
