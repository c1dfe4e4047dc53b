// ABOUTME: Workout plan catalog matching
// ABOUTME: Profile derivation plus additive multi-criterion plan scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

//! Workout Plan Matcher
//!
//! Scores every plan in the bundled catalog against a profile derived from
//! onboarding answers and returns the top-ranked plan. Scoring is additive
//! over four independent criteria (experience tier, goals, equipment, weekly
//! frequency); there is no early exit and no minimum-score threshold. The
//! first catalog entry with the maximum score wins, so catalog order breaks
//! ties.

use crate::config::matching::WorkoutMatcherConfig;
use crate::goals;
use tonus_core::models::{
    Equipment, ExperienceTier, UserProfile, WorkoutGoal, WorkoutLocation, WorkoutPlanRecord,
};
use tracing::debug;

/// The matcher-facing view of a user, derived from onboarding answers.
///
/// Exposed so the plan picker UI can show why a plan was suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedWorkoutProfile {
    /// Experience tier from the 0-5 fitness level
    pub experience: ExperienceTier,
    /// Primary goal mapped through the shared vocabulary
    pub primary_goal: WorkoutGoal,
    /// Secondary goal, when a second tag was selected
    pub secondary_goal: Option<WorkoutGoal>,
    /// Equipment access implied by the preferred locations
    pub equipment: Equipment,
    /// Desired training days per week
    pub weekly_frequency: u8,
}

impl DerivedWorkoutProfile {
    /// Derive the matcher view from a profile.
    ///
    /// Returns `None` when no goals were selected; the matcher has nothing
    /// to rank against without a goal.
    #[must_use]
    pub fn from_profile(profile: &UserProfile, config: &WorkoutMatcherConfig) -> Option<Self> {
        let primary_goal = goals::workout_goal(profile.primary_goal()?);
        let secondary_goal = profile.secondary_goal().map(goals::workout_goal);

        let equipment = if profile.locations.contains(&WorkoutLocation::Gym) {
            Equipment::Gym
        } else if profile.locations.contains(&WorkoutLocation::Home)
            || profile.locations.contains(&WorkoutLocation::Yoga)
        {
            Equipment::None
        } else if profile.locations.contains(&WorkoutLocation::Outdoor) {
            Equipment::Minimal
        } else {
            Equipment::None
        };

        let weekly_frequency = if profile.workout_days.is_empty() {
            config.default_weekly_frequency
        } else {
            profile.workout_days.len().min(7) as u8
        };

        Some(Self {
            experience: ExperienceTier::from_fitness_level(profile.fitness_level),
            primary_goal,
            secondary_goal,
            equipment,
            weekly_frequency,
        })
    }
}

/// Score a single catalog plan against the derived profile
#[must_use]
pub fn score_plan(
    plan: &WorkoutPlanRecord,
    derived: &DerivedWorkoutProfile,
    config: &WorkoutMatcherConfig,
) -> u32 {
    let mut score = 0;

    if plan.experience == derived.experience {
        score += config.experience_exact;
    } else if plan.experience.is_adjacent(derived.experience) {
        score += config.experience_adjacent;
    }

    if plan.goal == derived.primary_goal {
        score += config.goal_primary;
    }
    if derived.secondary_goal == Some(plan.goal) {
        score += config.goal_secondary;
    }

    if plan.equipment == derived.equipment {
        score += config.equipment_exact;
    } else if derived.equipment == Equipment::None && plan.equipment == Equipment::Minimal {
        score += config.equipment_none_minimal;
    } else if derived.equipment == Equipment::Gym && plan.equipment == Equipment::Dumbbells {
        score += config.equipment_gym_dumbbells;
    }

    let frequency_diff = plan.days_per_week.abs_diff(derived.weekly_frequency) as usize;
    if let Some(points) = config.frequency_closeness.get(frequency_diff) {
        score += points;
    }

    score
}

/// Select the best-fitting workout plan from the catalog.
///
/// Returns `None` only when the profile has no goals or the catalog is
/// empty; otherwise the top-scoring entry is returned even when its score is
/// low.
#[must_use]
pub fn select_workout_plan<'a>(
    profile: &UserProfile,
    catalog: &'a [WorkoutPlanRecord],
    config: &WorkoutMatcherConfig,
) -> Option<&'a WorkoutPlanRecord> {
    let derived = DerivedWorkoutProfile::from_profile(profile, config)?;

    let mut best: Option<(&WorkoutPlanRecord, u32)> = None;
    for plan in catalog {
        let score = score_plan(plan, &derived, config);
        // Strict comparison keeps the first entry on ties
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((plan, score));
        }
    }

    best.map(|(plan, score)| {
        debug!(plan_id = %plan.id, score, "selected workout plan");
        plan
    })
}
