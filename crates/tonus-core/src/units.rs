// ABOUTME: Metric/imperial conversion helpers for body measurements
// ABOUTME: Weight (kg/lb) and height (cm/in) conversions used during onboarding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

//! Unit conversion helpers.
//!
//! Onboarding captures weight and height in whichever unit the user prefers;
//! every calculation downstream runs on metric values. These helpers are the
//! single place the conversion factors live.

/// Pounds per kilogram (international avoirdupois pound)
pub const LB_PER_KG: f64 = 2.204_62;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Convert pounds to kilograms
#[must_use]
pub fn lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}

/// Convert kilograms to pounds
#[must_use]
pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

/// Convert inches to centimeters
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Convert centimeters to inches
#[must_use]
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}
