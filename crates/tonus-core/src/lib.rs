// ABOUTME: Core types for the Tonus recommendation and target-calculation core
// ABOUTME: Foundation crate with domain models, error types, units, and storage traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

#![deny(unsafe_code)]

//! # Tonus Core
//!
//! Foundation crate for the Tonus fitness app's recommendation core. Holds the
//! domain models shared by the target calculator and the catalog matchers,
//! plus the thin boundary pieces (catalog loading, storage traits) that
//! connect the pure computation core to its collaborators.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Domain records (`UserProfile`, `TargetSet`, catalog records, meal plans)
//! - **units**: Metric/imperial conversion helpers for body measurements
//! - **catalog**: Deserialization of the bundled workout and meal catalogs
//! - **storage**: Async persistence seam for computed targets and selections

/// Unified error handling with standard error codes
pub mod errors;

/// Domain models for profiles, targets, catalogs, and assembled plans
pub mod models;

/// Metric/imperial conversion helpers for weight and height
pub mod units;

/// Catalog deserialization for the bundled workout and meal data
pub mod catalog;

/// Async persistence seam for computed recommendations
pub mod storage;
