// ABOUTME: Configuration validation error types
// ABOUTME: ConfigError enum reported by the validate() methods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness

use thiserror::Error;

/// Errors reported by configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric value was outside its valid range
    #[error("configuration value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// A set of related weights or fractions was inconsistent
    #[error("invalid configuration weights: {0}")]
    InvalidWeights(&'static str),
}
