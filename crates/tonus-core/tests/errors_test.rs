// ABOUTME: Tests for the unified error type
// ABOUTME: Covers constructor codes, display formatting, and source chaining
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tonus Fitness
//! Unified error type tests

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::error::Error;
use tonus_core::errors::{AppError, ErrorCode};

#[test]
fn constructors_set_the_matching_code() {
    assert_eq!(AppError::invalid_input("bad").code, ErrorCode::InvalidInput);
    assert_eq!(AppError::not_found("meal catalog").code, ErrorCode::ResourceNotFound);
    assert_eq!(AppError::config("bad weights").code, ErrorCode::ConfigError);
    assert_eq!(AppError::storage("write failed").code, ErrorCode::StorageError);
    assert_eq!(AppError::internal("bug").code, ErrorCode::InternalError);
}

#[test]
fn display_prefixes_the_category() {
    let err = AppError::invalid_input("weight must be non-negative");
    assert_eq!(err.to_string(), "Invalid input: weight must be non-negative");

    let err = AppError::not_found("workout plan wp-404");
    assert_eq!(err.to_string(), "Resource not found: workout plan wp-404 not found");
}

#[test]
fn json_errors_convert_with_source() {
    let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
    let err = AppError::from(json_err);
    assert_eq!(err.code, ErrorCode::SerializationError);
    assert!(err.source().is_some());
}
