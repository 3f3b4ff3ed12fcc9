// ABOUTME: Core types and constants for the Longevity training planner
// ABOUTME: Foundation crate with domain models, error handling, and engine constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Longevity Core
//!
//! Foundation crate providing shared types and constants for the Longevity
//! training planner. The planning engine and the caller-side service layer both
//! depend on it, so it is kept free of algorithms and I/O.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the engine-facing `PlanningError`
//! - **constants**: engine version tags, domain ranges, and advisory note text
//! - **models**: exercises, readiness, progression, sessions, and weekly plans

/// Unified error handling with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Core data models exchanged with the planning engine
pub mod models;
