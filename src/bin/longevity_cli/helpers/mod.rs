// ABOUTME: Helper modules for longevity-cli
// ABOUTME: Input file reading and text or JSON rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod input;
