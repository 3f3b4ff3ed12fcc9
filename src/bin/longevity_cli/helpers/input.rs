// ABOUTME: Input file helpers for longevity-cli
// ABOUTME: Reads JSON request fragments from disk with path context on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read a file to a string
///
/// # Errors
///
/// Returns an error if the file cannot be read
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Read and deserialize a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not match `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = read_text(path)?;
    serde_json::from_str(&contents).with_context(|| format!("Invalid JSON in {}", path.display()))
}
