// ABOUTME: Seeded, reproducible total order over exercises using FNV-1a hashing
// ABOUTME: Sole source of pseudo-randomness in the engine; never consults entropy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic ordering
//!
//! Each exercise is keyed by `fnv1a("<seed_key>:<id>")`, ties broken by display
//! name and then id. The same seed key over the same items always yields the
//! same order; distinct seed keys almost always differ.

use longevity_core::models::ExerciseDefinition;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a hash of a string's UTF-8 bytes
#[must_use]
pub fn hash_str(value: &str) -> u32 {
    value.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Order exercises reproducibly for the given seed key
pub fn deterministic_order<'a, I>(items: I, seed_key: &str) -> Vec<&'a ExerciseDefinition>
where
    I: IntoIterator<Item = &'a ExerciseDefinition>,
{
    let mut keyed: Vec<(u32, &'a ExerciseDefinition)> = items
        .into_iter()
        .map(|exercise| (hash_str(&format!("{seed_key}:{}", exercise.id)), exercise))
        .collect();

    keyed.sort_by(|(hash_a, a), (hash_b, b)| {
        hash_a
            .cmp(hash_b)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });

    keyed.into_iter().map(|(_, exercise)| exercise).collect()
}
