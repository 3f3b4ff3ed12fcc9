// ABOUTME: Exercise swap commands
// ABOUTME: Lists like-for-like candidates and applies a swap to a stored session snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CommandContext;
use crate::helpers::{display, input};
use anyhow::Result;
use clap::Subcommand;
use longevity_planner::constants::defaults;
use longevity_planner::services::{apply_exercise_swap, parse_session_snapshot, swap_candidates};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum SwapCommand {
    /// List exercises that can replace one in a session
    Candidates {
        /// Exercise to replace
        #[arg(long)]
        exercise: String,

        /// Maximum candidates
        #[arg(long, default_value_t = defaults::SWAP_CANDIDATE_LIMIT)]
        limit: usize,
    },

    /// Replace an exercise in a stored session snapshot
    Apply {
        /// JSON session snapshot
        #[arg(long)]
        session: PathBuf,

        /// Exercise currently in the session
        #[arg(long)]
        from: String,

        /// Replacement exercise
        #[arg(long)]
        to: String,
    },
}

/// Run a swap subcommand
///
/// # Errors
///
/// Returns an error if an exercise is unknown, the swap is not like-for-like,
/// or the snapshot is invalid
pub fn run(context: &CommandContext, action: &SwapCommand) -> Result<()> {
    match action {
        SwapCommand::Candidates { exercise, limit } => {
            let candidates = swap_candidates(&context.catalog, exercise, *limit)?;
            display::emit(
                context.config.output,
                candidates.as_slice(),
                display::render_candidates,
            )
        }
        SwapCommand::Apply { session, from, to } => {
            let snapshot = parse_session_snapshot(&input::read_text(session)?)?;
            let updated = apply_exercise_swap(&snapshot, &context.catalog, from, to)?;
            display::emit(context.config.output, &updated, display::render_session)
        }
    }
}
