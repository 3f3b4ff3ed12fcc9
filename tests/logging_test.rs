// ABOUTME: Integration tests for installing the global tracing subscriber
// ABOUTME: Runs in its own binary so the one-shot global install is not shared with other suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use longevity_planner::logging::{LogFormat, LoggingConfig};
use tracing::info;

#[test]
fn test_pretty_format_installs_once() {
    let config = LoggingConfig {
        level: "debug".into(),
        format: LogFormat::Pretty,
        include_location: true,
        include_spans: true,
        ..LoggingConfig::default()
    };
    config.init().unwrap();
    info!(format = "pretty", "Subscriber installed");

    let second = LoggingConfig {
        format: LogFormat::Json,
        ..LoggingConfig::default()
    };
    assert!(second.init().is_err());
}
