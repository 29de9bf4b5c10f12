//
//  wikitude-cli
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Small helpers shared by the CLI commands.
//!
//! ## Categories
//!
//! - **Time Utilities**: [`format_timestamp_millis`], [`format_duration`]
//! - **String Utilities**: [`truncate`]
//! - **Input Utilities**: [`read_json_input`]
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use wikitude_cli::util::{format_duration, truncate};
//!
//! assert_eq!(format_duration(Duration::from_secs(75)), "1m 15s");
//! assert_eq!(truncate("a long collection name", 10), "a long ...");
//! ```

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::de::DeserializeOwned;

/// Formats a millisecond epoch timestamp, as used by the Manager API, in
/// local time.
///
/// Returns `"Unknown"` for values outside chrono's range.
pub fn format_timestamp_millis(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => {
            let local: DateTime<Local> = dt.into();
            local.format("%Y-%m-%d %H:%M:%S").to_string()
        }
        None => "Unknown".to_string(),
    }
}

/// Like [`format_timestamp_millis`] but accepts a missing value.
pub fn format_optional_timestamp(millis: Option<i64>) -> String {
    millis
        .map(format_timestamp_millis)
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}

/// Shortens `s` to at most `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Reads and parses JSON from a file, or from stdin when `source` is `-`.
pub fn read_json_input<T: DeserializeOwned>(source: &str) -> Result<T> {
    let content = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read JSON from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(Path::new(source))
            .with_context(|| format!("Failed to read {}", source))?
    };

    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", source))
}
