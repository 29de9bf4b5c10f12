//
//  wikitude-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to the Wikitude cloud recognition Manager API at
//! `https://api.wikitude.com/cloudrecognition/...`.
//!
//! ## Architecture
//!
//! - [`client`]: the request dispatcher ([`ManagerClient`]) with path
//!   substitution, auth headers and status classification
//! - [`poller`]: the poll loop for operations the server runs as jobs
//! - [`path`]: path templates and placeholder substitution
//! - [`response`]: successful responses and the JSON-body presence rule
//! - [`error`]: the [`ApiError`] taxonomy
//! - [`targets`], [`objects`], [`projects`], [`heatmap`]: one method per
//!   Manager API operation, implemented on [`ManagerClient`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wikitude_cli::api::{ManagerClient, PollOptions};
//! use wikitude_cli::auth::Credentials;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), wikitude_cli::api::ApiError> {
//! let client = ManagerClient::new(Credentials::new("your-token", "3"))?
//!     .with_poll_options(PollOptions::default().with_max_attempts(60));
//!
//! for tc in client.get_all_target_collections().await? {
//!     println!("{} {}", tc.id, tc.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Non-success responses become [`ApiError::Service`] when the server sent a
//! JSON error body and [`ApiError::General`] otherwise. Nothing is retried.

/// Request dispatcher.
pub mod client;

/// Error taxonomy shared by all operations.
pub mod error;

/// Image target collections and targets.
pub mod targets;

/// Object target collections, object targets and WTO generation.
pub mod objects;

/// Projects.
pub mod projects;

/// Heatmap generation.
pub mod heatmap;

/// Path templates.
pub mod path;

/// Async job polling.
pub mod poller;

/// Successful response wrapper.
pub mod response;

pub use client::{ManagerClient, DEFAULT_ENDPOINT};
pub use error::{ApiError, ServiceErrorCode};
pub use objects::{NewObjectTarget, ObjectTarget, ObjectTargetCollection};
pub use poller::{CancelHandle, CancellableWait, JobStatus, PollOptions, TokioWait, Wait};
pub use projects::Project;
pub use response::ApiResponse;
pub use targets::{NewTarget, Target, TargetCollection, TargetUpdate};
