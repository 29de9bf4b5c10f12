//
//  wikitude-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Wikitude CLI Library
//!
//! A client library for the Wikitude cloud recognition Manager API, plus the
//! command-line front end `wt` built on it.
//!
//! ## Overview
//!
//! The Manager API manages the server-side assets of Wikitude's augmented
//! reality cloud recognition: image target collections, object target
//! collections, their targets, and the archives generated from them. This
//! crate wraps every operation of that API in a typed async method and
//! handles the API's asynchronous jobs (generation, bulk creation, heatmaps)
//! by polling them to completion.
//!
//! ## Features
//!
//! - **Request Dispatcher**: path templates, auth headers, status classification
//! - **Async Poller**: bounded, cancellable polling of server-side jobs
//! - **Structured Errors**: service errors with `code`/`reason`/`message`
//!   kept apart from general HTTP failures
//! - **Secure Token Storage**: tokens live in the system keyring
//! - **Scriptable CLI**: table output for people, `--json` for scripts
//!
//! ## Module Structure
//!
//! - [`api`]: Manager API client, poller and resource operations
//! - [`auth`]: Token/version credentials and keyring storage
//! - [`config`]: Configuration file management
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Output formatting (Table, JSON)
//! - [`interactive`]: Interactive prompts
//! - [`util`]: Utility functions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use wikitude_cli::api::ManagerClient;
//! use wikitude_cli::auth::Credentials;
//!
//! # async fn example() -> Result<(), wikitude_cli::api::ApiError> {
//! let client = ManagerClient::new(Credentials::new("your-token", "3"))?;
//!
//! let tc = client.create_target_collection("posters").await?;
//! let job = client.generate_target_collection(&tc.id).await?;
//! println!("generation {}", job.status);
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// Manager API client.
///
/// The request dispatcher, the async job poller, path templates, the error
/// taxonomy and one method per API operation.
pub mod api;

/// Credentials and token storage.
///
/// Builds the `X-Token`/`X-Version` header pair and keeps tokens in the
/// system keychain.
pub mod auth;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/wt/config.toml`
/// - macOS: `~/Library/Application Support/wt/config.toml`
/// - Windows: `%APPDATA%\wt\config\config.toml`
pub mod config;

/// Output formatting for different modes.
///
/// - Table format: Human-readable tables for interactive use
/// - JSON format: Structured output for scripting and automation
pub mod output;

/// Interactive terminal prompts.
pub mod interactive;

/// Utility functions and helpers.
pub mod util;

/// Re-export of the main CLI struct for convenient access.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use wikitude_cli::Cli;
///
/// let cli = Cli::parse();
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Re-export of the API client.
pub use api::ManagerClient;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
///
/// # Value
///
/// `"wt"`
pub const APP_NAME: &str = "wt";

/// Application version constant, taken from Cargo.toml at compile time.
///
/// # Example
///
/// ```rust
/// use wikitude_cli::VERSION;
///
/// println!("wt version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `16-31`: Operation-related issues
/// - `32+`: Service and job issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication required or rejected.
    ///
    /// No token is configured, or the server answered 401/403.
    /// Run `wt auth login` to store a token.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    ///
    /// The requested collection, target or job does not exist.
    pub const NOT_FOUND: i32 = 8;

    /// Operation cancelled by user.
    ///
    /// Ctrl+C while waiting for a job, or a declined confirmation prompt.
    pub const CANCELLED: i32 = 16;

    /// The Manager API rejected the request with a structured error.
    pub const SERVICE_ERROR: i32 = 32;

    /// An asynchronous job did not finish within the configured bounds.
    ///
    /// The job may still complete on the server; check it later with the
    /// matching status command.
    pub const POLL_TIMEOUT: i32 = 64;
}
