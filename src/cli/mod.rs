//
//  wikitude-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod auth;
mod collection;
mod target;
mod object;
mod project;
mod heatmap;
mod config;
mod completion;

pub use auth::AuthCommand;
pub use collection::CollectionCommand;
pub use target::TargetCommand;
pub use object::ObjectCommand;
pub use project::ProjectCommand;
pub use heatmap::HeatmapCommand;
pub use config::ConfigCommand;
pub use completion::CompletionCommand;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;

use crate::api::{ApiError, CancellableWait, JobStatus, ManagerClient, PollOptions};
use crate::auth::{validate_api_version, Credentials, KeyringStore};
use crate::config::{endpoint_host, Config};
use crate::exit_codes;
use crate::output::{format_status, print_field, print_header, OutputFormat, OutputWriter};
use crate::util::format_duration;

/// Wikitude CLI - Manage cloud recognition assets from the command line
#[derive(Parser, Debug)]
#[command(
    name = "wt",
    version,
    about = "Manage Wikitude cloud recognition assets from the command line",
    long_about = "wt is a CLI for the Wikitude cloud recognition Manager API.\n\n\
                  It manages target collections, object targets, and the archives \
                  generated from them.",
    propagate_version = true,
    after_help = "Use 'wt <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Manager API endpoint (default: https://api.wikitude.com)
    #[arg(long, global = true, env = "WT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// API token (overrides the stored token)
    #[arg(long, global = true, env = "WT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Manager API version sent in the X-Version header
    #[arg(long, global = true, env = "WT_API_VERSION")]
    pub api_version: Option<String>,

    /// Delay between job status checks, in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub poll_interval: Option<u64>,

    /// Give up on a job after this many status checks
    #[arg(long, global = true, value_name = "N")]
    pub max_poll_attempts: Option<u32>,

    /// Give up on a job after this many seconds (0 waits forever)
    #[arg(long, global = true, value_name = "SECS")]
    pub poll_timeout: Option<u64>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the stored API token
    #[command(visible_alias = "login")]
    Auth(AuthCommand),

    /// Manage image target collections
    #[command(visible_alias = "tc")]
    Collection(CollectionCommand),

    /// Manage image targets
    Target(TargetCommand),

    /// Manage object target collections and object targets
    #[command(visible_alias = "obj")]
    Object(ObjectCommand),

    /// List projects
    #[command(visible_alias = "proj")]
    Project(ProjectCommand),

    /// Generate a recognition heatmap for an image
    Heatmap(HeatmapCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

/// No token was passed and none is stored for the endpoint.
#[derive(Error, Debug)]
#[error("Not authenticated with {host}. Run 'wt auth login' or pass --token")]
pub struct NotAuthenticated {
    pub host: String,
}

/// Maps a command failure to the process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<NotAuthenticated>().is_some() {
        return exit_codes::AUTH_ERROR;
    }

    let Some(api) = err.downcast_ref::<ApiError>() else {
        return exit_codes::ERROR;
    };

    match api {
        ApiError::Cancelled => exit_codes::CANCELLED,
        e if e.is_poll_exhausted() => exit_codes::POLL_TIMEOUT,
        e if e.is_server_error() => match e.status_code() {
            Some(401) | Some(403) => exit_codes::AUTH_ERROR,
            Some(404) => exit_codes::NOT_FOUND,
            _ => exit_codes::SERVICE_ERROR,
        },
        _ => exit_codes::ERROR,
    }
}

/// Resolved endpoint and API version for the current invocation.
///
/// Flags and `WT_*` variables win over the config file.
pub(crate) struct ResolvedEndpoint {
    pub endpoint: String,
    pub api_version: String,
}

pub(crate) fn resolve_endpoint(global: &GlobalOptions, config: &Config) -> Result<ResolvedEndpoint> {
    let endpoint = global
        .endpoint
        .clone()
        .unwrap_or_else(|| config.core.endpoint.clone());
    let api_version = global
        .api_version
        .clone()
        .unwrap_or_else(|| config.core.api_version.clone());

    if !validate_api_version(&api_version) {
        bail!("Invalid API version '{}'. Expected a number such as 3", api_version);
    }

    Ok(ResolvedEndpoint {
        endpoint,
        api_version,
    })
}

/// Builds a client from config, flags and the stored token.
pub(crate) fn build_client(global: &GlobalOptions) -> Result<ManagerClient> {
    let config = Config::load()?;
    let target = resolve_endpoint(global, &config)?;
    let host = endpoint_host(&target.endpoint);

    let token = match &global.token {
        Some(token) => token.clone(),
        None => KeyringStore::new()
            .get(&host)?
            .ok_or(NotAuthenticated { host: host.clone() })?,
    };
    tracing::debug!("using endpoint {} (API version {})", target.endpoint, target.api_version);

    let poll = poll_options(global, &config)?;

    let client = ManagerClient::new(Credentials::new(token, target.api_version))?
        .with_endpoint(&target.endpoint)?
        .with_poll_options(poll);
    Ok(client)
}

/// Poll bounds from the config file with the `--poll-*` flags applied.
fn poll_options(global: &GlobalOptions, config: &Config) -> Result<PollOptions> {
    let mut poll = config.poll_options();
    if let Some(ms) = global.poll_interval {
        if ms == 0 {
            bail!("--poll-interval must be greater than zero");
        }
        poll = poll.with_interval(Duration::from_millis(ms));
    }
    if let Some(attempts) = global.max_poll_attempts {
        if attempts == 0 {
            bail!("--max-poll-attempts must be at least 1");
        }
        poll = poll.with_max_attempts(attempts);
    }
    match global.poll_timeout {
        Some(0) => poll = poll.without_timeout(),
        Some(secs) => poll = poll.with_timeout(Duration::from_secs(secs)),
        None => {}
    }
    Ok(poll)
}

pub(crate) fn get_writer(global: &GlobalOptions) -> OutputWriter {
    OutputWriter::new(OutputFormat::from_json_flag(global.json))
}

/// Runs an asynchronous job with a spinner, aborting the wait on Ctrl+C.
pub(crate) async fn run_job<F, Fut>(
    client: ManagerClient,
    message: &str,
    global: &GlobalOptions,
    job: F,
) -> Result<JobStatus>
where
    F: FnOnce(ManagerClient) -> Fut,
    Fut: Future<Output = Result<JobStatus, ApiError>>,
{
    let (waiter, handle) = CancellableWait::new();
    let client = client.with_waiter(Arc::new(waiter));

    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupt received, cancelling job wait");
            handle.cancel();
        }
    });

    let spinner = start_spinner(message, global)?;
    let started = std::time::Instant::now();
    let result = job(client).await;
    interrupt.abort();
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    tracing::info!("{} finished after {}", message, format_duration(started.elapsed()));

    Ok(result?)
}

fn start_spinner(message: &str, global: &GlobalOptions) -> Result<Option<ProgressBar>> {
    if global.json || !console::Term::stderr().is_term() {
        return Ok(None);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    Ok(Some(pb))
}

/// Writes the final status of a job.
pub(crate) fn write_job(writer: &OutputWriter, title: &str, job: JobStatus) -> Result<()> {
    if writer.is_json() {
        return writer.write_value(&job.into_value());
    }

    let color = writer.color_enabled();
    print_header(title);
    println!();
    print_field("Status", &format_status(&job.status, color), color);
    for (key, value) in &job.extra {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        print_field(key, &text, color);
    }
    Ok(())
}
