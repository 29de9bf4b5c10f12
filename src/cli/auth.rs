//
//  wikitude-cli
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands.
//!
//! Manager API tokens are created in the Wikitude studio and stored here in
//! the system keyring, one per endpoint host.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::{ApiError, ManagerClient};
use crate::auth::{mask_token, read_token_from_stdin, validate_token, Credentials, KeyringStore};
use crate::config::{endpoint_host, Config};
use crate::interactive::{is_interactive, prompt_confirm_with_default, prompt_password};

use super::{get_writer, resolve_endpoint, GlobalOptions, NotAuthenticated};

/// Manage the stored API token.
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Store an API token for the endpoint
    Login(LoginArgs),

    /// Remove the stored token for the endpoint
    Logout,

    /// View authentication status
    Status(StatusArgs),

    /// Print the stored token
    Token,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Read token from standard input
    #[arg(long)]
    pub with_token: bool,

    /// Store the token without checking it against the API
    #[arg(long)]
    pub skip_verify: bool,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Show the authentication token (masked)
    #[arg(long, short = 't')]
    pub show_token: bool,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global).await,
            AuthSubcommand::Logout => logout(global),
            AuthSubcommand::Status(args) => status(args, global).await,
            AuthSubcommand::Token => token(global),
        }
    }
}

/// Stores a token after an optional round trip to the API.
async fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let target = resolve_endpoint(global, &config)?;
    let host = endpoint_host(&target.endpoint);
    let keyring = KeyringStore::new();
    let output = get_writer(global);

    let replacing = !args.with_token && global.token.is_none() && is_interactive();
    if replacing && keyring.get(&host)?.is_some() {
        output.write_info(&format!("A token is already stored for {}", host));
        if !prompt_confirm_with_default("Replace it?", false)? {
            return Ok(());
        }
    }

    let token = if args.with_token {
        read_token_from_stdin()?
    } else if let Some(token) = &global.token {
        token.clone()
    } else if is_interactive() {
        println!("Create a token under Account > API tokens in the Wikitude studio.");
        prompt_password("API token")?
    } else {
        bail!("No token given. Pipe one in with --with-token");
    };

    if !validate_token(&token) {
        bail!("Invalid token format");
    }

    if args.skip_verify {
        output.write_warning("Storing token without validating it");
    } else {
        output.write_info("Validating token...");
        let client = ManagerClient::new(Credentials::new(token.clone(), target.api_version))?
            .with_endpoint(&target.endpoint)?;
        if let Err(e) = client.get_all_projects().await {
            return Err(match e.status_code() {
                Some(401) | Some(403) => anyhow::Error::from(e).context("Token was rejected"),
                _ => anyhow::Error::from(e).context("Could not validate token"),
            });
        }
    }

    keyring.store(&host, &token)?;
    output.write_success(&format!("Logged in to {}", host));
    Ok(())
}

fn logout(global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let host = endpoint_host(&resolve_endpoint(global, &config)?.endpoint);
    let keyring = KeyringStore::new();

    if keyring.get(&host)?.is_none() {
        bail!("Not logged in to {}", host);
    }

    keyring.delete(&host)?;
    get_writer(global).write_success(&format!("Logged out of {}", host));
    Ok(())
}

async fn status(args: &StatusArgs, global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let target = resolve_endpoint(global, &config)?;
    let host = endpoint_host(&target.endpoint);
    let stored = KeyringStore::new().get(&host)?;
    let token = global.token.clone().or(stored);

    let state = match &token {
        Some(t) => {
            let client = ManagerClient::new(Credentials::new(t.clone(), target.api_version.clone()))?
                .with_endpoint(&target.endpoint)?;
            match client.get_all_projects().await {
                Ok(_) => "Active".to_string(),
                Err(e @ (ApiError::Service { .. } | ApiError::General { .. })) => {
                    format!("Rejected {}", e)
                }
                Err(e) => format!("Unreachable ({})", e),
            }
        }
        None => "Not logged in".to_string(),
    };

    if global.json {
        let result = serde_json::json!({
            "endpoint": target.endpoint,
            "host": host,
            "apiVersion": target.api_version,
            "status": state,
            "token": if args.show_token { token.as_deref().map(mask_token) } else { None },
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", host);
    println!("  Endpoint: {}", target.endpoint);
    println!("  API Version: {}", target.api_version);
    println!("  Status: {}", state);
    if args.show_token {
        if let Some(t) = &token {
            println!("  Token: {}", mask_token(t));
        }
    }
    if token.is_none() {
        println!();
        println!("Run 'wt auth login' to authenticate");
    }

    Ok(())
}

fn token(global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let host = endpoint_host(&resolve_endpoint(global, &config)?.endpoint);

    let token = KeyringStore::new()
        .get(&host)?
        .ok_or(NotAuthenticated { host })?;
    println!("{}", token);
    Ok(())
}
