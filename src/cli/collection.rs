//
//  wikitude-cli
//  cli/collection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Image target collection commands.
//!
//! This module provides:
//! - Listing, creating, viewing, renaming and deleting collections
//! - Generating the cloud archive of a collection

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{build_client, get_writer, run_job, write_job, GlobalOptions};
use crate::api::{ApiError, TargetCollection};
use crate::interactive::confirm_deletion;
use crate::output::{print_field, print_header, TableOutput, TableRow};
use crate::util::{format_optional_timestamp, truncate};

/// Manage image target collections
#[derive(Args, Debug)]
pub struct CollectionCommand {
    #[command(subcommand)]
    pub command: CollectionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CollectionSubcommand {
    /// List target collections
    #[command(visible_alias = "ls")]
    List,

    /// Create an empty target collection
    Create(CreateArgs),

    /// View a target collection
    View(IdArgs),

    /// Rename a target collection
    Rename(RenameArgs),

    /// Delete a target collection and all its targets
    Delete(DeleteArgs),

    /// Generate the cloud archive used for recognition
    Generate(IdArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Collection name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Target collection ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Target collection ID
    pub id: String,

    /// New name
    pub name: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Target collection ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl TableRow for TargetCollection {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Created", "Modified"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            truncate(&self.name, 40),
            format_optional_timestamp(self.created_at),
            format_optional_timestamp(self.modified_at),
        ]
    }
}

impl TableOutput for TargetCollection {
    fn print_table(&self, color: bool) {
        print_header(&self.name);
        println!();
        print_field("ID", &self.id, color);
        print_field("Created", &format_optional_timestamp(self.created_at), color);
        print_field("Modified", &format_optional_timestamp(self.modified_at), color);
        for (key, value) in &self.extra {
            print_field(key, &value.to_string(), color);
        }
    }
}

impl CollectionCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            CollectionSubcommand::List => self.list(global).await,
            CollectionSubcommand::Create(args) => self.create(args, global).await,
            CollectionSubcommand::View(args) => self.view(args, global).await,
            CollectionSubcommand::Rename(args) => self.rename(args, global).await,
            CollectionSubcommand::Delete(args) => self.delete(args, global).await,
            CollectionSubcommand::Generate(args) => self.generate(args, global).await,
        }
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let client = build_client(global)?;
        let collections = client.get_all_target_collections().await?;
        get_writer(global).write_list(&collections)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let client = build_client(global)?;
        let output = get_writer(global);

        let collection = client.create_target_collection(&args.name).await?;
        output.write_success(&format!("Created target collection {}", collection.id));
        output.write(&collection)
    }

    async fn view(&self, args: &IdArgs, global: &GlobalOptions) -> Result<()> {
        let client = build_client(global)?;
        let collection = client.get_target_collection(&args.id).await?;
        get_writer(global).write(&collection)
    }

    async fn rename(&self, args: &RenameArgs, global: &GlobalOptions) -> Result<()> {
        let client = build_client(global)?;
        let output = get_writer(global);

        let collection = client.rename_target_collection(&args.id, &args.name).await?;
        output.write_success(&format!("Renamed {} to {}", collection.id, collection.name));
        output.write(&collection)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        if !confirm_deletion("target collection", &args.id, args.yes)? {
            return Err(ApiError::Cancelled.into());
        }

        let client = build_client(global)?;
        client.delete_target_collection(&args.id).await?;

        let output = get_writer(global);
        if global.json {
            println!("{}", serde_json::json!({ "deleted": args.id }));
        }
        output.write_success(&format!("Deleted target collection {}", args.id));
        Ok(())
    }

    async fn generate(&self, args: &IdArgs, global: &GlobalOptions) -> Result<()> {
        let client = build_client(global)?;
        let tc_id = args.id.clone();

        let job = run_job(client, "Generating cloud archive", global, move |client| async move {
            client.generate_target_collection(&tc_id).await
        })
        .await?;

        write_job(&get_writer(global), "Cloud archive generated", job)
    }
}
