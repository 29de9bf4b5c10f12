//
//  wikitude-cli
//  cli/object.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Object target commands.
//!
//! Object targets are reconstructed from images or video of a physical
//! object. Their collections are compiled into WTO files instead of cloud
//! archives, so the command tree has three groups:
//! - `collection`: object target collections and their jobs
//! - `target`: object targets and their creation jobs
//! - `wto`: WTO file generation

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use super::{build_client, get_writer, run_job, write_job, GlobalOptions};
use crate::api::{ApiError, NewObjectTarget, ObjectTarget, ObjectTargetCollection};
use crate::interactive::confirm_deletion;
use crate::output::{print_field, print_header, TableOutput, TableRow};
use crate::util::{format_optional_timestamp, read_json_input, truncate};

/// Manage object target collections and object targets
#[derive(Args, Debug)]
pub struct ObjectCommand {
    #[command(subcommand)]
    pub command: ObjectSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ObjectSubcommand {
    /// Manage object target collections
    #[command(subcommand)]
    Collection(CollectionSubcommand),

    /// Manage object targets
    #[command(subcommand)]
    Target(TargetSubcommand),

    /// Generate WTO files
    #[command(subcommand)]
    Wto(WtoSubcommand),
}

#[derive(Subcommand, Debug)]
pub enum CollectionSubcommand {
    /// List object target collections
    #[command(visible_alias = "ls")]
    List,

    /// Create an object target collection
    Create(CollectionFields),

    /// View an object target collection
    View(IdArgs),

    /// Replace the name and metadata of a collection
    Update(UpdateArgs),

    /// Delete an object target collection
    Delete(DeleteArgs),

    /// List the generation jobs of a collection
    Jobs(IdArgs),
}

#[derive(Subcommand, Debug)]
pub enum TargetSubcommand {
    /// List the object targets of a collection
    #[command(visible_alias = "ls")]
    List(IdArgs),

    /// View an object target
    View(TargetArgs),

    /// Delete an object target
    Delete(DeleteTargetArgs),

    /// Create object targets from a JSON array (file or '-' for stdin)
    Create(CreateTargetsArgs),

    /// Show an object target creation job
    Generation(GenerationArgs),
}

#[derive(Subcommand, Debug)]
pub enum WtoSubcommand {
    /// Compile a collection into a WTO file and wait for it
    Generate(WtoArgs),

    /// Show a WTO generation job
    Status(GenerationArgs),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Object target collection ID
    pub collection: String,
}

#[derive(Args, Debug)]
pub struct CollectionFields {
    /// Collection name
    pub name: String,

    /// Arbitrary JSON metadata
    #[arg(long, short = 'm', value_parser = parse_json)]
    pub metadata: Option<Value>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Object target collection ID
    pub collection: String,

    #[command(flatten)]
    pub fields: CollectionFields,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Object target collection ID
    pub collection: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Object target collection ID
    pub collection: String,

    /// Object target ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct DeleteTargetArgs {
    /// Object target collection ID
    pub collection: String,

    /// Object target ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct CreateTargetsArgs {
    /// Object target collection ID
    pub collection: String,

    /// JSON file with an array of object targets, or '-' for stdin
    pub file: String,
}

#[derive(Args, Debug)]
pub struct GenerationArgs {
    /// Object target collection ID
    pub collection: String,

    /// Generation job ID
    pub generation: String,
}

#[derive(Args, Debug)]
pub struct WtoArgs {
    /// Object target collection ID
    pub collection: String,

    /// SDK version the file is generated for, e.g. 9.0
    #[arg(long)]
    pub sdk_version: String,

    /// Address notified when the file is ready
    #[arg(long)]
    pub email: String,
}

fn parse_json(s: &str) -> Result<Value, String> {
    serde_json::from_str(s).map_err(|e| format!("invalid JSON: {}", e))
}

impl TableRow for ObjectTargetCollection {
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

impl TableOutput for ObjectTargetCollection {
    fn print_table(&self, color: bool) {
        print_header(&self.name);
        println!();
        print_field("ID", &self.id, color);
        print_field("Created", &format_optional_timestamp(self.created_at), color);
        print_field("Modified", &format_optional_timestamp(self.modified_at), color);
        if let Some(metadata) = &self.metadata {
            print_field("Metadata", &metadata.to_string(), color);
        }
    }
}

impl TableRow for ObjectTarget {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Metadata"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        let metadata = self
            .metadata
            .as_ref()
            .map(|m| truncate(&m.to_string(), 40))
            .unwrap_or_else(|| "-".to_string());
        vec![self.id.clone(), truncate(&self.name, 30), metadata]
    }
}

impl TableOutput for ObjectTarget {
    fn print_table(&self, color: bool) {
        print_header(&self.name);
        println!();
        print_field("ID", &self.id, color);
        if let Some(metadata) = &self.metadata {
            print_field("Metadata", &metadata.to_string(), color);
        }
        for (key, value) in &self.extra {
            print_field(key, &value.to_string(), color);
        }
    }
}

impl ObjectCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ObjectSubcommand::Collection(cmd) => run_collection(cmd, global).await,
            ObjectSubcommand::Target(cmd) => run_target(cmd, global).await,
            ObjectSubcommand::Wto(cmd) => run_wto(cmd, global).await,
        }
    }
}

async fn run_collection(cmd: &CollectionSubcommand, global: &GlobalOptions) -> Result<()> {
    let output = get_writer(global);

    match cmd {
        CollectionSubcommand::List => {
            let client = build_client(global)?;
            let collections = client.get_all_object_target_collections().await?;
            output.write_list(&collections)
        }
        CollectionSubcommand::Create(args) => {
            let client = build_client(global)?;
            let collection = client
                .create_object_target_collection(&args.name, args.metadata.clone())
                .await?;
            output.write_success(&format!("Created object target collection {}", collection.id));
            output.write(&collection)
        }
        CollectionSubcommand::View(args) => {
            let client = build_client(global)?;
            let collection = client.get_object_target_collection(&args.collection).await?;
            output.write(&collection)
        }
        CollectionSubcommand::Update(args) => {
            let client = build_client(global)?;
            let collection = client
                .update_object_target_collection(
                    &args.collection,
                    &args.fields.name,
                    args.fields.metadata.clone(),
                )
                .await?;
            output.write_success(&format!("Updated object target collection {}", collection.id));
            output.write(&collection)
        }
        CollectionSubcommand::Delete(args) => {
            if !confirm_deletion("object target collection", &args.collection, args.yes)? {
                return Err(ApiError::Cancelled.into());
            }
            let client = build_client(global)?;
            client.delete_object_target_collection(&args.collection).await?;
            if global.json {
                println!("{}", serde_json::json!({ "deleted": args.collection }));
            }
            output.write_success(&format!("Deleted object target collection {}", args.collection));
            Ok(())
        }
        CollectionSubcommand::Jobs(args) => {
            let client = build_client(global)?;
            let jobs = client
                .get_object_target_collection_jobs(&args.collection)
                .await?;
            output.write_value(&Value::Array(jobs))
        }
    }
}

async fn run_target(cmd: &TargetSubcommand, global: &GlobalOptions) -> Result<()> {
    let output = get_writer(global);

    match cmd {
        TargetSubcommand::List(args) => {
            let client = build_client(global)?;
            let targets = client.get_all_object_targets(&args.collection).await?;
            output.write_list(&targets)
        }
        TargetSubcommand::View(args) => {
            let client = build_client(global)?;
            let target = client.get_object_target(&args.collection, &args.id).await?;
            output.write(&target)
        }
        TargetSubcommand::Delete(args) => {
            if !confirm_deletion("object target", &args.id, args.yes)? {
                return Err(ApiError::Cancelled.into());
            }
            let client = build_client(global)?;
            client.delete_object_target(&args.collection, &args.id).await?;
            if global.json {
                println!("{}", serde_json::json!({ "deleted": args.id }));
            }
            output.write_success(&format!("Deleted object target {}", args.id));
            Ok(())
        }
        TargetSubcommand::Create(args) => {
            let targets: Vec<NewObjectTarget> = read_json_input(&args.file)?;
            if targets.is_empty() {
                bail!("{} contains no object targets", args.file);
            }

            let client = build_client(global)?;
            let tc_id = args.collection.clone();
            let message = format!("Creating {} object targets", targets.len());
            let job = run_job(client, &message, global, move |client| async move {
                client.create_object_targets(&tc_id, &targets).await
            })
            .await?;
            write_job(&output, "Object targets created", job)
        }
        TargetSubcommand::Generation(args) => {
            let client = build_client(global)?;
            let info = client
                .get_object_target_generation_information(&args.collection, &args.generation)
                .await?;
            output.write_value(&info)
        }
    }
}

async fn run_wto(cmd: &WtoSubcommand, global: &GlobalOptions) -> Result<()> {
    let output = get_writer(global);

    match cmd {
        WtoSubcommand::Generate(args) => {
            let client = build_client(global)?;
            let tc_id = args.collection.clone();
            let sdk_version = args.sdk_version.clone();
            let email = args.email.clone();
            let job = run_job(client, "Generating WTO file", global, move |client| async move {
                client.generate_wto(&tc_id, &sdk_version, &email).await
            })
            .await?;
            write_job(&output, "WTO file generated", job)
        }
        WtoSubcommand::Status(args) => {
            let client = build_client(global)?;
            let status = client
                .get_wto_generation_status(&args.collection, &args.generation)
                .await?;
            output.write_value(&status)
        }
    }
}
