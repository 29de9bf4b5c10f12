//
//  wikitude-cli
//  cli/target.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Image target commands.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use super::{build_client, get_writer, run_job, write_job, GlobalOptions};
use crate::api::{ApiError, NewTarget, Target, TargetUpdate};
use crate::interactive::confirm_deletion;
use crate::output::{format_rating, print_field, print_header, TableOutput, TableRow};
use crate::util::{read_json_input, truncate};

/// Manage image targets
#[derive(Args, Debug)]
pub struct TargetCommand {
    #[command(subcommand)]
    pub command: TargetSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TargetSubcommand {
    /// List the targets of a collection
    #[command(visible_alias = "ls")]
    List(CollectionArgs),

    /// Add a single target
    Add(AddArgs),

    /// View a target
    View(TargetArgs),

    /// Change some fields of a target
    Update(UpdateArgs),

    /// Delete a target
    Delete(DeleteArgs),

    /// Add many targets from a JSON array (file or '-' for stdin)
    #[command(name = "bulk-add")]
    BulkAdd(BulkAddArgs),
}

#[derive(Args, Debug)]
pub struct CollectionArgs {
    /// Target collection ID
    pub collection: String,
}

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Target collection ID
    pub collection: String,

    /// Target ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Target collection ID
    pub collection: String,

    #[command(flatten)]
    pub fields: TargetFields,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Target collection ID
    pub collection: String,

    /// Target ID
    pub id: String,

    /// New target name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// New URL of the target image
    #[arg(long, short = 'i')]
    pub image_url: Option<String>,

    /// New JSON metadata
    #[arg(long, short = 'm', value_parser = parse_json)]
    pub metadata: Option<Value>,

    /// New height of the printed image in millimetres
    #[arg(long)]
    pub physical_height: Option<u32>,
}

#[derive(Args, Debug)]
pub struct TargetFields {
    /// Target name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Publicly reachable URL of the target image
    #[arg(long, short = 'i')]
    pub image_url: String,

    /// Arbitrary JSON metadata returned on recognition
    #[arg(long, short = 'm', value_parser = parse_json)]
    pub metadata: Option<Value>,

    /// Height of the printed image in millimetres
    #[arg(long)]
    pub physical_height: Option<u32>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Target collection ID
    pub collection: String,

    /// Target ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct BulkAddArgs {
    /// Target collection ID
    pub collection: String,

    /// JSON file with an array of targets, or '-' for stdin
    pub file: String,
}

fn parse_json(s: &str) -> Result<Value, String> {
    serde_json::from_str(s).map_err(|e| format!("invalid JSON: {}", e))
}

impl TargetFields {
    fn to_target(&self) -> NewTarget {
        let mut target = NewTarget::new(&self.name, &self.image_url);
        if let Some(metadata) = &self.metadata {
            target = target.with_metadata(metadata.clone());
        }
        if let Some(height) = self.physical_height {
            target = target.with_physical_height(height);
        }
        target
    }
}

impl UpdateArgs {
    fn to_update(&self) -> TargetUpdate {
        TargetUpdate {
            name: self.name.clone(),
            image_url: self.image_url.clone(),
            metadata: self.metadata.clone(),
            physical_height: self.physical_height,
        }
    }
}

impl TableRow for Target {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Rating", "Image"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            truncate(&self.name, 30),
            format_rating(self.rating, color),
            truncate(self.image_url.as_deref().unwrap_or("-"), 50),
        ]
    }
}

impl TableOutput for Target {
    fn print_table(&self, color: bool) {
        print_header(&self.name);
        println!();
        print_field("ID", &self.id, color);
        print_field("Rating", &format_rating(self.rating, color), color);
        if let Some(url) = &self.image_url {
            print_field("Image", url, color);
        }
        if let Some(metadata) = &self.metadata {
            print_field("Metadata", &metadata.to_string(), color);
        }
        for (key, value) in &self.extra {
            print_field(key, &value.to_string(), color);
        }
    }
}

impl TargetCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            TargetSubcommand::List(args) => self.list(args, global).await,
            TargetSubcommand::Add(args) => self.add(args, global).await,
            TargetSubcommand::View(args) => self.view(args, global).await,
            TargetSubcommand::Update(args) => self.update(args, global).await,
            TargetSubcommand::Delete(args) => self.delete(args, global).await,
            TargetSubcommand::BulkAdd(args) => self.bulk_add(args, global).await,
        }
    }

    async fn list(&self, args: &CollectionArgs, global: &GlobalOptions) -> Result<()> {
        let client = build_client(global)?;
        let targets = client.get_all_targets(&args.collection).await?;
        get_writer(global).write_list(&targets)
    }

    async fn add(&self, args: &AddArgs, global: &GlobalOptions) -> Result<()> {
        let client = build_client(global)?;
        let output = get_writer(global);

        let target = client
            .add_target(&args.collection, &args.fields.to_target())
            .await?;
        output.write_success(&format!("Added target {}", target.id));
        output.write_info("Regenerate the collection to make it recognizable.");
        output.write(&target)
    }

    async fn view(&self, args: &TargetArgs, global: &GlobalOptions) -> Result<()> {
        let client = build_client(global)?;
        let target = client.get_target(&args.collection, &args.id).await?;
        get_writer(global).write(&target)
    }

    async fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let update = args.to_update();
        if update.is_empty() {
            bail!("Nothing to update. Pass at least one of --name, --image-url, --metadata or --physical-height");
        }

        let client = build_client(global)?;
        let output = get_writer(global);

        let target = client
            .update_target(&args.collection, &args.id, &update)
            .await?;
        output.write_success(&format!("Updated target {}", target.id));
        output.write(&target)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        if !confirm_deletion("target", &args.id, args.yes)? {
            return Err(ApiError::Cancelled.into());
        }

        let client = build_client(global)?;
        client.delete_target(&args.collection, &args.id).await?;

        if global.json {
            println!("{}", serde_json::json!({ "deleted": args.id }));
        }
        get_writer(global).write_success(&format!("Deleted target {}", args.id));
        Ok(())
    }

    async fn bulk_add(&self, args: &BulkAddArgs, global: &GlobalOptions) -> Result<()> {
        let targets: Vec<NewTarget> = read_json_input(&args.file)?;
        if targets.is_empty() {
            bail!("{} contains no targets", args.file);
        }

        let client = build_client(global)?;
        let tc_id = args.collection.clone();
        let message = format!("Adding {} targets", targets.len());

        let job = run_job(client, &message, global, move |client| async move {
            client.add_targets(&tc_id, &targets).await
        })
        .await?;

        write_job(&get_writer(global), "Targets added", job)
    }
}
