//
//  wikitude-cli
//  cli/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{build_client, get_writer, GlobalOptions};
use crate::api::Project;
use crate::output::TableRow;
use crate::util::truncate;

/// List projects
#[derive(Args, Debug)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub command: ProjectSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectSubcommand {
    /// List projects with their collection counts
    #[command(visible_alias = "ls")]
    List,
}

impl TableRow for Project {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Target Collections", "Object Collections"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            truncate(&self.name, 40),
            self.target_collections.len().to_string(),
            self.object_target_collections.len().to_string(),
        ]
    }
}

impl ProjectCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ProjectSubcommand::List => {
                let client = build_client(global)?;
                let projects = client.get_all_projects().await?;
                tracing::debug!(
                    "{} projects, {} collections",
                    projects.len(),
                    projects.iter().map(Project::collection_count).sum::<usize>()
                );
                get_writer(global).write_list(&projects)
            }
        }
    }
}
