//
//  wikitude-cli
//  cli/heatmap.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Heatmap command

use anyhow::Result;
use clap::Args;

use super::{build_client, get_writer, run_job, write_job, GlobalOptions};

/// Generate a recognition heatmap for an image
#[derive(Args, Debug)]
pub struct HeatmapCommand {
    /// Publicly reachable URL of the image
    pub image_url: String,
}

impl HeatmapCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = build_client(global)?;
        let image_url = self.image_url.clone();

        let job = run_job(client, "Generating heatmap", global, move |client| async move {
            client.generate_heatmap(&image_url).await
        })
        .await?;

        write_job(&get_writer(global), "Heatmap generated", job)
    }
}
