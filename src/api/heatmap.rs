//
//  wikitude-cli
//  api/heatmap.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Recognition heatmaps.
//!
//! A heatmap shows which areas of an image carry the features used for
//! recognition. Generating one is a server-side job; the completed status
//! holds the URL of the rendered heatmap image.

use reqwest::Method;
use serde_json::json;

use super::client::ManagerClient;
use super::path;
use super::poller::JobStatus;
use super::ApiError;

impl ManagerClient {
    /// Generates a heatmap for the image at `image_url` and waits for it.
    pub async fn generate_heatmap(&self, image_url: &str) -> Result<JobStatus, ApiError> {
        self.run_async(
            Method::POST,
            path::HEATMAP,
            &[],
            Some(json!({ "imageUrl": image_url })),
        )
        .await
    }
}
