//
//  wikitude-cli
//  api/targets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Image Target Collections
//!
//! Operations on image target collections and the targets inside them.
//!
//! ## Endpoints Used
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | Create / list collections | POST / GET | `/cloudrecognition/targetCollection` |
//! | Get / rename / delete collection | GET / POST / DELETE | `/cloudrecognition/targetCollection/{tc}` |
//! | List / add targets | GET / POST | `/cloudrecognition/targetCollection/{tc}/target` |
//! | Bulk add targets (async) | POST | `/cloudrecognition/targetCollection/{tc}/targets` |
//! | Get / update / delete target | GET / POST / DELETE | `/cloudrecognition/targetCollection/{tc}/target/{id}` |
//! | Generate cloud archive (async) | POST | `/cloudrecognition/targetCollection/{tc}/generation/cloudarchive` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use wikitude_cli::api::{ManagerClient, NewTarget};
//! use wikitude_cli::auth::Credentials;
//!
//! # async fn example() -> Result<(), wikitude_cli::api::ApiError> {
//! let client = ManagerClient::new(Credentials::new("token", "3"))?;
//!
//! let tc = client.create_target_collection("posters").await?;
//! client
//!     .add_target(&tc.id, &NewTarget::new("front", "https://example.com/front.jpg"))
//!     .await?;
//!
//! let job = client.generate_target_collection(&tc.id).await?;
//! println!("generation finished: {}", job.status);
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::client::ManagerClient;
use super::path::{self, Placeholder};
use super::poller::JobStatus;
use super::ApiError;

/// A named group of image targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetCollection {
    pub id: String,
    pub name: String,
    /// Creation time in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Last modification time in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<i64>,
    /// Any other fields the server returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single recognizable image inside a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Recognition quality rating assigned by the server (-1 to 3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for adding or updating a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTarget {
    pub name: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// Physical height of the printed image in millimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_height: Option<u32>,
}

impl NewTarget {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
            metadata: None,
            physical_height: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_physical_height(mut self, millimetres: u32) -> Self {
        self.physical_height = Some(millimetres);
        self
    }
}

/// Partial update of a target. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_height: Option<u32>,
}

impl TargetUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl From<NewTarget> for TargetUpdate {
    fn from(target: NewTarget) -> Self {
        Self {
            name: Some(target.name),
            image_url: Some(target.image_url),
            metadata: target.metadata,
            physical_height: target.physical_height,
        }
    }
}

impl ManagerClient {
    /// Creates an empty target collection.
    pub async fn create_target_collection(&self, name: &str) -> Result<TargetCollection, ApiError> {
        self.send_json(
            Method::POST,
            path::TARGET_COLLECTIONS,
            &[],
            Some(json!({ "name": name })),
        )
        .await
    }

    /// Lists every target collection of the account.
    pub async fn get_all_target_collections(&self) -> Result<Vec<TargetCollection>, ApiError> {
        self.send_json(Method::GET, path::TARGET_COLLECTIONS, &[], None)
            .await
    }

    /// Renames a target collection.
    pub async fn rename_target_collection(
        &self,
        tc_id: &str,
        name: &str,
    ) -> Result<TargetCollection, ApiError> {
        self.send_json(
            Method::POST,
            path::TARGET_COLLECTION,
            &[(Placeholder::TcId, tc_id)],
            Some(json!({ "name": name })),
        )
        .await
    }

    pub async fn get_target_collection(&self, tc_id: &str) -> Result<TargetCollection, ApiError> {
        self.send_json(
            Method::GET,
            path::TARGET_COLLECTION,
            &[(Placeholder::TcId, tc_id)],
            None,
        )
        .await
    }

    /// Deletes a target collection and all of its targets.
    pub async fn delete_target_collection(&self, tc_id: &str) -> Result<(), ApiError> {
        self.send_empty(
            Method::DELETE,
            path::TARGET_COLLECTION,
            &[(Placeholder::TcId, tc_id)],
        )
        .await
    }

    pub async fn get_all_targets(&self, tc_id: &str) -> Result<Vec<Target>, ApiError> {
        self.send_json(
            Method::GET,
            path::TARGET,
            &[(Placeholder::TcId, tc_id)],
            None,
        )
        .await
    }

    /// Adds one target to a collection.
    ///
    /// The collection has to be regenerated before the target becomes
    /// recognizable.
    pub async fn add_target(&self, tc_id: &str, target: &NewTarget) -> Result<Target, ApiError> {
        self.send_json(
            Method::POST,
            path::TARGET,
            &[(Placeholder::TcId, tc_id)],
            Some(serde_json::to_value(target)?),
        )
        .await
    }

    /// Adds many targets at once.
    ///
    /// This runs as a server-side job; the returned status lists the
    /// created targets and any per-target failures.
    pub async fn add_targets(
        &self,
        tc_id: &str,
        targets: &[NewTarget],
    ) -> Result<JobStatus, ApiError> {
        self.run_async(
            Method::POST,
            path::TARGETS,
            &[(Placeholder::TcId, tc_id)],
            Some(serde_json::to_value(targets)?),
        )
        .await
    }

    pub async fn get_target(&self, tc_id: &str, target_id: &str) -> Result<Target, ApiError> {
        self.send_json(
            Method::GET,
            path::TARGET_BY_ID,
            &[(Placeholder::TcId, tc_id), (Placeholder::TargetId, target_id)],
            None,
        )
        .await
    }

    /// Changes the fields set in `update` and keeps the rest.
    pub async fn update_target(
        &self,
        tc_id: &str,
        target_id: &str,
        update: &TargetUpdate,
    ) -> Result<Target, ApiError> {
        self.send_json(
            Method::POST,
            path::TARGET_BY_ID,
            &[(Placeholder::TcId, tc_id), (Placeholder::TargetId, target_id)],
            Some(serde_json::to_value(update)?),
        )
        .await
    }

    pub async fn delete_target(&self, tc_id: &str, target_id: &str) -> Result<(), ApiError> {
        self.send_empty(
            Method::DELETE,
            path::TARGET_BY_ID,
            &[(Placeholder::TcId, tc_id), (Placeholder::TargetId, target_id)],
        )
        .await
    }

    /// Compiles the collection into a cloud archive so its targets can be
    /// recognized. Waits for the generation job to finish.
    pub async fn generate_target_collection(&self, tc_id: &str) -> Result<JobStatus, ApiError> {
        self.run_async(
            Method::POST,
            path::GENERATE_CLOUD_ARCHIVE,
            &[(Placeholder::TcId, tc_id)],
            None,
        )
        .await
    }
}
