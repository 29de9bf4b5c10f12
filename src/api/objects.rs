//
//  wikitude-cli
//  api/objects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Object Target Collections
//!
//! Object targets are 3D objects reconstructed from a set of reference
//! images or a video. They live in object target collections, which are
//! compiled into a `.wto` file for use in the SDK.
//!
//! Creating object targets and generating a WTO file are server-side jobs
//! and go through the async poller. Generation information and WTO status
//! can also be fetched directly by generation id.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::client::ManagerClient;
use super::path::{self, Placeholder};
use super::poller::JobStatus;
use super::ApiError;

/// A named group of object targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectTargetCollection {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A 3D object target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectTarget {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Source material for a new object target.
///
/// Either `resource` (a video or image archive URL) or `images` must be set;
/// the server rejects requests with neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewObjectTarget {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// Additional fields passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ManagerClient {
    /// Creates an empty object target collection.
    pub async fn create_object_target_collection(
        &self,
        name: &str,
        metadata: Option<Value>,
    ) -> Result<ObjectTargetCollection, ApiError> {
        let mut payload = json!({ "name": name });
        if let Some(metadata) = metadata {
            payload["metadata"] = metadata;
        }
        self.send_json(Method::POST, path::OBJECT_COLLECTIONS, &[], Some(payload))
            .await
    }

    pub async fn get_all_object_target_collections(
        &self,
    ) -> Result<Vec<ObjectTargetCollection>, ApiError> {
        self.send_json(Method::GET, path::OBJECT_COLLECTIONS, &[], None)
            .await
    }

    pub async fn get_object_target_collection(
        &self,
        tc_id: &str,
    ) -> Result<ObjectTargetCollection, ApiError> {
        self.send_json(
            Method::GET,
            path::OBJECT_COLLECTION,
            &[(Placeholder::TcId, tc_id)],
            None,
        )
        .await
    }

    /// Replaces the name and metadata of an object target collection.
    pub async fn update_object_target_collection(
        &self,
        tc_id: &str,
        name: &str,
        metadata: Option<Value>,
    ) -> Result<ObjectTargetCollection, ApiError> {
        self.send_json(
            Method::PUT,
            path::OBJECT_COLLECTION,
            &[(Placeholder::TcId, tc_id)],
            Some(json!({ "name": name, "metadata": metadata })),
        )
        .await
    }

    pub async fn delete_object_target_collection(&self, tc_id: &str) -> Result<(), ApiError> {
        self.send_empty(
            Method::DELETE,
            path::OBJECT_COLLECTION,
            &[(Placeholder::TcId, tc_id)],
        )
        .await
    }

    /// Creates object targets from reference material.
    ///
    /// Reconstruction can take several minutes; the returned status holds
    /// the ids of the created targets.
    pub async fn create_object_targets(
        &self,
        tc_id: &str,
        targets: &[NewObjectTarget],
    ) -> Result<JobStatus, ApiError> {
        self.run_async(
            Method::POST,
            path::OBJECT_TARGETS,
            &[(Placeholder::TcId, tc_id)],
            Some(serde_json::to_value(targets)?),
        )
        .await
    }

    pub async fn get_all_object_targets(&self, tc_id: &str) -> Result<Vec<ObjectTarget>, ApiError> {
        self.send_json(
            Method::GET,
            path::OBJECT_TARGET_LIST,
            &[(Placeholder::TcId, tc_id)],
            None,
        )
        .await
    }

    pub async fn get_object_target(
        &self,
        tc_id: &str,
        target_id: &str,
    ) -> Result<ObjectTarget, ApiError> {
        self.send_json(
            Method::GET,
            path::OBJECT_TARGET,
            &[(Placeholder::TcId, tc_id), (Placeholder::TargetId, target_id)],
            None,
        )
        .await
    }

    pub async fn delete_object_target(&self, tc_id: &str, target_id: &str) -> Result<(), ApiError> {
        self.send_empty(
            Method::DELETE,
            path::OBJECT_TARGET,
            &[(Placeholder::TcId, tc_id), (Placeholder::TargetId, target_id)],
        )
        .await
    }

    /// Status of an object target creation job.
    pub async fn get_object_target_generation_information(
        &self,
        tc_id: &str,
        generation_id: &str,
    ) -> Result<Value, ApiError> {
        self.send_json(
            Method::GET,
            path::OBJECT_TARGET_GENERATION,
            &[
                (Placeholder::TcId, tc_id),
                (Placeholder::GenerationId, generation_id),
            ],
            None,
        )
        .await
    }

    /// Compiles the collection into a WTO file for the given SDK version.
    ///
    /// The server mails a download link to `email` when done; the completed
    /// status also carries the file URL.
    pub async fn generate_wto(
        &self,
        tc_id: &str,
        sdk_version: &str,
        email: &str,
    ) -> Result<JobStatus, ApiError> {
        self.run_async(
            Method::POST,
            path::GENERATE_WTO,
            &[(Placeholder::TcId, tc_id)],
            Some(json!({ "sdkVersion": sdk_version, "email": email })),
        )
        .await
    }

    pub async fn get_wto_generation_status(
        &self,
        tc_id: &str,
        generation_id: &str,
    ) -> Result<Value, ApiError> {
        self.send_json(
            Method::GET,
            path::WTO_GENERATION,
            &[
                (Placeholder::TcId, tc_id),
                (Placeholder::GenerationId, generation_id),
            ],
            None,
        )
        .await
    }

    /// Lists the generation jobs of an object target collection.
    pub async fn get_object_target_collection_jobs(
        &self,
        tc_id: &str,
    ) -> Result<Vec<Value>, ApiError> {
        self.send_json(
            Method::GET,
            path::OBJECT_COLLECTION_JOBS,
            &[(Placeholder::TcId, tc_id)],
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PollOptions;
    use crate::auth::Credentials;
    use mockito::Matcher;
    use std::time::Duration;

    fn client_for(server: &mockito::ServerGuard) -> ManagerClient {
        ManagerClient::new(Credentials::new("test-token", "3"))
            .unwrap()
            .with_endpoint(&server.url())
            .unwrap()
            .with_poll_options(PollOptions::default().with_interval(Duration::from_millis(1)))
    }

    #[tokio::test]
    async fn test_create_uses_trailing_slash_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/cloudrecognition/objectTargetCollection/")
            .match_body(Matcher::Json(json!({"name": "toys", "metadata": {"a": 1}})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"otc-1","name":"toys","metadata":{"a":1}}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let otc = client
            .create_object_target_collection("toys", Some(json!({"a": 1})))
            .await
            .unwrap();
        assert_eq!(otc.id, "otc-1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_uses_put() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/cloudrecognition/objectTargetCollection/otc-1")
            .match_body(Matcher::Json(json!({"name": "renamed", "metadata": null})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"otc-1","name":"renamed"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let otc = client
            .update_object_target_collection("otc-1", "renamed", None)
            .await
            .unwrap();
        assert_eq!(otc.name, "renamed");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_wto_sends_sdk_version_and_email() {
        let mut server = mockito::Server::new_async().await;
        let submit = server
            .mock("POST", "/cloudrecognition/objectTargetCollection/otc-1/generation/wto")
            .match_body(Matcher::Json(
                json!({"sdkVersion": "9.0", "email": "dev@example.com"}),
            ))
            .with_status(202)
            .with_header(
                "location",
                "/cloudrecognition/objectTargetCollection/otc-1/generation/wto/g-1",
            )
            .with_header("content-type", "application/json")
            .with_body(r#"{"estimatedLatency":1}"#)
            .create_async()
            .await;
        let status = server
            .mock("GET", "/cloudrecognition/objectTargetCollection/otc-1/generation/wto/g-1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"COMPLETED","wtoUrl":"https://cdn/x.wto"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let job = client
            .generate_wto("otc-1", "9.0", "dev@example.com")
            .await
            .unwrap();

        assert_eq!(job.get("wtoUrl"), Some(&json!("https://cdn/x.wto")));
        submit.assert_async().await;
        status.assert_async().await;
    }

    #[tokio::test]
    async fn test_generation_information_paths() {
        let mut server = mockito::Server::new_async().await;
        let info = server
            .mock("GET", "/cloudrecognition/objectTargetCollection/otc-1/generation/target/g-2")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"PROCESSING"}"#)
            .create_async()
            .await;
        let jobs = server
            .mock("GET", "/cloudrecognition/objectTargetCollection/otc-1/jobs")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":"g-2","status":"PROCESSING"}]"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let value = client
            .get_object_target_generation_information("otc-1", "g-2")
            .await
            .unwrap();
        assert_eq!(value["status"], "PROCESSING");

        let listed = client.get_object_target_collection_jobs("otc-1").await.unwrap();
        assert_eq!(listed.len(), 1);

        info.assert_async().await;
        jobs.assert_async().await;
    }

    #[tokio::test]
    async fn test_object_target_crud() {
        let mut server = mockito::Server::new_async().await;
        let list = server
            .mock("GET", "/cloudrecognition/objectTargetCollection/otc-1/target")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":"o-1","name":"mug"}]"#)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/cloudrecognition/objectTargetCollection/otc-1/target/o-1")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server);
        let targets = client.get_all_object_targets("otc-1").await.unwrap();
        assert_eq!(targets[0].name, "mug");
        client.delete_object_target("otc-1", "o-1").await.unwrap();

        list.assert_async().await;
        delete.assert_async().await;
    }

    #[test]
    fn test_new_object_target_serialization() {
        let target = NewObjectTarget {
            name: "mug".to_string(),
            resource: Some(json!({"uri": "https://x/mug.mp4", "type": "VIDEO"})),
            images: Vec::new(),
            metadata: None,
            extra: Map::new(),
        };
        assert_eq!(
            serde_json::to_value(&target).unwrap(),
            json!({"name": "mug", "resource": {"uri": "https://x/mug.mp4", "type": "VIDEO"}})
        );
    }
}
