//
//  wikitude-cli
//  api/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Projects of the authenticated account.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::client::ManagerClient;
use super::path;
use super::ApiError;

/// A project groups target collections and object target collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_collections: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub object_target_collections: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Number of collections of either kind.
    pub fn collection_count(&self) -> usize {
        self.target_collections.len() + self.object_target_collections.len()
    }
}

impl ManagerClient {
    pub async fn get_all_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.send_json(Method::GET, path::PROJECTS, &[], None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;

    #[tokio::test]
    async fn test_get_all_projects() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/cloudrecognition/projects")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"id":"p-1","name":"Demo","targetCollections":[{"id":"tc-1"}],"objectTargetCollections":[]}]"#,
            )
            .create_async()
            .await;

        let client = ManagerClient::new(Credentials::new("t", "3"))
            .unwrap()
            .with_endpoint(&server.url())
            .unwrap();
        let projects = client.get_all_projects().await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Demo");
        assert_eq!(projects[0].collection_count(), 1);
        mock.assert_async().await;
    }
}
