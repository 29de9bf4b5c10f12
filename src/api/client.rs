//
//  wikitude-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Manager API
//!
//! [`ManagerClient`] is the request dispatcher every resource operation goes
//! through. For each call it:
//!
//! 1. fills the path template's placeholders
//! 2. attaches `Content-Type`, `X-Token` and `X-Version`
//! 3. sends exactly one request (no retries)
//! 4. treats 200, 202 and 204 as success and anything else as an
//!    [`ApiError::Service`] or [`ApiError::General`]
//!
//! Asynchronous server jobs are driven by the poller in
//! [`poller`](super::poller), which is built on the same dispatcher.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::error::ServiceErrorBody;
use super::path::{self, Placeholder};
use super::poller::{PollOptions, TokioWait, Wait};
use super::response::{has_json_content, ApiResponse};
use super::ApiError;
use crate::auth::Credentials;
use crate::config::Config;

/// Production endpoint of the Manager API.
pub const DEFAULT_ENDPOINT: &str = "https://api.wikitude.com";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Returns `true` for the statuses the Manager API uses to signal success.
pub fn is_success(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::OK | StatusCode::ACCEPTED | StatusCode::NO_CONTENT
    )
}

/// Builds the error for a non-success response.
///
/// A JSON body with `code`, `reason` and `message` becomes a service error.
/// Anything else, including a JSON body of a different shape, becomes a
/// general error carrying the status and raw text.
pub fn read_api_error(status: StatusCode, has_json: bool, text: String) -> ApiError {
    if has_json {
        match serde_json::from_str::<ServiceErrorBody>(&text) {
            Ok(body) => return body.into(),
            Err(e) => warn!("Error body was not a service error ({}), keeping raw text", e),
        }
    }

    ApiError::General {
        code: status.as_u16(),
        message: text,
    }
}

/// Client for the Wikitude cloud recognition Manager API.
///
/// The client is cheap to share by reference; it holds no mutable state.
///
/// # Example
///
/// ```rust,no_run
/// use wikitude_cli::api::ManagerClient;
/// use wikitude_cli::auth::Credentials;
///
/// # async fn example() -> Result<(), wikitude_cli::api::ApiError> {
/// let client = ManagerClient::new(Credentials::new("my-token", "3"))?;
/// let collections = client.get_all_target_collections().await?;
/// println!("{} collections", collections.len());
/// # Ok(())
/// # }
/// ```
pub struct ManagerClient {
    http: Client,
    /// Endpoint without a trailing slash, e.g. `https://api.wikitude.com`.
    endpoint: String,
    credentials: Credentials,
    poll: PollOptions,
    waiter: Arc<dyn Wait>,
}

impl ManagerClient {
    /// Creates a client for the production endpoint with default poll
    /// options.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(credentials: Credentials) -> Result<Self, ApiError> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("wt/{}", crate::VERSION))
                .build()?,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            credentials,
            poll: PollOptions::default(),
            waiter: Arc::new(TokioWait),
        })
    }

    /// Creates a client from the user's configuration.
    ///
    /// Endpoint and poll bounds come from `config`; the credentials are
    /// passed separately since tokens are not stored in the config file.
    pub fn from_config(config: &Config, credentials: Credentials) -> Result<Self, ApiError> {
        Ok(Self::new(credentials)?
            .with_endpoint(&config.core.endpoint)?
            .with_poll_options(config.poll_options()))
    }

    /// Points the client at a different endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidEndpoint`] unless `endpoint` is an absolute
    /// `http` or `https` URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wikitude_cli::api::ManagerClient;
    /// use wikitude_cli::auth::Credentials;
    ///
    /// let client = ManagerClient::new(Credentials::new("t", "3"))?
    ///     .with_endpoint("http://localhost:8080/")?;
    /// assert_eq!(client.endpoint(), "http://localhost:8080");
    /// # Ok::<(), wikitude_cli::api::ApiError>(())
    /// ```
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ApiError> {
        let parsed =
            Url::parse(endpoint).map_err(|_| ApiError::InvalidEndpoint(endpoint.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidEndpoint(endpoint.to_string()));
        }
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Replaces the poll interval and bounds used by asynchronous operations.
    pub fn with_poll_options(mut self, poll: PollOptions) -> Self {
        self.poll = poll;
        self
    }

    /// Replaces the timed-wait primitive used between polls.
    ///
    /// Pass a [`CancellableWait`](super::poller::CancellableWait) to make
    /// long-running jobs abortable.
    pub fn with_waiter(mut self, waiter: Arc<dyn Wait>) -> Self {
        self.waiter = waiter;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn poll_options(&self) -> &PollOptions {
        &self.poll
    }

    pub(crate) fn waiter(&self) -> &dyn Wait {
        self.waiter.as_ref()
    }

    /// Joins a resolved path onto the endpoint.
    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// Turns a `Location` header into a request URL.
    ///
    /// Absolute URLs are used as-is; anything else is treated as a path on
    /// the endpoint.
    pub(crate) fn resolve_location(&self, location: &str) -> String {
        match Url::parse(location) {
            Ok(url) => url.to_string(),
            Err(_) if location.starts_with('/') => self.url_for(location),
            Err(_) => format!("{}/{}", self.endpoint, location),
        }
    }

    /// Sends one request and classifies the response.
    ///
    /// # Parameters
    ///
    /// * `method` - One of GET, POST, PUT or DELETE
    /// * `template` - A path template from [`path`](super::path)
    /// * `params` - A value for every placeholder in `template`
    /// * `payload` - Optional JSON body
    ///
    /// # Errors
    ///
    /// - [`ApiError::UnresolvedPlaceholder`] before anything is sent
    /// - [`ApiError::Service`] / [`ApiError::General`] for non-success statuses
    /// - [`ApiError::Network`] / [`ApiError::Decode`] for transport and body
    ///   failures
    pub async fn dispatch(
        &self,
        method: Method,
        template: &str,
        params: &[(Placeholder, &str)],
        payload: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        let path = path::resolve(template, params)?;
        let url = self.url_for(&path);
        self.execute(method, &url, payload).await
    }

    /// Sends a request to a fully-qualified URL.
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: &str,
        payload: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        request = self.credentials.apply_to_request(request);

        if let Some(body) = payload {
            request = request.body(serde_json::to_vec(&body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let has_json = has_json_content(&headers);

        debug!("Response status {}", status);

        if !is_success(status) {
            let text = response.text().await?;
            return Err(read_api_error(status, has_json, text));
        }

        let body = if has_json {
            let text = response.text().await?;
            if text.trim().is_empty() {
                None
            } else {
                Some(serde_json::from_str(&text)?)
            }
        } else {
            None
        };

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }

    /// Dispatches a request and returns its JSON body, if any.
    ///
    /// `None` is returned for 204 responses and for 200/202 responses that
    /// carry no JSON.
    pub async fn send_request(
        &self,
        method: Method,
        template: &str,
        params: &[(Placeholder, &str)],
        payload: Option<Value>,
    ) -> Result<Option<Value>, ApiError> {
        Ok(self
            .dispatch(method, template, params, payload)
            .await?
            .into_body())
    }

    /// Dispatches a request and decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedResponse`] if the server sent no body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        template: &str,
        params: &[(Placeholder, &str)],
        payload: Option<Value>,
    ) -> Result<T, ApiError> {
        self.dispatch(method, template, params, payload)
            .await?
            .json()
    }

    /// Dispatches a request whose body, if any, is of no interest.
    pub async fn send_empty(
        &self,
        method: Method,
        template: &str,
        params: &[(Placeholder, &str)],
    ) -> Result<(), ApiError> {
        self.dispatch(method, template, params, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::path::{PROJECTS, TARGET_BY_ID, TARGET_COLLECTION};
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> ManagerClient {
        ManagerClient::new(Credentials::new("test-token", "3"))
            .unwrap()
            .with_endpoint(&server.url())
            .unwrap()
    }

    #[tokio::test]
    async fn test_headers_are_sent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/cloudrecognition/projects")
            .match_header("content-type", "application/json")
            .match_header("x-token", "test-token")
            .match_header("x-version", "3")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server);
        let body = client
            .send_request(Method::GET, PROJECTS, &[], None)
            .await
            .unwrap();

        assert_eq!(body, Some(json!([])));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_payload_is_sent_as_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/cloudrecognition/targetCollection/tc-1")
            .match_body(mockito::Matcher::Json(json!({"name": "renamed"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"tc-1","name":"renamed"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let body = client
            .send_request(
                Method::POST,
                TARGET_COLLECTION,
                &[(Placeholder::TcId, "tc-1")],
                Some(json!({"name": "renamed"})),
            )
            .await
            .unwrap();

        assert_eq!(body.unwrap()["name"], "renamed");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_no_content_returns_none() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/cloudrecognition/targetCollection/tc-1")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server);
        let body = client
            .send_request(
                Method::DELETE,
                TARGET_COLLECTION,
                &[(Placeholder::TcId, "tc-1")],
                None,
            )
            .await
            .unwrap();

        assert!(body.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_zero_length_json_returns_none() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/cloudrecognition/projects")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("")
            .create_async()
            .await;

        let client = client_for(&server);
        let body = client
            .send_request(Method::GET, PROJECTS, &[], None)
            .await
            .unwrap();
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn test_json_error_body_is_service_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/cloudrecognition/targetCollection/missing")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code":404,"reason":"NotFound","message":"Unknown collection"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .send_request(
                Method::GET,
                TARGET_COLLECTION,
                &[(Placeholder::TcId, "missing")],
                None,
            )
            .await
            .unwrap_err();

        match err {
            ApiError::Service {
                code,
                reason,
                message,
            } => {
                assert_eq!(code, crate::api::ServiceErrorCode::Number(404));
                assert_eq!(reason, "NotFound");
                assert_eq!(message, "Unknown collection");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_plain_error_body_is_general_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/cloudrecognition/projects")
            .with_status(502)
            .with_header("content-type", "text/html")
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .send_request(Method::GET, PROJECTS, &[], None)
            .await
            .unwrap_err();

        match err {
            ApiError::General { code, message } => {
                assert_eq!(code, 502);
                assert_eq!(message, "<html>Bad Gateway</html>");
            }
            other => panic!("expected general error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_error_falls_back_to_general() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/cloudrecognition/projects")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"boom"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .send_request(Method::GET, PROJECTS, &[], None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::General { code: 500, .. }));
    }

    #[tokio::test]
    async fn test_truncated_error_body_is_network_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/cloudrecognition/projects")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_chunked_body(|w| {
                w.write_all(br#"{"code":500,"#)?;
                Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "dropped"))
            })
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .send_request(Method::GET, PROJECTS, &[], None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_other_2xx_is_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/cloudrecognition/projects")
            .with_status(201)
            .with_body("created")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .send_request(Method::POST, PROJECTS, &[], None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::General { code: 201, .. }));
    }

    #[tokio::test]
    async fn test_unresolved_placeholder_sends_nothing() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .send_request(Method::GET, TARGET_BY_ID, &[(Placeholder::TcId, "tc")], None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::UnresolvedPlaceholder(_)));
        mock.assert_async().await;
    }

    #[test]
    fn test_with_endpoint_rejects_invalid_urls() {
        let client = ManagerClient::new(Credentials::new("t", "3")).unwrap();
        assert!(matches!(
            client.with_endpoint("not a url"),
            Err(ApiError::InvalidEndpoint(_))
        ));

        let client = ManagerClient::new(Credentials::new("t", "3")).unwrap();
        assert!(client.with_endpoint("ftp://example.com").is_err());
    }

    #[test]
    fn test_resolve_location() {
        let client = ManagerClient::new(Credentials::new("t", "3"))
            .unwrap()
            .with_endpoint("https://api.example.com/")
            .unwrap();

        assert_eq!(
            client.resolve_location("/status/123"),
            "https://api.example.com/status/123"
        );
        assert_eq!(
            client.resolve_location("https://jobs.example.com/status/9"),
            "https://jobs.example.com/status/9"
        );
    }

    #[test]
    fn test_is_success() {
        assert!(is_success(StatusCode::OK));
        assert!(is_success(StatusCode::ACCEPTED));
        assert!(is_success(StatusCode::NO_CONTENT));
        assert!(!is_success(StatusCode::CREATED));
        assert!(!is_success(StatusCode::NOT_FOUND));
    }
}
