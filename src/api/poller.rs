//
//  wikitude-cli
//  api/poller.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Asynchronous Job Polling
//!
//! Some Manager API operations start background work on the server (archive
//! generation, bulk target creation, heatmaps). The server answers those
//! with `202 Accepted`, a `Location` header pointing at a status resource,
//! and optionally a body with `estimatedLatency` in milliseconds.
//!
//! [`ManagerClient::run_async`] drives such a job to completion:
//!
//! ```text
//! Submitted ──▶ Waiting ──▶ Polling ──▶ Completed
//!                              │  ▲
//!                              └──┘ status != COMPLETED, wait interval
//! ```
//!
//! 1. **Submitted**: the request goes out through the dispatcher.
//! 2. **Waiting**: sleep for `estimatedLatency`, or the poll interval when
//!    the server gave no estimate.
//! 3. **Polling**: GET the `Location` resource. `COMPLETED` ends the loop;
//!    any other status sleeps one interval and polls again.
//! 4. **Completed**: the full status body is returned.
//!
//! Any dispatcher error during submission or polling ends the loop and is
//! returned unchanged.
//!
//! ## Bounds
//!
//! [`PollOptions`] caps the loop by attempts and/or overall time. The default
//! is a one hour deadline with no attempt cap; [`PollOptions::unbounded`]
//! polls until the server reports completion.
//!
//! ## Waiting
//!
//! Sleeps go through the [`Wait`] trait. [`TokioWait`] is a plain timer and
//! [`CancellableWait`] can be interrupted from another task, which makes the
//! whole operation return [`ApiError::Cancelled`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, info};

use super::client::ManagerClient;
use super::path::Placeholder;
use super::response::ApiResponse;
use super::ApiError;

/// Interval between status checks when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10_000);

/// Overall deadline for a job when none is configured.
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(3600);

/// Status value that ends the poll loop.
pub const STATUS_COMPLETED: &str = "COMPLETED";

/// Cadence and bounds of the poll loop.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use wikitude_cli::api::PollOptions;
///
/// let options = PollOptions::default()
///     .with_interval(Duration::from_secs(2))
///     .with_max_attempts(30);
/// assert_eq!(options.timeout, Some(Duration::from_secs(3600)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PollOptions {
    /// Delay between status checks.
    pub interval: Duration,
    /// Give up after this many status checks.
    pub max_attempts: Option<u32>,
    /// Give up when the next wait would end past this much time.
    pub timeout: Option<Duration>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: None,
            timeout: Some(DEFAULT_POLL_TIMEOUT),
        }
    }
}

impl PollOptions {
    /// Polls until the job completes, however long that takes.
    pub fn unbounded() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: None,
            timeout: None,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }
}

/// Body of an async job's status resource.
///
/// Only `status` is interpreted; every other field is kept in `extra` so the
/// completed body can be handed back exactly as the server sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStatus {
    /// `PENDING`, `PROCESSING`, `COMPLETED`, ...
    pub status: String,
    /// All remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobStatus {
    /// Reads a status body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedResponse`] unless `value` is an object
    /// with a string `status` field.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        let Value::Object(mut fields) = value else {
            return Err(ApiError::UnexpectedResponse(
                "job status is not a JSON object".to_string(),
            ));
        };

        match fields.remove("status") {
            Some(Value::String(status)) => Ok(Self {
                status,
                extra: fields,
            }),
            _ => Err(ApiError::UnexpectedResponse(
                "job status has no 'status' field".to_string(),
            )),
        }
    }

    fn from_response(response: ApiResponse) -> Result<Self, ApiError> {
        let body = response.into_body().ok_or_else(|| {
            ApiError::UnexpectedResponse("job status response had no JSON body".to_string())
        })?;
        Self::from_value(body)
    }

    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }

    /// Server-suggested delay before the next check, if present.
    pub fn estimated_latency(&self) -> Option<Duration> {
        self.extra.get("estimatedLatency").and_then(latency_from_value)
    }

    /// Looks up an extra field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Rebuilds the body as received.
    pub fn into_value(self) -> Value {
        let mut fields = self.extra;
        fields.insert("status".to_string(), Value::String(self.status));
        Value::Object(fields)
    }
}

fn latency_from_value(value: &Value) -> Option<Duration> {
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|ms| *ms >= 0.0).map(|ms| ms as u64))
        .map(Duration::from_millis)
}

/// A timed wait between polls.
///
/// Implementations must wait for (about) the requested duration and may
/// return early with an error, typically [`ApiError::Cancelled`].
#[async_trait]
pub trait Wait: Send + Sync {
    async fn wait(&self, duration: Duration) -> Result<(), ApiError>;
}

/// Sleeps on the tokio timer. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioWait;

#[async_trait]
impl Wait for TokioWait {
    async fn wait(&self, duration: Duration) -> Result<(), ApiError> {
        tokio::time::sleep(duration).await;
        Ok(())
    }
}

/// A wait that can be interrupted through a [`CancelHandle`].
///
/// Once cancelled, every current and future wait returns
/// [`ApiError::Cancelled`]. Dropping the handle without cancelling leaves
/// the waits running to their full duration.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use wikitude_cli::api::{CancellableWait, ManagerClient};
/// use wikitude_cli::auth::Credentials;
///
/// # fn example() -> Result<(), wikitude_cli::api::ApiError> {
/// let (waiter, handle) = CancellableWait::new();
/// let client = ManagerClient::new(Credentials::new("token", "3"))?
///     .with_waiter(Arc::new(waiter));
///
/// tokio::spawn(async move {
///     if tokio::signal::ctrl_c().await.is_ok() {
///         handle.cancel();
///     }
/// });
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CancellableWait {
    cancelled: watch::Receiver<bool>,
}

/// Cancels the waits of the [`CancellableWait`] it was created with.
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

impl CancellableWait {
    pub fn new() -> (Self, CancelHandle) {
        let (sender, cancelled) = watch::channel(false);
        (Self { cancelled }, CancelHandle { sender })
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }
}

#[async_trait]
impl Wait for CancellableWait {
    async fn wait(&self, duration: Duration) -> Result<(), ApiError> {
        if self.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let mut cancelled = self.cancelled.clone();
        let sleep = tokio::time::sleep(duration);
        tokio::pin!(sleep);

        let interrupted = tokio::select! {
            _ = &mut sleep => None,
            changed = cancelled.wait_for(|flag| *flag) => Some(changed.is_ok()),
        };

        match interrupted {
            None => Ok(()),
            Some(true) => Err(ApiError::Cancelled),
            // Handle dropped without cancelling
            Some(false) => {
                sleep.await;
                Ok(())
            }
        }
    }
}

impl ManagerClient {
    /// Submits an operation that completes asynchronously on the server and
    /// polls until it is done.
    ///
    /// # Parameters
    ///
    /// Same as [`ManagerClient::dispatch`].
    ///
    /// # Returns
    ///
    /// The final status body, including any result fields the server added.
    ///
    /// # Errors
    ///
    /// - Any error from the dispatcher, unchanged
    /// - [`ApiError::MissingLocation`] if the submission carried no
    ///   `Location` header
    /// - [`ApiError::PollAttemptsExceeded`] / [`ApiError::PollTimedOut`] when
    ///   the configured bounds run out
    /// - [`ApiError::Cancelled`] if the waiter was cancelled
    pub async fn run_async(
        &self,
        method: Method,
        template: &str,
        params: &[(Placeholder, &str)],
        payload: Option<Value>,
    ) -> Result<JobStatus, ApiError> {
        let accepted = self.dispatch(method, template, params, payload).await?;

        let location = accepted
            .location()
            .ok_or(ApiError::MissingLocation)?
            .to_string();
        let status_url = self.resolve_location(&location);

        let initial_delay = accepted
            .body
            .as_ref()
            .and_then(|body| body.get("estimatedLatency"))
            .and_then(latency_from_value)
            .unwrap_or(self.poll_options().interval);

        info!(
            "Job accepted at {}, first status check in {}ms",
            location,
            initial_delay.as_millis()
        );

        self.poll_status(&status_url, initial_delay).await
    }

    /// Waits `initial_delay`, then polls `status_url` until the job completes
    /// or a bound is hit.
    ///
    /// The initial delay never exceeds the configured timeout, so at least
    /// one status check happens before the deadline.
    pub async fn poll_status(
        &self,
        status_url: &str,
        initial_delay: Duration,
    ) -> Result<JobStatus, ApiError> {
        let options = self.poll_options().clone();
        let started = Instant::now();

        let initial_delay = match options.timeout {
            Some(timeout) if initial_delay > timeout => {
                debug!(
                    "Clamping first wait of {}ms to the {}ms timeout",
                    initial_delay.as_millis(),
                    timeout.as_millis()
                );
                timeout
            }
            _ => initial_delay,
        };

        self.waiter().wait(initial_delay).await?;
        let mut waited = initial_delay;
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            let response = self.execute(Method::GET, status_url, None).await?;
            let status = JobStatus::from_response(response)?;

            debug!("Status check {}: {}", attempts, status.status);

            if status.is_completed() {
                info!("Job completed after {} status checks", attempts);
                return Ok(status);
            }

            if let Some(max) = options.max_attempts {
                if attempts >= max {
                    return Err(ApiError::PollAttemptsExceeded { attempts });
                }
            }

            if let Some(timeout) = options.timeout {
                let elapsed = started.elapsed().max(waited);
                if elapsed + options.interval > timeout {
                    return Err(ApiError::PollTimedOut { elapsed });
                }
            }

            self.waiter().wait(options.interval).await?;
            waited += options.interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::path::{GENERATE_CLOUD_ARCHIVE, HEATMAP};
    use crate::auth::Credentials;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// Records requested waits instead of sleeping.
    #[derive(Default)]
    struct RecordingWait {
        waits: Mutex<Vec<Duration>>,
    }

    impl RecordingWait {
        fn waits(&self) -> Vec<Duration> {
            self.waits.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Wait for RecordingWait {
        async fn wait(&self, duration: Duration) -> Result<(), ApiError> {
            self.waits.lock().unwrap().push(duration);
            Ok(())
        }
    }

    fn client_for(
        server: &mockito::ServerGuard,
        options: PollOptions,
    ) -> (ManagerClient, Arc<RecordingWait>) {
        let waiter = Arc::new(RecordingWait::default());
        let client = ManagerClient::new(Credentials::new("test-token", "3"))
            .unwrap()
            .with_endpoint(&server.url())
            .unwrap()
            .with_poll_options(options)
            .with_waiter(waiter.clone());
        (client, waiter)
    }

    async fn accept_job(
        server: &mut mockito::ServerGuard,
        path: &str,
        location: &str,
        body: Option<&str>,
    ) -> mockito::Mock {
        let mut mock = server
            .mock("POST", path)
            .with_status(202)
            .with_header("location", location);
        if let Some(body) = body {
            mock = mock
                .with_header("content-type", "application/json")
                .with_body(body);
        }
        mock.create_async().await
    }

    async fn status_once(server: &mut mockito::ServerGuard, path: &str, body: &str) -> mockito::Mock {
        server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_round_trip_uses_estimated_latency_then_interval() {
        let mut server = mockito::Server::new_async().await;
        let submit = accept_job(
            &mut server,
            "/cloudrecognition/heatmap",
            "/status/123",
            Some(r#"{"estimatedLatency":500}"#),
        )
        .await;
        let pending = status_once(&mut server, "/status/123", r#"{"status":"PENDING"}"#).await;
        let completed = status_once(
            &mut server,
            "/status/123",
            r#"{"status":"COMPLETED","id":"abc"}"#,
        )
        .await;

        let options = PollOptions::default().with_interval(Duration::from_millis(10_000));
        let (client, waiter) = client_for(&server, options);

        let status = client
            .run_async(Method::POST, HEATMAP, &[], Some(json!({"imageUrl": "http://x/y.jpg"})))
            .await
            .unwrap();

        assert_eq!(status.clone().into_value(), json!({"status":"COMPLETED","id":"abc"}));
        assert_eq!(status.get("id"), Some(&json!("abc")));
        assert_eq!(
            waiter.waits(),
            vec![Duration::from_millis(500), Duration::from_millis(10_000)]
        );
        submit.assert_async().await;
        pending.assert_async().await;
        completed.assert_async().await;
    }

    #[tokio::test]
    async fn test_generation_without_estimate_waits_interval_first() {
        let mut server = mockito::Server::new_async().await;
        let path = "/cloudrecognition/targetCollection/tc-1/generation/cloudarchive";
        let location = "/cloudrecognition/targetCollection/tc-1/generation/job-9";
        let _submit = accept_job(&mut server, path, location, None).await;
        let _processing = status_once(&mut server, location, r#"{"status":"PROCESSING"}"#).await;
        let _completed = status_once(&mut server, location, r#"{"status":"COMPLETED"}"#).await;

        let options = PollOptions::default().with_interval(Duration::from_millis(250));
        let (client, waiter) = client_for(&server, options);

        let status = client
            .run_async(
                Method::POST,
                GENERATE_CLOUD_ARCHIVE,
                &[(Placeholder::TcId, "tc-1")],
                None,
            )
            .await
            .unwrap();

        assert!(status.is_completed());
        assert_eq!(
            waiter.waits(),
            vec![Duration::from_millis(250), Duration::from_millis(250)]
        );
    }

    #[tokio::test]
    async fn test_estimated_latency_is_honored_for_generation() {
        let mut server = mockito::Server::new_async().await;
        let path = "/cloudrecognition/targetCollection/tc-1/generation/cloudarchive";
        let location = "/cloudrecognition/targetCollection/tc-1/generation/job-9";
        let _submit = accept_job(&mut server, path, location, Some(r#"{"estimatedLatency":1000}"#)).await;
        let _processing = status_once(&mut server, location, r#"{"status":"PROCESSING"}"#).await;
        let _completed = status_once(&mut server, location, r#"{"status":"COMPLETED"}"#).await;

        let (client, waiter) = client_for(&server, PollOptions::default());
        let status = client
            .run_async(
                Method::POST,
                GENERATE_CLOUD_ARCHIVE,
                &[(Placeholder::TcId, "tc-1")],
                None,
            )
            .await
            .unwrap();

        assert_eq!(status.into_value(), json!({"status": "COMPLETED"}));
        assert_eq!(
            waiter.waits(),
            vec![Duration::from_millis(1000), DEFAULT_POLL_INTERVAL]
        );
    }

    #[tokio::test]
    async fn test_missing_location_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _submit = server
            .mock("POST", "/cloudrecognition/heatmap")
            .with_status(202)
            .create_async()
            .await;

        let (client, waiter) = client_for(&server, PollOptions::default());
        let err = client
            .run_async(Method::POST, HEATMAP, &[], None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::MissingLocation));
        assert!(waiter.waits().is_empty());
    }

    #[tokio::test]
    async fn test_submission_error_propagates() {
        let mut server = mockito::Server::new_async().await;
        let _submit = server
            .mock("POST", "/cloudrecognition/heatmap")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code":"E_URL","reason":"InvalidArgument","message":"bad url"}"#)
            .create_async()
            .await;

        let (client, _) = client_for(&server, PollOptions::default());
        let err = client
            .run_async(Method::POST, HEATMAP, &[], None)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "InvalidArgument (E_URL): bad url");
    }

    #[tokio::test]
    async fn test_poll_error_aborts_loop() {
        let mut server = mockito::Server::new_async().await;
        let _submit = accept_job(&mut server, "/cloudrecognition/heatmap", "/status/7", None).await;
        let failing = server
            .mock("GET", "/status/7")
            .with_status(503)
            .with_body("Service Unavailable")
            .expect(1)
            .create_async()
            .await;

        let (client, waiter) = client_for(&server, PollOptions::default());
        let err = client
            .run_async(Method::POST, HEATMAP, &[], None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::General { code: 503, .. }));
        assert_eq!(waiter.waits().len(), 1);
        failing.assert_async().await;
    }

    #[tokio::test]
    async fn test_max_attempts_bounds_the_loop() {
        let mut server = mockito::Server::new_async().await;
        let _submit = accept_job(&mut server, "/cloudrecognition/heatmap", "/status/1", None).await;
        let pending = server
            .mock("GET", "/status/1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"PENDING"}"#)
            .expect(3)
            .create_async()
            .await;

        let options = PollOptions::unbounded().with_max_attempts(3);
        let (client, waiter) = client_for(&server, options);
        let err = client
            .run_async(Method::POST, HEATMAP, &[], None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::PollAttemptsExceeded { attempts: 3 }));
        assert_eq!(waiter.waits().len(), 3);
        pending.assert_async().await;
    }

    #[tokio::test]
    async fn test_timeout_bounds_the_loop() {
        let mut server = mockito::Server::new_async().await;
        let _submit = accept_job(&mut server, "/cloudrecognition/heatmap", "/status/1", None).await;
        let pending = server
            .mock("GET", "/status/1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"PENDING"}"#)
            .expect(2)
            .create_async()
            .await;

        let options = PollOptions::default()
            .with_interval(Duration::from_secs(10))
            .with_timeout(Duration::from_secs(25));
        let (client, waiter) = client_for(&server, options);
        let err = client
            .run_async(Method::POST, HEATMAP, &[], None)
            .await
            .unwrap_err();

        match err {
            ApiError::PollTimedOut { elapsed } => assert_eq!(elapsed, Duration::from_secs(20)),
            other => panic!("expected timeout, got {other:?}"),
        }
        assert_eq!(
            waiter.waits(),
            vec![Duration::from_secs(10), Duration::from_secs(10)]
        );
        pending.assert_async().await;
    }

    #[tokio::test]
    async fn test_estimated_latency_is_clamped_to_timeout() {
        let mut server = mockito::Server::new_async().await;
        let _submit = accept_job(
            &mut server,
            "/cloudrecognition/heatmap",
            "/status/3",
            Some(r#"{"estimatedLatency":86400000000}"#),
        )
        .await;
        let pending = status_once(&mut server, "/status/3", r#"{"status":"PENDING"}"#).await;

        let options = PollOptions::default().with_timeout(Duration::from_secs(60));
        let (client, waiter) = client_for(&server, options);
        let err = client
            .run_async(Method::POST, HEATMAP, &[], None)
            .await
            .unwrap_err();

        match err {
            ApiError::PollTimedOut { elapsed } => assert_eq!(elapsed, Duration::from_secs(60)),
            other => panic!("expected timeout, got {other:?}"),
        }
        assert_eq!(waiter.waits(), vec![Duration::from_secs(60)]);
        pending.assert_async().await;
    }

    #[tokio::test]
    async fn test_long_estimate_kept_without_timeout() {
        let mut server = mockito::Server::new_async().await;
        let _submit = accept_job(
            &mut server,
            "/cloudrecognition/heatmap",
            "/status/4",
            Some(r#"{"estimatedLatency":7200000}"#),
        )
        .await;
        let _completed = status_once(&mut server, "/status/4", r#"{"status":"COMPLETED"}"#).await;

        let (client, waiter) = client_for(&server, PollOptions::unbounded());
        let status = client
            .run_async(Method::POST, HEATMAP, &[], None)
            .await
            .unwrap();

        assert!(status.is_completed());
        assert_eq!(waiter.waits(), vec![Duration::from_secs(7200)]);
    }

    #[tokio::test]
    async fn test_status_without_status_field_is_unexpected() {
        let mut server = mockito::Server::new_async().await;
        let _submit = accept_job(&mut server, "/cloudrecognition/heatmap", "/status/2", None).await;
        let _status = status_once(&mut server, "/status/2", r#"{"state":"DONE"}"#).await;

        let (client, _) = client_for(&server, PollOptions::default());
        let err = client
            .run_async(Method::POST, HEATMAP, &[], None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn test_cancelled_before_wait() {
        let (waiter, handle) = CancellableWait::new();
        handle.cancel();
        tokio_test::assert_err!(waiter.wait(Duration::from_secs(60)).await);
        assert!(waiter.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancel_interrupts_running_wait() {
        let (waiter, handle) = CancellableWait::new();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            handle.cancel();
        });

        let started = std::time::Instant::now();
        let result = waiter.wait(Duration::from_secs(60)).await;
        assert!(matches!(result, Err(ApiError::Cancelled)));
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_dropped_handle_still_sleeps() {
        let (waiter, handle) = CancellableWait::new();
        drop(handle);
        tokio_test::assert_ok!(waiter.wait(Duration::from_millis(10)).await);
    }

    #[test]
    fn test_job_status_from_value() {
        let status = JobStatus::from_value(json!({
            "status": "PENDING",
            "estimatedLatency": 1500
        }))
        .unwrap();
        assert!(!status.is_completed());
        assert_eq!(status.estimated_latency(), Some(Duration::from_millis(1500)));

        assert!(JobStatus::from_value(json!([1, 2])).is_err());
        assert!(JobStatus::from_value(json!({"status": 3})).is_err());
    }

    #[test]
    fn test_poll_options_defaults() {
        let options = PollOptions::default();
        assert_eq!(options.interval, Duration::from_secs(10));
        assert_eq!(options.max_attempts, None);
        assert_eq!(options.timeout, Some(Duration::from_secs(3600)));
        assert_eq!(PollOptions::unbounded().timeout, None);
    }
}
