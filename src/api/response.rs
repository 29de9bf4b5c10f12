//
//  wikitude-cli
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Successful HTTP responses, read into memory.
//!
//! The dispatcher hands back an [`ApiResponse`] for every 200/202/204 so that
//! callers can look at headers (the async poller needs `Location`) as well
//! as the body.

use reqwest::header::{HeaderMap, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;

const JSON_MEDIA_TYPE: &str = "application/json";

/// A successful response with its body already parsed.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status, always one of 200, 202 or 204.
    pub status: StatusCode,
    /// Response headers as received.
    pub headers: HeaderMap,
    /// Parsed JSON body, present only when [`has_json_content`] holds.
    pub body: Option<Value>,
}

impl ApiResponse {
    /// The `Location` header, if the server sent one.
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    /// Consumes the response and returns the body, if any.
    pub fn into_body(self) -> Option<Value> {
        self.body
    }

    /// Decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedResponse`] if there is no body and
    /// [`ApiError::Decode`] if it has the wrong shape.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let status = self.status;
        let body = self.body.ok_or_else(|| {
            ApiError::UnexpectedResponse(format!("expected a JSON body with status {}", status))
        })?;
        Ok(serde_json::from_value(body)?)
    }
}

/// Decides whether a response carries a JSON body worth parsing.
///
/// A body counts as present when the media type is `application/json` and
/// `Content-Length` is not `"0"`. Parameters after `;` are ignored and the
/// comparison is case-insensitive. A missing `Content-Length` (chunked
/// transfer) is not treated as empty.
pub fn has_json_content(headers: &HeaderMap) -> bool {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|media| media.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
        .unwrap_or(false);

    let is_empty = headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .map(|len| len.trim() == "0")
        .unwrap_or(false);

    is_json && !is_empty
}
