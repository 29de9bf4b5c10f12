//
//  wikitude-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! The Manager API authenticates every request with a static pair of headers:
//!
//! - `X-Token`: the account's API token, created in the Wikitude license page
//! - `X-Version`: the API version the client speaks (currently `3`)
//!
//! There is no login exchange, refresh or expiry handling. The pair is held in
//! [`Credentials`] for the lifetime of a client.
//!
//! ## Module Structure
//!
//! - [`token`]: token format checks and reading a token from stdin
//! - [`keyring`]: secure storage of tokens in the system keyring
//!
//! ## Example
//!
//! ```rust,no_run
//! use wikitude_cli::auth::{Credentials, KeyringStore};
//!
//! fn load() -> anyhow::Result<Option<Credentials>> {
//!     let store = KeyringStore::new();
//!     Ok(store
//!         .get("api.wikitude.com")?
//!         .map(|token| Credentials::new(token, "3")))
//! }
//! ```

mod keyring;
mod token;

pub use keyring::*;
pub use token::*;

use std::fmt;

use reqwest::RequestBuilder;

/// Header carrying the API token.
pub const TOKEN_HEADER: &str = "X-Token";

/// Header carrying the API version.
pub const VERSION_HEADER: &str = "X-Version";

/// API version sent when none is configured.
pub const DEFAULT_API_VERSION: &str = "3";

/// The token/version pair attached to every Manager API request.
///
/// `Debug` output masks the token so credentials can be logged safely.
///
/// # Example
///
/// ```rust
/// use wikitude_cli::auth::Credentials;
///
/// let credentials = Credentials::new("0123456789abcdef", "3");
/// assert_eq!(credentials.version(), "3");
/// assert_eq!(credentials.masked_token(), "0123...cdef");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    version: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(token: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            version: version.into(),
        }
    }

    /// The raw API token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The API version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Adds the `X-Token` and `X-Version` headers to a request.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use wikitude_cli::auth::Credentials;
    /// use reqwest::Client;
    ///
    /// let credentials = Credentials::new("token", "3");
    /// let request = credentials.apply_to_request(
    ///     Client::new().get("https://api.wikitude.com/cloudrecognition/projects"),
    /// );
    /// ```
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(TOKEN_HEADER, &self.token)
            .header(VERSION_HEADER, &self.version)
    }

    /// Returns the token with everything but the first and last four
    /// characters hidden.
    pub fn masked_token(&self) -> String {
        mask_token(&self.token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.masked_token())
            .field("version", &self.version)
            .finish()
    }
}

/// Masks a token for display.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
