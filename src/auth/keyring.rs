//
//  wikitude-cli
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Secure Token Storage
//!
//! API tokens are kept in the platform's native secret store rather than in
//! the config file:
//!
//! - **macOS**: Keychain Services
//! - **Linux**: Secret Service API (GNOME Keyring, KWallet)
//! - **Windows**: Windows Credential Manager
//!
//! Entries are keyed by the endpoint host (e.g. `api.wikitude.com`) under the
//! service name `wikitude-cli`, so separate tokens can be kept for staging
//! and production endpoints.

use anyhow::Result;
use keyring::Entry;

/// Service name identifying this application in the system keyring.
const SERVICE_NAME: &str = "wikitude-cli";

/// Token storage backed by the system keyring.
///
/// # Example
///
/// ```rust,no_run
/// use wikitude_cli::auth::KeyringStore;
///
/// fn example() -> anyhow::Result<()> {
///     let store = KeyringStore::new();
///     store.store("api.wikitude.com", "my-token")?;
///
///     if let Some(token) = store.get("api.wikitude.com")? {
///         println!("token has {} characters", token.len());
///     }
///
///     store.delete("api.wikitude.com")?;
///     Ok(())
/// }
/// ```
///
/// # Notes
///
/// - No keyring access happens until a method is called.
/// - On Linux a secret service daemon must be running.
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    /// Creates a store using the `wikitude-cli` service name.
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    /// Saves `token` for `host`, replacing any existing entry.
    pub fn store(&self, host: &str, token: &str) -> Result<()> {
        let entry = Entry::new(&self.service, host)?;
        entry.set_password(token)?;
        Ok(())
    }

    /// Looks up the token for `host`.
    ///
    /// Returns `Ok(None)` when no entry exists.
    pub fn get(&self, host: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, host)?;
        match entry.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the token for `host`. Deleting a missing entry is not an error.
    pub fn delete(&self, host: &str) -> Result<()> {
        let entry = Entry::new(&self.service, host)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
