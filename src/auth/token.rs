//
//  wikitude-cli
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Token input and format checks.
//!
//! Tokens are opaque to the client. The only local check is a format one;
//! whether a token is accepted is up to the server.

use anyhow::Result;

/// Reads a single line from stdin and trims it.
///
/// Intended for piped input: `echo "$WT_TOKEN" | wt auth login --with-token`.
///
/// # Errors
///
/// Returns `Err` if reading from stdin fails.
pub fn read_token_from_stdin() -> Result<String> {
    use std::io::{self, BufRead};

    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// Returns `true` if `token` is non-empty and contains no whitespace.
///
/// # Example
///
/// ```rust
/// use wikitude_cli::auth::validate_token;
///
/// assert!(validate_token("a1b2c3d4e5"));
/// assert!(!validate_token(""));
/// assert!(!validate_token("has space"));
/// ```
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// Returns `true` if `version` looks like an API version (digits only).
pub fn validate_api_version(version: &str) -> bool {
    !version.is_empty() && version.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_token() {
        assert!(validate_token("abc123"));
        assert!(!validate_token(""));
        assert!(!validate_token("has\ttab"));
        assert!(!validate_token("line\n"));
    }

    #[test]
    fn test_validate_api_version() {
        assert!(validate_api_version("3"));
        assert!(validate_api_version("2"));
        assert!(!validate_api_version(""));
        assert!(!validate_api_version("v3"));
    }
}
