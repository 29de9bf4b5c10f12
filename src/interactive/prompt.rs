//
//  wikitude-cli
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive Prompts Module
//!
//! Thin wrappers over `dialoguer` for the few places the CLI asks the user
//! something: entering a token and confirming deletions.
//!
//! # Example
//!
//! ```no_run
//! use wikitude_cli::interactive::{confirm_deletion, prompt_password};
//!
//! let token = prompt_password("API token").unwrap();
//! if confirm_deletion("target collection", "tc-1", false).unwrap() {
//!     println!("deleting");
//! }
//! ```

use anyhow::{bail, Result};
use console::Term;
use dialoguer::{Confirm, Password};

/// Returns `true` when stdout and stderr are attached to a terminal.
pub fn is_interactive() -> bool {
    Term::stdout().is_term() && Term::stderr().is_term()
}

/// Reads a secret without echoing it.
pub fn prompt_password(message: &str) -> Result<String> {
    let password = Password::new().with_prompt(message).interact()?;
    Ok(password)
}

pub fn prompt_confirm_with_default(message: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(confirmed)
}

/// Asks before deleting `kind` `id`, unless `assume_yes` is set.
///
/// # Errors
///
/// Fails without prompting when the session is not interactive and
/// `assume_yes` is not set.
pub fn confirm_deletion(kind: &str, id: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if !is_interactive() {
        bail!("Refusing to delete {} '{}' without confirmation; pass --yes", kind, id);
    }
    prompt_confirm_with_default(&format!("Delete {} '{}'?", kind, id), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_yes_skips_prompt() {
        assert!(confirm_deletion("target", "t-1", true).unwrap());
    }
}
