//
//  wikitude-cli
//  api/path.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Path Templates
//!
//! The Manager API addresses resources through paths under
//! `/cloudrecognition/...` that embed up to two identifiers. Each path is
//! declared once here as a template with `${NAME}` placeholders and filled in
//! per request with [`resolve`].
//!
//! ## Placeholders
//!
//! | Placeholder | Token |
//! |-------------|-------|
//! | [`Placeholder::TcId`] | `${TC_ID}` |
//! | [`Placeholder::TargetId`] | `${TARGET_ID}` |
//! | [`Placeholder::GenerationId`] | `${GENERATION_ID}` |
//!
//! ## Example
//!
//! ```rust
//! use wikitude_cli::api::path::{self, Placeholder};
//!
//! let resolved = path::resolve(
//!     path::TARGET_BY_ID,
//!     &[(Placeholder::TcId, "tc-1"), (Placeholder::TargetId, "t-9")],
//! ).unwrap();
//! assert_eq!(resolved, "/cloudrecognition/targetCollection/tc-1/target/t-9");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use super::ApiError;

static PLACEHOLDER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{[A-Z_]+\}").expect("placeholder pattern is a valid regex")
});

/// A named slot in a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Target collection or object target collection id.
    TcId,
    /// Target or object target id.
    TargetId,
    /// Id of a generation job.
    GenerationId,
}

impl Placeholder {
    /// The literal token as it appears in a template.
    pub fn token(self) -> &'static str {
        match self {
            Self::TcId => "${TC_ID}",
            Self::TargetId => "${TARGET_ID}",
            Self::GenerationId => "${GENERATION_ID}",
        }
    }
}

// Image target collections

pub const TARGET_COLLECTIONS: &str = "/cloudrecognition/targetCollection";
pub const TARGET_COLLECTION: &str = "/cloudrecognition/targetCollection/${TC_ID}";
pub const GENERATE_CLOUD_ARCHIVE: &str =
    "/cloudrecognition/targetCollection/${TC_ID}/generation/cloudarchive";
pub const TARGET: &str = "/cloudrecognition/targetCollection/${TC_ID}/target";
pub const TARGETS: &str = "/cloudrecognition/targetCollection/${TC_ID}/targets";
pub const TARGET_BY_ID: &str = "/cloudrecognition/targetCollection/${TC_ID}/target/${TARGET_ID}";

// Object target collections

pub const OBJECT_COLLECTIONS: &str = "/cloudrecognition/objectTargetCollection/";
pub const OBJECT_COLLECTION: &str = "/cloudrecognition/objectTargetCollection/${TC_ID}";
pub const OBJECT_TARGETS: &str = "/cloudrecognition/objectTargetCollection/${TC_ID}/targets";
pub const OBJECT_TARGET_LIST: &str = "/cloudrecognition/objectTargetCollection/${TC_ID}/target";
pub const OBJECT_TARGET: &str =
    "/cloudrecognition/objectTargetCollection/${TC_ID}/target/${TARGET_ID}";
pub const OBJECT_TARGET_GENERATION: &str =
    "/cloudrecognition/objectTargetCollection/${TC_ID}/generation/target/${GENERATION_ID}";
pub const GENERATE_WTO: &str = "/cloudrecognition/objectTargetCollection/${TC_ID}/generation/wto";
pub const WTO_GENERATION: &str =
    "/cloudrecognition/objectTargetCollection/${TC_ID}/generation/wto/${GENERATION_ID}";
pub const OBJECT_COLLECTION_JOBS: &str = "/cloudrecognition/objectTargetCollection/${TC_ID}/jobs";

// Account level

pub const PROJECTS: &str = "/cloudrecognition/projects";
pub const HEATMAP: &str = "/cloudrecognition/heatmap";

/// Substitutes every placeholder in `template` with its supplied value.
///
/// Values are inserted verbatim. Substitution order does not matter since
/// templates never nest placeholders.
///
/// # Errors
///
/// Returns [`ApiError::UnresolvedPlaceholder`] if any `${...}` token is left
/// in the result, either because the caller did not supply it or because a
/// supplied value itself contained one.
pub fn resolve(template: &str, params: &[(Placeholder, &str)]) -> Result<String, ApiError> {
    let mut path = template.to_string();
    for (placeholder, value) in params {
        path = path.replace(placeholder.token(), value);
    }

    if PLACEHOLDER_PATTERN.is_match(&path) {
        return Err(ApiError::UnresolvedPlaceholder(path));
    }

    Ok(path)
}

/// Returns `true` if `path` still contains a `${...}` token.
pub fn has_placeholder(path: &str) -> bool {
    PLACEHOLDER_PATTERN.is_match(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TEMPLATES: &[&str] = &[
        TARGET_COLLECTIONS,
        TARGET_COLLECTION,
        GENERATE_CLOUD_ARCHIVE,
        TARGET,
        TARGETS,
        TARGET_BY_ID,
        OBJECT_COLLECTIONS,
        OBJECT_COLLECTION,
        OBJECT_TARGETS,
        OBJECT_TARGET_LIST,
        OBJECT_TARGET,
        OBJECT_TARGET_GENERATION,
        GENERATE_WTO,
        WTO_GENERATION,
        OBJECT_COLLECTION_JOBS,
        PROJECTS,
        HEATMAP,
    ];

    #[test]
    fn test_every_template_resolves_fully() {
        let params = [
            (Placeholder::TcId, "tc"),
            (Placeholder::TargetId, "t"),
            (Placeholder::GenerationId, "g"),
        ];
        for template in ALL_TEMPLATES {
            let path = resolve(template, &params).unwrap();
            assert!(!has_placeholder(&path), "{} left {}", template, path);
            assert!(path.starts_with("/cloudrecognition/"));
        }
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let err = resolve(TARGET_BY_ID, &[(Placeholder::TcId, "tc-1")]).unwrap_err();
        match err {
            ApiError::UnresolvedPlaceholder(path) => {
                assert_eq!(path, "/cloudrecognition/targetCollection/tc-1/target/${TARGET_ID}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_value_containing_placeholder_is_rejected() {
        let result = resolve(TARGET_COLLECTION, &[(Placeholder::TcId, "${TARGET_ID}")]);
        assert!(matches!(result, Err(ApiError::UnresolvedPlaceholder(_))));
    }

    #[test]
    fn test_values_are_inserted_verbatim() {
        let path = resolve(
            WTO_GENERATION,
            &[(Placeholder::GenerationId, "gen 1"), (Placeholder::TcId, "a/b")],
        )
        .unwrap();
        assert_eq!(
            path,
            "/cloudrecognition/objectTargetCollection/a/b/generation/wto/gen 1"
        );
    }

    #[test]
    fn test_template_without_placeholders() {
        assert_eq!(resolve(PROJECTS, &[]).unwrap(), PROJECTS);
    }
}
