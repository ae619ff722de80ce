//! Terraform workspace naming and output classification.
//!
//! This module is intentionally free of I/O, async, and external layer imports.
//! All functions take data in and return data out.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::ConfigError;

/// Prefix of every workspace created for a test instance.
pub const WORKSPACE_PREFIX: &str = "kitchen-terraform";

/// Longest workspace name accepted.
pub const MAX_WORKSPACE_NAME_LEN: usize = 90;

#[allow(clippy::expect_used)] // literal pattern, covered by tests
static ALREADY_EXISTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"Workspace "([^"]+)" already exists"#).expect("valid already-exists pattern")
});

/// Workspace name for a test instance, e.g. `kitchen-terraform-default-ubuntu`.
///
/// # Errors
///
/// Returns an error if the resulting name is not a valid workspace name.
pub fn workspace_name_for(instance: &str) -> Result<String, ConfigError> {
    let name = format!("{WORKSPACE_PREFIX}-{instance}");
    validate_workspace_name(&name)?;
    Ok(name)
}

/// Validates a workspace name.
///
/// Names are 1 to 90 characters of `[A-Za-z0-9_.-]`; path separators and
/// whitespace would be rejected by Terraform's state backends.
///
/// # Errors
///
/// Returns an error if the name is empty, too long, or has other characters.
pub fn validate_workspace_name(name: &str) -> Result<(), ConfigError> {
    let valid = !name.is_empty()
        && name.len() <= MAX_WORKSPACE_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidWorkspaceName(name.to_string()))
    }
}

/// Whether `workspace new` output reports that `workspace` already exists.
#[must_use]
pub fn reports_workspace_exists(output: &str, workspace: &str) -> bool {
    ALREADY_EXISTS
        .captures_iter(output)
        .any(|caps| caps.get(1).is_some_and(|m| m.as_str() == workspace))
}
