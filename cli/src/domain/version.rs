//! Terraform client versions and version requirements.
//!
//! Pure functions only — no I/O, no async, no process execution.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use semver::{Version, VersionReq};

use crate::domain::error::VersionError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Requirement selecting the legacy command dialect (Terraform before 0.15.0).
pub const LEGACY_DIALECT_REQUIREMENT: &str = "< 0.15.0";

/// Default range of Terraform releases the driver supports.
pub const DEFAULT_VERSION_REQUIREMENT: &str = ">= 0.11.4, < 2.0.0";

#[allow(clippy::expect_used)] // literal pattern, covered by tests
static BANNER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Terraform v(\d+)\.(\d+)\.(\d+)").expect("valid banner pattern")
});

// ── Client version ───────────────────────────────────────────────────────────

/// Version reported by the installed Terraform client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientVersion {
    /// The banner was parsed.
    Known(Version),
    /// The banner did not contain a recognisable version.
    Unknown,
}

impl ClientVersion {
    /// Version used wherever an ordered value is needed.
    ///
    /// `Unknown` evaluates as `0.0.0`, so it always selects the legacy command
    /// dialect and fails any requirement with a positive lower bound.
    #[must_use]
    pub fn effective(&self) -> Version {
        match self {
            Self::Known(version) => version.clone(),
            Self::Unknown => Version::new(0, 0, 0),
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for ClientVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(version) => write!(f, "v{version}"),
            Self::Unknown => f.write_str("(unknown version)"),
        }
    }
}

/// Extract the client version from `terraform version` output.
///
/// Only the first `Terraform v<major>.<minor>.<patch>` occurrence is used;
/// pre-release suffixes and provider lines are ignored.
#[must_use]
pub fn parse_client_version(output: &str) -> ClientVersion {
    let Some(caps) = BANNER.captures(output) else {
        return ClientVersion::Unknown;
    };
    let component = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u64>().ok());
    match (component(1), component(2), component(3)) {
        (Some(major), Some(minor), Some(patch)) => {
            ClientVersion::Known(Version::new(major, minor, patch))
        }
        _ => ClientVersion::Unknown,
    }
}

// ── Version requirement ──────────────────────────────────────────────────────

/// Immutable predicate over client versions, e.g. `< 0.15.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRequirement {
    text: String,
    req: VersionReq,
}

impl VersionRequirement {
    /// Parse a requirement such as `">= 0.11.4, < 2.0.0"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid semver requirement.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let text = text.trim();
        let req = VersionReq::parse(text).map_err(|e| VersionError::InvalidRequirement {
            requirement: text.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            text: text.to_string(),
            req,
        })
    }

    /// Requirement selecting the legacy command dialect.
    #[must_use]
    pub fn legacy_dialect() -> Self {
        Self {
            text: LEGACY_DIALECT_REQUIREMENT.to_string(),
            req: VersionReq {
                comparators: vec![semver::Comparator {
                    op: semver::Op::Less,
                    major: 0,
                    minor: Some(15),
                    patch: Some(0),
                    pre: semver::Prerelease::EMPTY,
                }],
            },
        }
    }

    #[must_use]
    pub fn satisfied_by(&self, version: &ClientVersion) -> bool {
        self.req.matches(&version.effective())
    }
}

impl FromStr for VersionRequirement {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
