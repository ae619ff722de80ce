//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod command;
pub mod config;
pub mod error;
pub mod version;
pub mod workspace;

pub use command::{Command, Dialect, DialectGate, InitFactory, ValidateFactory};
pub use config::{CompleteConfig, DriverConfig, ExecutionOptions, validate_config};
pub use error::{CommandError, ConfigError, DriverError, VersionError};
pub use version::{ClientVersion, VersionRequirement, parse_client_version};
pub use workspace::{validate_workspace_name, workspace_name_for};
