//! Property-based tests for version parsing, gating, and command building.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;
use semver::Version;

use tfkit_cli::domain::{
    ClientVersion, Command, Dialect, DialectGate, DriverConfig, InitFactory, ValidateFactory,
    VersionRequirement, parse_client_version, validate_workspace_name,
};

fn version_strategy() -> impl Strategy<Value = (u64, u64, u64)> {
    (0u64..5, 0u64..40, 0u64..40)
}

proptest! {
    /// Banners recover exactly the three components.
    #[test]
    fn prop_banner_roundtrips_components(
        (major, minor, patch) in (0u64..100_000, 0u64..100_000, 0u64..100_000),
        suffix in prop_oneof![Just(""), Just("-beta1"), Just("-rc2"), Just("-alpha20200101")],
        trailer in "[a-z_ \n]{0,30}",
    ) {
        let banner = format!("Terraform v{major}.{minor}.{patch}{suffix}\n{trailer}");
        prop_assert_eq!(
            parse_client_version(&banner),
            ClientVersion::Known(Version::new(major, minor, patch))
        );
    }

    /// Text without the banner never parses and never panics.
    #[test]
    fn prop_text_without_banner_is_unknown(text in "[^T]{0,80}") {
        prop_assert_eq!(parse_client_version(&text), ClientVersion::Unknown);
    }

    /// The legacy requirement is exactly `v < 0.15.0`.
    #[test]
    fn prop_legacy_requirement_is_less_than_0_15_0((major, minor, patch) in version_strategy()) {
        let version = Version::new(major, minor, patch);
        let satisfied = VersionRequirement::legacy_dialect()
            .satisfied_by(&ClientVersion::Known(version.clone()));
        prop_assert_eq!(satisfied, version < Version::new(0, 15, 0));
    }

    /// Building twice from the same inputs yields the same descriptor.
    #[test]
    fn prop_factories_are_deterministic(
        (major, minor, patch) in version_strategy(),
        color in any::<bool>(),
        lock_timeout in 0u64..3600,
    ) {
        let version = ClientVersion::Known(Version::new(major, minor, patch));
        let driver = DriverConfig { color, lock_timeout, ..DriverConfig::default() };
        let complete = driver.complete("kitchen-terraform-default");

        let init = InitFactory::new(version.clone(), DialectGate::default());
        prop_assert_eq!(init.build(&complete), init.build(&complete));

        let validate = ValidateFactory::new(version.clone(), DialectGate::default());
        prop_assert_eq!(validate.build(&driver), validate.build(&driver));

        let expected = DialectGate::default().select(&version);
        let Command::Init(built) = init.build(&complete) else {
            return Err(TestCaseError::fail("init factory built a non-init command"));
        };
        prop_assert_eq!(built.dialect, expected);
        prop_assert_eq!(
            expected == Dialect::Legacy,
            Version::new(major, minor, patch) < Version::new(0, 15, 0)
        );
    }

    /// Workspace names built from safe characters are accepted.
    #[test]
    fn prop_safe_workspace_names_accepted(name in "[A-Za-z0-9_.-]{1,90}") {
        prop_assert!(validate_workspace_name(&name).is_ok());
    }

    /// Names with a path separator are rejected.
    #[test]
    fn prop_workspace_names_with_slash_rejected(a in "[a-z]{1,20}", b in "[a-z]{1,20}") {
        let name = format!("{a}/{b}");
        prop_assert!(validate_workspace_name(&name).is_err());
    }
}
