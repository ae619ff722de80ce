//! End-to-end tests for `tfkit create` and `tfkit validate` against a fake
//! Terraform client script.
//!
//! The script keeps workspaces as marker files in the root module, so repeated
//! runs see the state left by earlier ones.

#![allow(clippy::expect_used)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

const FAKE_TERRAFORM: &str = r#"#!/bin/sh
state=".fake-terraform"
mkdir -p "$state"
echo "$*" >> "$state/calls.log"
echo "TF_IN_AUTOMATION=$TF_IN_AUTOMATION" >> "$state/env.log"
case "$1" in
  version)
    echo "Terraform @VERSION@"
    echo "on linux_amd64"
    ;;
  init)
    echo "Terraform has been successfully initialized!"
    ;;
  workspace)
    case "$2" in
      new)
        if [ -e "$state/ws-$3" ]; then
          echo "Workspace \"$3\" already exists" >&2
          exit 1
        fi
        touch "$state/ws-$3"
        echo "Created and switched to workspace \"$3\"!"
        ;;
      select)
        if [ ! -e "$state/ws-$3" ]; then
          echo "Workspace \"$3\" doesn't exist." >&2
          exit 1
        fi
        echo "Switched to workspace \"$3\"."
        ;;
    esac
    ;;
  validate)
    echo "Success! The configuration is valid."
    ;;
  *)
    echo "unexpected command: $*" >&2
    exit 1
    ;;
esac
"#;

struct Fixture {
    dir: TempDir,
    config: PathBuf,
}

impl Fixture {
    fn new(version: &str) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let client = dir.path().join("terraform");
        std::fs::write(&client, FAKE_TERRAFORM.replace("@VERSION@", version))
            .expect("write client");
        std::fs::set_permissions(&client, std::fs::Permissions::from_mode(0o755))
            .expect("chmod client");

        let root = dir.path().join("root");
        std::fs::create_dir(&root).expect("root module dir");
        let config = dir.path().join("tfkit.yml");
        std::fs::write(
            &config,
            format!(
                "client: {}\nroot_module_directory: {}\ncommand_timeout: 30\n",
                client.display(),
                root.display()
            ),
        )
        .expect("write config");
        Self { dir, config }
    }

    fn root(&self) -> PathBuf {
        self.dir.path().join("root")
    }

    fn tfkit(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tfkit"));
        cmd.env("NO_COLOR", "1")
            .arg("--config")
            .arg(&self.config)
            .current_dir(self.dir.path());
        cmd
    }

    fn calls(&self) -> Vec<String> {
        read_lines(&self.root().join(".fake-terraform/calls.log"))
    }

    fn env_log(&self) -> Vec<String> {
        read_lines(&self.root().join(".fake-terraform/env.log"))
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
#[serial]
fn test_create_runs_version_init_and_workspace_new() {
    let fx = Fixture::new("v0.14.11");

    fx.tfkit()
        .args(["create", "--instance", "default-ubuntu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kitchen-terraform-default-ubuntu"))
        .stdout(predicate::str::contains("created"));

    let calls = fx.calls();
    assert_eq!(calls.len(), 3, "calls: {calls:?}");
    assert_eq!(calls[0], "version");
    assert!(calls[1].starts_with("init -backend=true"));
    assert!(calls[1].contains("-upgrade"));
    assert!(calls[1].ends_with("-verify-plugins=true"));
    assert_eq!(calls[2], "workspace new kitchen-terraform-default-ubuntu");
    assert!(fx.env_log().iter().all(|l| l == "TF_IN_AUTOMATION=true"));
}

#[test]
#[serial]
fn test_create_twice_selects_existing_workspace() {
    let fx = Fixture::new("v1.5.7");

    fx.tfkit().arg("create").assert().success();
    fx.tfkit()
        .arg("create")
        .assert()
        .success()
        .stdout(predicate::str::contains("selected"));

    let calls = fx.calls();
    assert_eq!(calls.len(), 7, "calls: {calls:?}");
    assert!(!calls[1].contains("-verify-plugins"));
    assert_eq!(calls[5], "workspace new kitchen-terraform-default");
    assert_eq!(calls[6], "workspace select kitchen-terraform-default");
}

#[test]
#[serial]
fn test_create_unsupported_client_stops_after_version() {
    let fx = Fixture::new("v0.10.8");

    fx.tfkit()
        .arg("create")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not satisfy"));

    assert_eq!(fx.calls(), vec!["version"]);
}

#[test]
#[serial]
fn test_validate_prints_client_output() {
    let fx = Fixture::new("v1.5.7");

    fx.tfkit()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("The configuration is valid."));

    assert_eq!(fx.calls(), vec!["version", "validate"]);
}
