//! Shared testing harness for `cartctl` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SCRUBBED_ENV: &[&str] =
    &["CARTCTL_CONFIG", "CARTCTL_API_URL", "PARTNER_CENTER_ACCESS_TOKEN", "RUST_LOG"];

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    api_url: Option<String>,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir, api_url: None }
    }

    /// Point every invocation at a mock partner API.
    pub(crate) fn with_api(mut self, server: &mockito::Server) -> Self {
        self.api_url = Some(format!("{}/v1/", server.url()));
        self
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write `cartctl.toml` into the work directory.
    pub(crate) fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("cartctl.toml");
        fs::write(&path, content).expect("Failed to write cartctl.toml");
        path
    }

    /// Build a command for invoking the compiled `cartctl` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("cartctl").expect("Failed to locate cartctl binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path());
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        if let Some(url) = &self.api_url {
            cmd.env("CARTCTL_API_URL", url);
        }
        cmd
    }

    /// Run `create` with every input supplied as a flag.
    pub(crate) fn create_with_flags(&self, extra: &[&str]) -> Command {
        let mut cmd = self.cli();
        cmd.args([
            "create",
            "--customer-id",
            "customer-1",
            "--catalog-item-id",
            "prod1:sku1",
            "--country",
            "US",
        ])
        .args(extra);
        cmd
    }
}
