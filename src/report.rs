//! Report types for one verification run.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::detect::ToolchainKind;
use crate::step::StepResult;

/// Overall verdict of a verification run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

/// Report for a run that executed steps against a recognized toolchain.
///
/// Steps appear in execution order and are never reordered. The status is
/// FAIL exactly when at least one failure reason has been recorded;
/// `record_failure` is the only operation that flips it.
#[derive(Debug, Serialize)]
pub struct RunReport {
    #[serde(rename = "type")]
    pub toolchain: ToolchainKind,
    pub steps: Vec<StepResult>,
    pub failures: Vec<String>,
    pub status: RunStatus,
}

impl RunReport {
    /// Create an empty passing report for a toolchain
    pub fn new(toolchain: ToolchainKind) -> Self {
        Self {
            toolchain,
            steps: Vec::new(),
            failures: Vec::new(),
            status: RunStatus::Pass,
        }
    }

    /// Append a completed step
    pub fn record_step(&mut self, step: StepResult) {
        self.steps.push(step);
    }

    /// Append a failure reason and mark the run failed
    pub fn record_failure(&mut self, reason: impl Into<String>) {
        self.failures.push(reason.into());
        self.status = RunStatus::Fail;
    }

    /// Check whether the run passed so far
    pub fn passed(&self) -> bool {
        self.status == RunStatus::Pass
    }
}

/// Report for a run that never reached step execution
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub status: RunStatus,
}

impl ErrorReport {
    /// Report a target path that does not exist
    pub fn path_not_found(path: &Path) -> Self {
        Self {
            error: format!("Path not found: {}", path.display()),
            status: RunStatus::Fail,
        }
    }

    /// Report a directory with no recognized toolchain marker
    pub fn unknown_toolchain() -> Self {
        Self {
            error: "Unknown project type (no package.json or Cargo.toml)".to_string(),
            status: RunStatus::Fail,
        }
    }
}

/// Final report emitted for one invocation.
///
/// Serializes untagged: a completed run carries the toolchain, steps, and
/// failures; a precondition failure carries only the error text and the
/// FAIL status.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum VerificationReport {
    Run(RunReport),
    Error(ErrorReport),
}

impl VerificationReport {
    pub fn status(&self) -> RunStatus {
        match self {
            VerificationReport::Run(report) => report.status,
            VerificationReport::Error(report) => report.status,
        }
    }

    /// Process exit code for calling automation: 0 on PASS, 1 otherwise.
    ///
    /// The report body is advisory; this code is the contract a CI
    /// pipeline relies on.
    pub fn exit_code(&self) -> i32 {
        match self.status() {
            RunStatus::Pass => 0,
            RunStatus::Fail => 1,
        }
    }

    /// Serialize the report as the indented document printed to stdout
    pub fn render(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }
}
