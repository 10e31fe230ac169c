//! Toolchain analyzers: ordered step lists folded into a verdict.

pub mod node;
pub mod rust;

pub use node::NodeAnalyzer;
pub use rust::RustAnalyzer;

use std::path::Path;
use tracing::debug;

use crate::detect::ToolchainKind;
use crate::report::RunReport;
use crate::step::{StepResult, StepRunner};

/// Ordered verification procedure for one toolchain family.
///
/// Variants share the report shape and the step runner; they differ only
/// in their canonical step lists and abort policies.
pub trait Analyzer {
    /// Toolchain this analyzer verifies
    fn toolchain(&self) -> ToolchainKind;

    /// Run the canonical step list against a service directory
    fn analyze(&self, runner: &dyn StepRunner, project_dir: &Path, deep: bool) -> RunReport;
}

/// Select the analyzer variant for a detected toolchain
pub fn analyzer_for(kind: ToolchainKind) -> Option<Box<dyn Analyzer>> {
    match kind {
        ToolchainKind::Rust => Some(Box::new(RustAnalyzer)),
        ToolchainKind::Node => Some(Box::new(NodeAnalyzer)),
        ToolchainKind::Unknown => None,
    }
}

/// Execute one step and fold its outcome into the report.
///
/// Returns whether the step passed. A command that cannot be started is a
/// failed step with a reason naming the startup problem, never a silent
/// skip and never an orchestrator error.
fn execute_step(
    runner: &dyn StepRunner,
    report: &mut RunReport,
    name: &str,
    command: &str,
    project_dir: &Path,
    failure_reason: &str,
) -> bool {
    match runner.run(command, project_dir) {
        Ok(capture) => {
            let passed = capture.success();
            report.record_step(StepResult::from_capture(name, &capture));
            if !passed {
                report.record_failure(failure_reason);
            }
            passed
        }
        Err(err) => {
            debug!(step = name, "step could not start: {err}");
            report.record_step(StepResult::unstarted(name, &err.to_string()));
            report.record_failure(format!("{failure_reason} (could not start: {err})"));
            false
        }
    }
}
