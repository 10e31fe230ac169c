//! Analyzer for the compiled (cargo) toolchain family.

use std::path::Path;

use super::{execute_step, Analyzer};
use crate::detect::ToolchainKind;
use crate::report::RunReport;
use crate::step::StepRunner;

/// Regression suite script consulted in deep mode
const REGRESSION_SCRIPT: &str = "regression_suite.sh";

/// Analyzer for cargo-based services.
///
/// Compilation is a hard gate: when `cargo check` fails, the remaining
/// steps never run and the report holds that single step. Past the gate,
/// test, bench, and regression outcomes are independent signals and the
/// run continues through all of them.
pub struct RustAnalyzer;

impl Analyzer for RustAnalyzer {
    fn toolchain(&self) -> ToolchainKind {
        ToolchainKind::Rust
    }

    fn analyze(&self, runner: &dyn StepRunner, project_dir: &Path, deep: bool) -> RunReport {
        let mut report = RunReport::new(self.toolchain());

        // Later steps are meaningless against code that does not compile.
        if !execute_step(
            runner,
            &mut report,
            "cargo check",
            "cargo check",
            project_dir,
            "Compilation failed",
        ) {
            return report;
        }

        execute_step(
            runner,
            &mut report,
            "cargo test",
            "cargo test",
            project_dir,
            "Tests failed",
        );

        if deep {
            execute_step(
                runner,
                &mut report,
                "cargo bench",
                "cargo bench",
                project_dir,
                "Benchmarks failed",
            );

            if project_dir.join(REGRESSION_SCRIPT).exists() {
                execute_step(
                    runner,
                    &mut report,
                    "regression_suite",
                    "./regression_suite.sh",
                    project_dir,
                    "Regression suite failed",
                );
            }
        }

        report
    }
}
