//! Analyzer for the scripted (npm) toolchain family.

use std::path::Path;

use super::{execute_step, Analyzer};
use crate::detect::ToolchainKind;
use crate::manifest::has_capability;
use crate::report::RunReport;
use crate::step::StepRunner;

/// Capability key gating the optional property-test step
const PROPERTY_TEST_CAPABILITY: &str = "test:property";

/// Analyzer for npm-based services.
///
/// Every step always runs: lint and unit-test failures are usually
/// unrelated, so one run surfaces both signals. Deep mode adds property
/// tests when the service declares them in its manifest; a service
/// without the capability gets no placeholder step in the report.
pub struct NodeAnalyzer;

impl Analyzer for NodeAnalyzer {
    fn toolchain(&self) -> ToolchainKind {
        ToolchainKind::Node
    }

    fn analyze(&self, runner: &dyn StepRunner, project_dir: &Path, deep: bool) -> RunReport {
        let mut report = RunReport::new(self.toolchain());

        execute_step(
            runner,
            &mut report,
            "lint",
            "npm run lint",
            project_dir,
            "Lint check failed",
        );

        execute_step(
            runner,
            &mut report,
            "test:unit",
            "npm run test:unit",
            project_dir,
            "Unit tests failed",
        );

        if deep && has_capability(project_dir, PROPERTY_TEST_CAPABILITY) {
            execute_step(
                runner,
                &mut report,
                "test:property",
                "npm run test:property",
                project_dir,
                "Property tests failed",
            );
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::stubs::ScriptedRunner;
    use std::fs;
    use tempfile::TempDir;

    fn node_dir(scripts: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            format!(r#"{{"scripts": {scripts}}}"#),
        )
        .unwrap();
        temp
    }

    #[test]
    fn test_two_steps_in_default_mode() {
        let temp = node_dir(r#"{"lint": "eslint .", "test:unit": "vitest"}"#);
        let runner = ScriptedRunner::passing();

        let report = NodeAnalyzer.analyze(&runner, temp.path(), false);

        assert!(report.passed());
        assert_eq!(report.steps.len(), 2);
        assert_eq!(report.steps[0].name, "lint");
        assert_eq!(report.steps[1].name, "test:unit");
        assert_eq!(runner.calls(), ["npm run lint", "npm run test:unit"]);
    }

    #[test]
    fn test_lint_failure_does_not_stop_unit_tests() {
        let temp = node_dir(r#"{"lint": "eslint ."}"#);
        let runner = ScriptedRunner::passing().with_exit("npm run lint", 1);

        let report = NodeAnalyzer.analyze(&runner, temp.path(), false);

        assert_eq!(report.steps.len(), 2);
        assert_eq!(runner.call_count(), 2);
        assert_eq!(report.failures, ["Lint check failed"]);
    }

    #[test]
    fn test_both_failures_are_reported_in_order() {
        let temp = node_dir("{}");
        let runner = ScriptedRunner::passing()
            .with_exit("npm run lint", 1)
            .with_exit("npm run test:unit", 1);

        let report = NodeAnalyzer.analyze(&runner, temp.path(), false);

        assert_eq!(report.failures, ["Lint check failed", "Unit tests failed"]);
    }

    #[test]
    fn test_deep_mode_runs_declared_property_tests() {
        let temp = node_dir(r#"{"test:property": "fast-check"}"#);
        let runner = ScriptedRunner::passing();

        let report = NodeAnalyzer.analyze(&runner, temp.path(), true);

        assert_eq!(report.steps.len(), 3);
        assert_eq!(report.steps[2].name, "test:property");
        assert_eq!(
            runner.calls(),
            ["npm run lint", "npm run test:unit", "npm run test:property"]
        );
    }

    #[test]
    fn test_deep_mode_omits_undeclared_property_tests() {
        let temp = node_dir(r#"{"lint": "eslint ."}"#);
        let runner = ScriptedRunner::passing();

        let report = NodeAnalyzer.analyze(&runner, temp.path(), true);

        // Omitted entirely, not recorded as skipped
        assert_eq!(report.steps.len(), 2);
        assert!(report.passed());
    }

    #[test]
    fn test_default_mode_ignores_declared_capability() {
        let temp = node_dir(r#"{"test:property": "fast-check"}"#);
        let runner = ScriptedRunner::passing();

        let report = NodeAnalyzer.analyze(&runner, temp.path(), false);

        assert_eq!(report.steps.len(), 2);
    }

    #[test]
    fn test_property_test_failure_is_reported() {
        let temp = node_dir(r#"{"test:property": "fast-check"}"#);
        let runner = ScriptedRunner::passing().with_exit("npm run test:property", 1);

        let report = NodeAnalyzer.analyze(&runner, temp.path(), true);

        assert_eq!(report.failures, ["Property tests failed"]);
    }

    #[test]
    fn test_unstartable_lint_still_runs_unit_tests() {
        let temp = node_dir("{}");
        let runner = ScriptedRunner::passing().with_unstartable("npm run lint");

        let report = NodeAnalyzer.analyze(&runner, temp.path(), false);

        assert_eq!(report.steps.len(), 2);
        assert_eq!(runner.call_count(), 2);
        assert!(report.failures[0].contains("could not start"));
    }
}
