//! Step runner seam between analyzers and the operating system.

use std::path::Path;

use super::executor::{run_step, StepError};
use super::result::StepCapture;

/// Executes one verification step command in a working directory.
///
/// Analyzers drive every external command through this trait so their
/// sequencing and abort policies can be tested against a recording stub
/// instead of real child processes.
pub trait StepRunner {
    fn run(&self, command: &str, working_dir: &Path) -> Result<StepCapture, StepError>;
}

/// Step runner backed by the system shell
#[derive(Debug, Default)]
pub struct ShellRunner;

impl StepRunner for ShellRunner {
    fn run(&self, command: &str, working_dir: &Path) -> Result<StepCapture, StepError> {
        run_step(command, working_dir)
    }
}
