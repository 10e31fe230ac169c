//! Step execution: one external command per verification step.

pub mod executor;
pub mod result;
pub mod runner;

pub use executor::{run_step, StepError};
pub use result::{StepCapture, StepResult, MAX_EXCERPT_CHARS};
pub use runner::{ShellRunner, StepRunner};
