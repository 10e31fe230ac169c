//! Result types for executed verification steps.

use serde::Serialize;
use std::time::Duration;

/// Maximum number of characters stored per captured stream excerpt.
///
/// Bounds the serialized report size. The full capture stays available to
/// the analyzer until it stores the step.
pub const MAX_EXCERPT_CHARS: usize = 500;

/// Untruncated capture of one executed command
#[derive(Debug, Clone)]
pub struct StepCapture {
    /// Exit code, or None when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

impl StepCapture {
    /// Check whether the command exited cleanly
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// One executed step as stored in the verification report.
///
/// Immutable once created; stream fields hold excerpts truncated to
/// [`MAX_EXCERPT_CHARS`].
#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    pub name: String,
    pub duration_ms: u64,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl StepResult {
    /// Store a capture under a step name, truncating both stream excerpts
    pub fn from_capture(name: &str, capture: &StepCapture) -> Self {
        Self {
            name: name.to_string(),
            duration_ms: capture.duration.as_millis() as u64,
            exit_code: capture.exit_code,
            stdout: excerpt(&capture.stdout),
            stderr: excerpt(&capture.stderr),
        }
    }

    /// Record a step whose command never started.
    ///
    /// There is no exit code and no captured output; the startup error
    /// text takes the place of the stderr excerpt.
    pub fn unstarted(name: &str, error: &str) -> Self {
        Self {
            name: name.to_string(),
            duration_ms: 0,
            exit_code: None,
            stdout: String::new(),
            stderr: excerpt(error),
        }
    }
}

/// Truncate a captured stream to the excerpt limit.
///
/// Counts characters rather than bytes so multi-byte output is never cut
/// mid-character. Input at or under the limit is returned unmodified.
fn excerpt(raw: &str) -> String {
    if raw.chars().count() <= MAX_EXCERPT_CHARS {
        return raw.to_string();
    }
    raw.chars().take(MAX_EXCERPT_CHARS).collect()
}
